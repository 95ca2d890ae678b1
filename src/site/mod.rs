//! Link and layout helpers the views build on.

mod layout;
mod links;
mod pager;

pub use layout::*;
pub use links::*;
pub use pager::*;
