//! Content records exchanged with the remote providers.
//!
//! Each record keeps the fields the site reads and carries every other
//! provider field through `extra`, so a payload passed through the action
//! layer loses nothing.

pub mod author;
pub mod content;
pub mod search;
pub mod subscriber;
pub mod tag;

pub use author::*;
pub use content::*;
pub use search::*;
pub use subscriber::*;
pub use tag::*;
