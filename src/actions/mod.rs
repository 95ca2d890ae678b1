//! # Action Layer
//!
//! Mediates between the views and the remote providers. Every data need
//! merges caller options over its defaults, builds an endpoint, fetches, and
//! turns the outcome into an [`Action`].
//!
//! Failures never escape as anything but [`Action::Error`]: transport errors,
//! malformed bodies and refused signups all travel the channel a success
//! would have used. Nothing is retried.

mod action;
mod blog_actions;
pub mod defaults;
mod error;
mod thunk;

pub use action::*;
pub use blog_actions::*;
pub use error::*;
pub use thunk::*;
