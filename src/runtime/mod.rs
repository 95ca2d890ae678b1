//! Runtime wiring and lifecycle management.
//!
//! # Main Components
//!
//! - [`BlogSystem`] - Builds the action layer and starts the store
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod blog_system;
pub mod tracing;

pub use blog_system::*;
pub use self::tracing::*;
