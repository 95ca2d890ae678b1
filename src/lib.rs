#![doc(html_logo_url = "https://www.rust-lang.org/logos/rust-logo-128x128.png")]
#![doc(html_favicon_url = "https://www.rust-lang.org/favicon.ico")]
//! # The Portland Pour
//!
//! > **Content client and state for a cocktail blog.**
//!
//! Posts, pages, tags and authors live in a hosted content API. This crate
//! fetches them, turns each outcome into a tagged [`Action`](actions::Action),
//! and folds those actions into a single [`BlogState`](store::BlogState) that
//! views read from.
//!
//! ## 🏗️ Design
//!
//! ### One fetch, two deliveries
//! Every data need is written once as a task resolving to a success action or
//! an [`ActionError`](actions::ActionError). Callers consume it either
//! - **push**: a [`Thunk`](actions::Thunk) emits a waiting action, then exactly
//!   one terminal action, into a dispatcher; or
//! - **pull**: an awaited `Result<Action, Action>` with no waiting action.
//!
//! ### Single writer, many readers
//! The store is a task that owns the state and applies actions one at a time
//! through the pure [`reduce`](store::reduce). Nothing else mutates it.
//!
//! ### Errors are data
//! Transport failures, malformed bodies and refused signups all arrive as
//! `Action::Error`. A failed fetch never clears what was already loaded.
//!
//! ## 🗺️ Module Tour
//!
//! - [`config`]: TOML configuration with production defaults.
//! - [`endpoint`]: [`Query`](endpoint::Query) merging and URL composition.
//! - [`http`]: the [`HttpClient`](http::HttpClient) seam, its reqwest
//!   implementation and a scripted mock.
//! - [`model`]: posts, pages, tags, authors, search results, subscribers.
//! - [`actions`]: the action layer.
//! - [`store`]: the state container.
//! - [`site`]: link, pager and home-layout helpers.
//! - [`runtime`]: [`BlogSystem`](runtime::BlogSystem) wiring and tracing setup.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! # Run the demo against the production blog
//! RUST_LOG=info cargo run
//!
//! # Point it at another config
//! PORTLAND_POUR_CONFIG=./pour.toml RUST_LOG=debug cargo run
//! ```

pub mod actions;
pub mod config;
pub mod endpoint;
pub mod http;
pub mod model;
pub mod runtime;
pub mod site;
pub mod store;
