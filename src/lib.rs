//! In-memory REST backend for shopping lists and recipes.
//!
//! Two resources share identical CRUD semantics:
//!
//! ```text
//! GET    /shopping-list        list items
//! POST   /shopping-list        create {name, checked}       -> 201
//! PUT    /shopping-list/:id    replace {id, name, checked}  -> 200 | 404
//! DELETE /shopping-list/:id    remove                       -> 204 | 404
//! ```
//!
//! and the same under `/recipes` with `{id, name, ingredients}`. Data lives
//! in process memory only.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`store`]: Record types and the in-memory store
//! - [`api`]: HTTP routes and handlers
//! - [`server`]: Server start/stop lifecycle
//! - [`client`]: Typed HTTP client
//! - [`metrics`]: Prometheus metrics
//! - [`utils`]: Utility functions

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod metrics;
pub mod server;
pub mod store;
pub mod utils;

pub use config::Config;
pub use error::{PantryError, Result};
