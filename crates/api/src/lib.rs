//! HTTP surface for the Depot package registry.
//!
//! Exposes the registry service as a small JSON API and owns the mapping
//! from registry outcomes to HTTP status codes.

pub mod config;
pub mod error;
pub mod handlers;
pub mod routes;

pub use self::config::Settings;
pub use self::routes::router;
