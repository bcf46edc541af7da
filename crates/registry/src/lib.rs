//! Package registry core for the Depot project.
//!
//! This crate provides the registry's domain logic: package name and
//! source URL validation, a trait-based storage interface with in-memory
//! and PostgreSQL backends, and the service layer that maps storage
//! outcomes onto the error taxonomy the HTTP surface renders.

pub mod backends;
pub mod error;
pub mod models;
pub mod service;
pub mod traits;
pub mod validation;

// Re-export the main interface and types for easy access
pub use backends::MemoryStore;
#[cfg(feature = "postgres")]
pub use backends::PostgresStore;
pub use error::{RegistryError, Result, StoreError, StoreResult, ValidationError};
pub use models::PackageRecord;
pub use service::RegistryService;
pub use traits::PackageStore;
pub use validation::{MAX_NAME_LENGTH, PackageName, PackageUrl};
