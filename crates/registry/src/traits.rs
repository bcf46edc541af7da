//! Trait definition for registry storage backends.

use async_trait::async_trait;

use crate::error::StoreResult;
use crate::models::PackageRecord;

/// Storage interface consumed by the registry service.
///
/// Implementations persist package records and enforce name uniqueness.
/// Backends can use whatever medium fits (memory, SQL, ...); the service
/// only ever talks to this trait.
///
/// There is deliberately no removal operation: deleting a package needs
/// an ownership model that has not been designed yet, and leaving the
/// operation out keeps that gap visible at the type level.
#[async_trait]
pub trait PackageStore: Send + Sync {
    /// List every registered package.
    async fn get_packages(&self) -> StoreResult<Vec<PackageRecord>>;

    /// Get a single package by name.
    ///
    /// # Errors
    /// [`StoreError::PackageNotFound`](crate::error::StoreError::PackageNotFound)
    /// if no package with that name exists.
    async fn get_package(&self, name: &str) -> StoreResult<PackageRecord>;

    /// Insert a new package record with a zeroed hit counter.
    ///
    /// # Errors
    /// [`StoreError::PackageAlreadyExists`](crate::error::StoreError::PackageAlreadyExists)
    /// if the name is already taken.
    async fn insert_package(&self, name: &str, url: &str) -> StoreResult<()>;

    /// Find packages whose name contains the given pattern.
    ///
    /// No matches is an empty list, not an error.
    async fn search_packages(&self, pattern: &str) -> StoreResult<Vec<PackageRecord>>;
}
