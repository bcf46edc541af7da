//! Registry operations over a storage backend.

use std::sync::Arc;

use crate::error::{RegistryError, Result, StoreError};
use crate::models::PackageRecord;
use crate::traits::PackageStore;
use crate::validation::{PackageName, PackageUrl};

/// Stateless orchestration layer between the HTTP surface and a store.
///
/// Validates inputs before they reach the backend, issues exactly one
/// store call per operation, and classifies store failures into the
/// outcomes the HTTP layer knows how to render. Constructed once with
/// its store and passed around explicitly.
#[derive(Clone)]
pub struct RegistryService {
    store: Arc<dyn PackageStore>,
}

impl RegistryService {
    /// Create a new registry service over the given store.
    pub fn new(store: Arc<dyn PackageStore>) -> Self {
        Self { store }
    }

    /// List every registered package.
    pub async fn list(&self) -> Result<Vec<PackageRecord>> {
        self.store.get_packages().await.map_err(internal)
    }

    /// Validate and register a new package.
    ///
    /// The name is validated before the URL; the first failing rule is
    /// reported. Nothing reaches the store unless both inputs pass.
    pub async fn create(&self, name: &str, url: &str) -> Result<()> {
        let name = PackageName::parse(name)?;
        let url = PackageUrl::parse(url)?;

        match self.store.insert_package(name.as_str(), url.as_str()).await {
            Ok(()) => {
                tracing::info!(package = %name, "registered package");
                Ok(())
            }
            Err(StoreError::PackageAlreadyExists { name }) => Err(RegistryError::Conflict(name)),
            Err(err) => Err(internal(err)),
        }
    }

    /// Fetch a single package by name.
    ///
    /// No name-format validation here: an unknown or malformed name is
    /// simply a miss.
    pub async fn fetch(&self, name: &str) -> Result<PackageRecord> {
        match self.store.get_package(name).await {
            Ok(record) => Ok(record),
            Err(StoreError::PackageNotFound { name }) => Err(RegistryError::NotFound(name)),
            Err(err) => Err(internal(err)),
        }
    }

    /// Find packages whose name contains the given pattern.
    ///
    /// No matches yields an empty list, never `NotFound`.
    pub async fn search(&self, pattern: &str) -> Result<Vec<PackageRecord>> {
        self.store.search_packages(pattern).await.map_err(internal)
    }

    /// Remove a registered package.
    ///
    /// Placeholder: removal needs an ownership check that is not designed
    /// yet, so nothing is deleted and the call always succeeds. See
    /// DESIGN.md for what a complete implementation requires.
    pub async fn remove(&self, name: &str) -> Result<()> {
        tracing::warn!(package = name, "package removal requested but not implemented");
        Ok(())
    }
}

fn internal(err: StoreError) -> RegistryError {
    match err {
        StoreError::Backend(report) => RegistryError::Internal(report),
        other => RegistryError::Internal(eyre::Report::new(other)),
    }
}
