//! In-memory storage backend.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{StoreError, StoreResult};
use crate::models::PackageRecord;
use crate::traits::PackageStore;

/// In-memory registry backend.
///
/// Records live in a `BTreeMap`, so listings and search results come
/// back in name order. Intended for tests and local development;
/// nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    packages: RwLock<BTreeMap<String, PackageRecord>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PackageStore for MemoryStore {
    async fn get_packages(&self) -> StoreResult<Vec<PackageRecord>> {
        let packages = self.packages.read().await;
        Ok(packages.values().cloned().collect())
    }

    async fn get_package(&self, name: &str) -> StoreResult<PackageRecord> {
        let packages = self.packages.read().await;
        packages
            .get(name)
            .cloned()
            .ok_or_else(|| StoreError::PackageNotFound {
                name: name.to_string(),
            })
    }

    async fn insert_package(&self, name: &str, url: &str) -> StoreResult<()> {
        let mut packages = self.packages.write().await;
        if packages.contains_key(name) {
            return Err(StoreError::PackageAlreadyExists {
                name: name.to_string(),
            });
        }

        packages.insert(
            name.to_string(),
            PackageRecord {
                name: name.to_string(),
                url: url.to_string(),
                hits: 0,
            },
        );
        Ok(())
    }

    async fn search_packages(&self, pattern: &str) -> StoreResult<Vec<PackageRecord>> {
        let packages = self.packages.read().await;
        Ok(packages
            .values()
            .filter(|record| record.name.contains(pattern))
            .cloned()
            .collect())
    }
}
