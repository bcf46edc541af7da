//! Service-level behavior against an in-memory store and a failing stub.

use std::sync::Arc;

use async_trait::async_trait;
use depot_registry::{
    MemoryStore, PackageRecord, PackageStore, RegistryError, RegistryService, StoreError,
    StoreResult, ValidationError,
};

/// Store stub whose every operation fails, standing in for a broken
/// backend.
struct FailingStore;

#[async_trait]
impl PackageStore for FailingStore {
    async fn get_packages(&self) -> StoreResult<Vec<PackageRecord>> {
        Err(StoreError::backend(eyre::eyre!("connection refused")))
    }

    async fn get_package(&self, _name: &str) -> StoreResult<PackageRecord> {
        Err(StoreError::backend(eyre::eyre!("connection refused")))
    }

    async fn insert_package(&self, _name: &str, _url: &str) -> StoreResult<()> {
        Err(StoreError::backend(eyre::eyre!("connection refused")))
    }

    async fn search_packages(&self, _pattern: &str) -> StoreResult<Vec<PackageRecord>> {
        Err(StoreError::backend(eyre::eyre!("connection refused")))
    }
}

fn service() -> RegistryService {
    RegistryService::new(Arc::new(MemoryStore::new()))
}

fn failing_service() -> RegistryService {
    RegistryService::new(Arc::new(FailingStore))
}

#[tokio::test]
async fn create_then_list_returns_the_package() {
    let registry = service();
    registry
        .create("foo", "git://github.com/foocoder/foo.git")
        .await
        .unwrap();

    let packages = registry.list().await.unwrap();
    assert_eq!(packages.len(), 1);
    assert_eq!(packages[0].name, "foo");
    assert_eq!(packages[0].url, "git://github.com/foocoder/foo.git");
    assert_eq!(packages[0].hits, 0);
}

#[tokio::test]
async fn creating_the_same_package_twice_is_a_conflict() {
    let registry = service();
    registry
        .create("foo", "git://github.com/foocoder/foo.git")
        .await
        .unwrap();

    let err = registry
        .create("foo", "git://github.com/foocoder/foo.git")
        .await
        .unwrap_err();
    assert!(matches!(err, RegistryError::Conflict(name) if name == "foo"));
}

#[tokio::test]
async fn invalid_name_is_rejected_before_the_store_is_touched() {
    let registry = service();

    let err = registry
        .create("foo--bar", "git://github.com/foocoder/foo.git")
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Validation(ValidationError::ConsecutiveSeparators)
    ));

    // Nothing was stored.
    assert!(registry.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn invalid_url_is_rejected_after_the_name() {
    let registry = service();

    let err = registry.create("foo", "@").await.unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Validation(ValidationError::InvalidUrl)
    ));

    // Name errors win over URL errors.
    let err = registry.create("", "@").await.unwrap_err();
    assert!(matches!(
        err,
        RegistryError::Validation(ValidationError::EmptyName)
    ));
}

#[tokio::test]
async fn validation_failures_even_with_a_broken_store() {
    // Validation runs locally; the store is never consulted.
    let registry = failing_service();
    let err = registry.create("-foo", "git://a/b.git").await.unwrap_err();
    assert!(matches!(err, RegistryError::Validation(_)));
}

#[tokio::test]
async fn fetching_a_missing_package_is_not_found() {
    let registry = service();
    let err = registry.fetch("missing").await.unwrap_err();
    assert!(matches!(err, RegistryError::NotFound(name) if name == "missing"));
}

#[tokio::test]
async fn repeated_fetch_returns_the_identical_record() {
    let registry = service();
    registry
        .create("foo", "git://github.com/foocoder/foo.git")
        .await
        .unwrap();

    let first = registry.fetch("foo").await.unwrap();
    let second = registry.fetch("foo").await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn search_returns_matches_and_misses_are_empty() {
    let registry = service();
    registry
        .create("foo", "git://github.com/foocoder/foo.git")
        .await
        .unwrap();

    let matches = registry.search("foo").await.unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].name, "foo");

    let matches = registry.search("nothing").await.unwrap();
    assert!(matches.is_empty());
}

#[tokio::test]
async fn store_failures_surface_as_internal() {
    let registry = failing_service();

    assert!(matches!(
        registry.list().await.unwrap_err(),
        RegistryError::Internal(_)
    ));
    assert!(matches!(
        registry.fetch("foo").await.unwrap_err(),
        RegistryError::Internal(_)
    ));
    assert!(matches!(
        registry.search("foo").await.unwrap_err(),
        RegistryError::Internal(_)
    ));
    assert!(matches!(
        registry
            .create("foo", "git://a/b.git")
            .await
            .unwrap_err(),
        RegistryError::Internal(_)
    ));
}

#[tokio::test]
async fn remove_is_a_placeholder_that_always_succeeds() {
    // Even with a broken store: removal never touches the backend.
    let registry = failing_service();
    registry.remove("foo").await.unwrap();
}
