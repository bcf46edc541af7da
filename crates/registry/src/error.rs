//! Error types for the package registry.

use thiserror::Error;

/// Reasons a candidate package name or source URL is rejected.
///
/// Each variant carries a fixed message that is surfaced verbatim to the
/// caller, so the messages are part of the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("package name must not be empty")]
    EmptyName,

    #[error("package name must be at most {} characters long", crate::validation::MAX_NAME_LENGTH)]
    NameTooLong,

    #[error("package name may only contain lowercase letters, digits, dots, dashes, and underscores")]
    InvalidCharacters,

    #[error("package name may not start or end with a dot, dash, or underscore")]
    LeadingOrTrailingSeparator,

    #[error("package name may not contain consecutive dots, dashes, or underscores")]
    ConsecutiveSeparators,

    #[error("package url must be a valid absolute URL")]
    InvalidUrl,
}

/// Errors produced by registry storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("package '{name}' not found")]
    PackageNotFound { name: String },

    #[error("package '{name}' already exists")]
    PackageAlreadyExists { name: String },

    #[error("store backend error: {0}")]
    Backend(eyre::Report),
}

impl StoreError {
    /// Wrap an arbitrary backend failure.
    pub fn backend(err: impl Into<eyre::Report>) -> Self {
        Self::Backend(err.into())
    }
}

/// Result type alias for storage backend operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Outcomes of registry operations, as rendered by the HTTP surface.
///
/// Validation failures are produced locally and never reach the store.
/// Store failures are classified by the service: expected misses and
/// duplicates become `NotFound`/`Conflict`, everything else is `Internal`
/// and its detail stays out of client responses.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("package '{0}' already exists")]
    Conflict(String),

    #[error("package '{0}' not found")]
    NotFound(String),

    #[error("internal registry error: {0}")]
    Internal(eyre::Report),
}

/// Result type alias for registry service operations.
pub type Result<T> = std::result::Result<T, RegistryError>;
