//! Persisted package records.

use serde::{Deserialize, Serialize};

/// A registered package as returned by a registry store.
///
/// `hits` is a download counter owned and maintained by the store; the
/// service reads it but never writes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PackageRecord {
    pub name: String,
    pub url: String,
    pub hits: i64,
}
