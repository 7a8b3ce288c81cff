//! Catalog port for resolving rule identifiers to rule documents.

use crate::rules::domain::RuleId;
use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Result type for rule catalog operations.
pub type RuleCatalogResult<T> = Result<T, RuleCatalogError>;

/// A rule identifier resolved to a concrete document location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSource {
    /// The resolved rule identifier.
    pub id: RuleId,
    /// Path of the rule document, relative to the catalog root.
    pub path: Utf8PathBuf,
}

impl RuleSource {
    /// Creates a resolved rule source.
    #[must_use]
    pub const fn new(id: RuleId, path: Utf8PathBuf) -> Self {
        Self { id, path }
    }
}

/// Rule catalog lookup contract.
///
/// A missing rule is not an error: `resolve` and `load` return `None` so a
/// selection pass can report unresolved ids individually instead of failing
/// as a whole.
pub trait RuleCatalog: Send + Sync {
    /// Resolves a rule identifier to a document location.
    ///
    /// Returns `None` when no document backs the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RuleCatalogError`] when the underlying storage fails.
    fn resolve(&self, id: &RuleId) -> RuleCatalogResult<Option<RuleSource>>;

    /// Loads the Markdown content of a rule document.
    ///
    /// Returns `None` when no document backs the identifier.
    ///
    /// # Errors
    ///
    /// Returns [`RuleCatalogError`] when the underlying storage fails.
    fn load(&self, id: &RuleId) -> RuleCatalogResult<Option<String>>;

    /// Lists every rule identifier available in the catalog.
    ///
    /// # Errors
    ///
    /// Returns [`RuleCatalogError`] when the underlying storage fails.
    fn list(&self) -> RuleCatalogResult<Vec<RuleId>>;
}

/// Errors returned by rule catalog implementations.
#[derive(Debug, Clone, Error)]
pub enum RuleCatalogError {
    /// The catalog root could not be opened.
    #[error("cannot open rule catalog at '{path}': {reason}")]
    UnavailableRoot {
        /// Requested catalog root path.
        path: Utf8PathBuf,
        /// Underlying I/O failure description.
        reason: String,
    },

    /// Storage-layer failure while reading the catalog.
    #[error("catalog storage error: {0}")]
    Storage(Arc<dyn std::error::Error + Send + Sync>),
}

impl RuleCatalogError {
    /// Wraps a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Storage(Arc::new(err))
    }
}
