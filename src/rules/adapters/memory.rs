//! In-memory rule catalog for tests and embedded rule sets.

use crate::rules::domain::RuleId;
use crate::rules::ports::{RuleCatalog, RuleCatalogError, RuleCatalogResult, RuleSource};
use camino::Utf8PathBuf;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

/// Thread-safe in-memory rule catalog keyed by rule identifier.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRuleCatalog {
    state: Arc<RwLock<BTreeMap<RuleId, String>>>,
}

impl InMemoryRuleCatalog {
    /// Creates an empty in-memory catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts (or replaces) a rule document.
    ///
    /// # Errors
    ///
    /// Returns [`RuleCatalogError::Storage`] when the catalog lock is
    /// poisoned.
    pub fn insert(&self, id: RuleId, content: impl Into<String>) -> RuleCatalogResult<()> {
        let mut state = self
            .state
            .write()
            .map_err(|err| RuleCatalogError::storage(std::io::Error::other(err.to_string())))?;
        state.insert(id, content.into());
        Ok(())
    }
}

impl RuleCatalog for InMemoryRuleCatalog {
    fn resolve(&self, id: &RuleId) -> RuleCatalogResult<Option<RuleSource>> {
        let state = self
            .state
            .read()
            .map_err(|err| RuleCatalogError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state
            .contains_key(id)
            .then(|| RuleSource::new(id.clone(), Utf8PathBuf::from(format!("{id}.md")))))
    }

    fn load(&self, id: &RuleId) -> RuleCatalogResult<Option<String>> {
        let state = self
            .state
            .read()
            .map_err(|err| RuleCatalogError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.get(id).cloned())
    }

    fn list(&self) -> RuleCatalogResult<Vec<RuleId>> {
        let state = self
            .state
            .read()
            .map_err(|err| RuleCatalogError::storage(std::io::Error::other(err.to_string())))?;
        Ok(state.keys().cloned().collect())
    }
}
