//! Filesystem rule catalog backed by capability-scoped directory access.
//!
//! Rule documents live as `.md` or `.mdc` files directly under the catalog
//! root, with stack-scoped rules under a `stacks/` subdirectory. The adapter
//! holds a capability to the catalog root only, so lookups cannot escape it.

use crate::rules::domain::RuleId;
use crate::rules::ports::{RuleCatalog, RuleCatalogError, RuleCatalogResult, RuleSource};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

/// File extensions recognized as rule documents, in resolution order.
const RULE_EXTENSIONS: &[&str] = &["md", "mdc"];

/// Directory holding stack-scoped rules.
const STACKS_DIR: &str = "stacks";

/// Rule catalog reading Markdown rule files from a directory.
#[derive(Debug)]
pub struct DirectoryRuleCatalog {
    root: Dir,
}

impl DirectoryRuleCatalog {
    /// Opens a catalog rooted at the given directory.
    ///
    /// # Errors
    ///
    /// Returns [`RuleCatalogError::UnavailableRoot`] when the directory
    /// cannot be opened.
    pub fn open_ambient(path: impl AsRef<Utf8Path>) -> RuleCatalogResult<Self> {
        let path = path.as_ref();
        let root = Dir::open_ambient_dir(path, ambient_authority()).map_err(|err| {
            RuleCatalogError::UnavailableRoot {
                path: path.to_owned(),
                reason: err.to_string(),
            }
        })?;
        Ok(Self { root })
    }

    /// Returns the relative document path backing a rule id, if one exists.
    fn find_document(&self, id: &RuleId) -> RuleCatalogResult<Option<Utf8PathBuf>> {
        for extension in RULE_EXTENSIONS {
            let candidate = Utf8PathBuf::from(format!("{id}.{extension}"));
            match self.root.metadata(&candidate) {
                Ok(metadata) if metadata.is_file() => return Ok(Some(candidate)),
                Ok(_) => {}
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => return Err(RuleCatalogError::storage(err)),
            }
        }
        Ok(None)
    }
}

impl RuleCatalog for DirectoryRuleCatalog {
    fn resolve(&self, id: &RuleId) -> RuleCatalogResult<Option<RuleSource>> {
        let path = self.find_document(id)?;
        Ok(path.map(|p| RuleSource::new(id.clone(), p)))
    }

    fn load(&self, id: &RuleId) -> RuleCatalogResult<Option<String>> {
        let Some(path) = self.find_document(id)? else {
            return Ok(None);
        };
        let content = self
            .root
            .read_to_string(&path)
            .map_err(RuleCatalogError::storage)?;
        Ok(Some(content))
    }

    fn list(&self) -> RuleCatalogResult<Vec<RuleId>> {
        let mut ids = list_rule_files(&self.root, None)?;
        match self.root.open_dir(STACKS_DIR) {
            Ok(stacks) => ids.extend(list_rule_files(&stacks, Some(STACKS_DIR))?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(RuleCatalogError::storage(err)),
        }
        ids.sort();
        Ok(ids)
    }
}

/// Collects rule ids from the `.md`/`.mdc` files directly inside `dir`.
fn list_rule_files(dir: &Dir, namespace: Option<&str>) -> RuleCatalogResult<Vec<RuleId>> {
    let mut ids = Vec::new();
    let entries = dir.entries().map_err(RuleCatalogError::storage)?;
    for entry_result in entries {
        let entry = entry_result.map_err(RuleCatalogError::storage)?;
        let file_type = entry.file_type().map_err(RuleCatalogError::storage)?;
        if !file_type.is_file() {
            continue;
        }
        let name = entry.file_name().map_err(RuleCatalogError::storage)?;
        if let Some(stem) = rule_stem(&name) {
            let qualified = namespace.map_or_else(|| stem.to_owned(), |ns| format!("{ns}/{stem}"));
            // Files with non-slug names are not part of the catalog vocabulary.
            if let Ok(id) = RuleId::new(qualified) {
                ids.push(id);
            }
        }
    }
    Ok(ids)
}

/// Strips a recognized rule extension from a file name.
fn rule_stem(name: &str) -> Option<&str> {
    let (stem, extension) = name.rsplit_once('.')?;
    RULE_EXTENSIONS.contains(&extension).then_some(stem)
}
