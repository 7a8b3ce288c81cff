//! Rule identifier and rule set types.

use super::RuleDomainError;
use crate::task::domain::StackName;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// Identifier of a rule document.
///
/// A rule identifier is a lowercase slug (`code-quality`), optionally
/// namespaced under the `stacks/` directory (`stacks/nestjs`).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleId(String);

impl RuleId {
    /// Creates a validated rule identifier from external input.
    ///
    /// # Errors
    ///
    /// Returns [`RuleDomainError::InvalidRuleId`] when the value is not a
    /// lowercase slug, or uses a namespace other than `stacks/`.
    pub fn new(value: impl Into<String>) -> Result<Self, RuleDomainError> {
        let raw = value.into();
        let normalized = raw.trim();
        if !is_valid_rule_path(normalized) {
            return Err(RuleDomainError::InvalidRuleId(raw));
        }
        Ok(Self(normalized.to_owned()))
    }

    /// Creates an identifier from the built-in rule vocabulary.
    ///
    /// Callers pass statically known slugs only, so no validation runs.
    pub(crate) fn builtin(id: &'static str) -> Self {
        Self(id.to_owned())
    }

    /// Creates the stack-scoped rule identifier for a validated stack name.
    #[must_use]
    pub fn for_stack(stack: &StackName) -> Self {
        Self(format!("stacks/{}", stack.as_str()))
    }

    /// Returns the identifier as `str`.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for RuleId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Set of rule identifiers selected for a task.
///
/// Duplicates collapse and no ordering contract is exposed; the backing
/// ordered set only makes iteration deterministic for rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RuleSet(BTreeSet<RuleId>);

impl RuleSet {
    /// Creates an empty rule set.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeSet::new())
    }

    /// Inserts a rule identifier, collapsing duplicates.
    pub fn insert(&mut self, id: RuleId) {
        self.0.insert(id);
    }

    /// Returns whether the set contains the given identifier.
    #[must_use]
    pub fn contains(&self, id: &RuleId) -> bool {
        self.0.contains(id)
    }

    /// Returns whether the set contains a rule with the given slug.
    #[must_use]
    pub fn contains_str(&self, id: &str) -> bool {
        self.0.iter().any(|rule| rule.as_str() == id)
    }

    /// Returns the number of selected rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates the selected rules in deterministic order.
    pub fn iter(&self) -> impl Iterator<Item = &RuleId> {
        self.0.iter()
    }
}

impl FromIterator<RuleId> for RuleSet {
    fn from_iter<I: IntoIterator<Item = RuleId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<RuleId> for RuleSet {
    fn extend<I: IntoIterator<Item = RuleId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for RuleSet {
    type Item = RuleId;
    type IntoIter = std::collections::btree_set::IntoIter<RuleId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

fn is_valid_rule_path(value: &str) -> bool {
    let mut segments = value.split('/');
    let first = segments.next().unwrap_or_default();
    match segments.next() {
        None => is_valid_slug(first),
        Some(second) => first == "stacks" && is_valid_slug(second) && segments.next().is_none(),
    }
}

fn is_valid_slug(segment: &str) -> bool {
    !segment.is_empty()
        && segment
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("code-quality")]
    #[case("stacks/nestjs")]
    #[case("api-development")]
    fn rule_id_accepts_valid_slugs(#[case] value: &str) {
        let id = RuleId::new(value).expect("valid rule id");
        assert_eq!(id.as_str(), value);
    }

    #[rstest]
    #[case("Code-Quality")]
    #[case("rules/security")]
    #[case("stacks/nestjs/extra")]
    #[case("")]
    #[case("with space")]
    fn rule_id_rejects_invalid_values(#[case] value: &str) {
        assert_eq!(
            RuleId::new(value),
            Err(RuleDomainError::InvalidRuleId(value.to_owned()))
        );
    }

    #[rstest]
    fn rule_set_collapses_duplicates() {
        let id = RuleId::builtin("security");
        let mut set = RuleSet::new();
        set.insert(id.clone());
        set.insert(RuleId::builtin("security"));
        assert_eq!(set.len(), 1);
        assert!(set.contains(&id));
    }
}
