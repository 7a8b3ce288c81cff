//! Error types for rule domain validation.

use thiserror::Error;

/// Errors returned while constructing domain rule values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RuleDomainError {
    /// The rule identifier is not a valid slug.
    #[error("invalid rule identifier '{0}', expected lowercase slug segments")]
    InvalidRuleId(String),
}
