//! Domain model for rule identifiers and rule sets.

mod error;
mod id;

pub use error::RuleDomainError;
pub use id::{RuleId, RuleSet};
