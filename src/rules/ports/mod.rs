//! Port contracts for rule catalog access.
//!
//! Ports define infrastructure-agnostic interfaces used by rule consumers.

pub mod catalog;

pub use catalog::{RuleCatalog, RuleCatalogError, RuleCatalogResult, RuleSource};
