//! Rule vocabulary, selection, and catalog access.
//!
//! A rule is a named Markdown guideline document consumed by a human or AI
//! coding assistant. This module derives the set of applicable rules from
//! task metadata and resolves rule identifiers to documents on disk. The
//! module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The pure selection algorithm in [`selection`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod selection;
