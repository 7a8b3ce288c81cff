//! Task authoring for Rulebook.
//!
//! This module covers the task side of the docs-as-context workflow: the
//! metadata attached to a task document, lenient front-matter parsing,
//! persistence of authored tasks, and rendering the generated task Markdown
//! with its "Rules to apply" section. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]
//! - Front-matter parsing in [`parse`]

pub mod adapters;
pub mod domain;
pub mod parse;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
