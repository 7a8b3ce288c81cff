//! Rulebook: docs-as-context rule selection and task authoring.
//!
//! This crate implements the mechanical core of a docs-as-context workflow:
//! deriving which guideline ("rule") documents apply to a task from its
//! structured metadata, resolving those rules against a catalog of Markdown
//! rule files, and rendering the result into a generated task document.
//!
//! # Architecture
//!
//! Rulebook follows hexagonal architecture principles:
//!
//! - **Domain**: Pure business logic with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (filesystem, in-memory)
//!
//! # Modules
//!
//! - [`rules`]: Rule identifiers, the selection algorithm, and the catalog
//! - [`task`]: Task metadata, front-matter parsing, authoring, and rendering

pub mod rules;
pub mod task;
