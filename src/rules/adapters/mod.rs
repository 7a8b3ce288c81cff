//! Adapter implementations of the rule catalog port.

pub mod fs;
pub mod memory;

pub use fs::DirectoryRuleCatalog;
pub use memory::InMemoryRuleCatalog;
