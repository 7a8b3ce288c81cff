//! Adapter implementations of the task persistence port.

pub mod memory;
