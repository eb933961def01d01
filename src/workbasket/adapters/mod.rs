//! Adapter implementations of the workbasket ports.

pub mod memory;
