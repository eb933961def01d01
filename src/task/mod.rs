//! Task lifecycle management.
//!
//! This module implements the task-transition engine: the state machine
//! behind claim, cancel-claim, complete, cancel, terminate, and update;
//! the optimistic concurrency guard on updates; the priority-resolution
//! policy; the extension points consulted at fixed transition points; and
//! the bulk-operation coordinator that applies a single-task operation to
//! many tasks while isolating per-item failures. The module follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
