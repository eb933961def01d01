//! Unit tests for the task module.
//!
//! Tests are organised by concern: domain invariants, the state machine,
//! the concurrency guard, priority resolution, the extension points, bulk
//! operations, and content updates.

mod harness;
