//! Workbasket access control.
//!
//! A workbasket is an access-controlled container of tasks and the unit of
//! authorization for every task operation. This module models workbasket
//! permissions and access items, the port through which access items are
//! read, and the authorization gate evaluated before each task mutation.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - The authorization gate in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
