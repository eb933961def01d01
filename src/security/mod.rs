//! The acting principal and its roles.
//!
//! Every engine operation receives the acting principal as an explicit
//! argument rather than reading it from ambient state, keeping the engine
//! testable and thread-safe. A principal carries the user id, the group
//! ids resolved by an external identity provider, and the engine roles
//! granted to the user.

mod principal;
mod role;

pub use principal::Principal;
pub use role::Role;
