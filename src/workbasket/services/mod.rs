//! Authorization services for workbasket-scoped operations.

mod authorization;

pub use authorization::{AuthorizationError, AuthorizationService, require_any_role};
