//! Engine roles granted to principals.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Role granted to a principal.
///
/// Roles gate operations that are not scoped to a single workbasket, and
/// the administrative roles additionally bypass workbasket-permission
/// checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Regular user with no special privileges.
    User,
    /// Administrator for task operations only.
    TaskAdmin,
    /// Full administrator.
    Admin,
}

impl Role {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::TaskAdmin => "task_admin",
            Self::Admin => "admin",
        }
    }

    /// Returns whether the role bypasses workbasket-permission checks.
    #[must_use]
    pub const fn is_administrative(self) -> bool {
        matches!(self, Self::TaskAdmin | Self::Admin)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
