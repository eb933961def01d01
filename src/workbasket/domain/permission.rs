//! Workbasket permissions.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Permission on a workbasket, granted through an access item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkbasketPermission {
    /// View the workbasket itself.
    Open,
    /// Read tasks inside the workbasket.
    Read,
    /// List and inspect task details.
    ReadTasks,
    /// Modify tasks inside the workbasket.
    EditTasks,
    /// Create tasks inside the workbasket.
    Append,
    /// Move tasks out of the workbasket.
    Transfer,
}

impl WorkbasketPermission {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::Read => "read",
            Self::ReadTasks => "read_tasks",
            Self::EditTasks => "edit_tasks",
            Self::Append => "append",
            Self::Transfer => "transfer",
        }
    }
}

impl fmt::Display for WorkbasketPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for WorkbasketPermission {
    type Error = ParseWorkbasketPermissionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "open" => Ok(Self::Open),
            "read" => Ok(Self::Read),
            "read_tasks" => Ok(Self::ReadTasks),
            "edit_tasks" => Ok(Self::EditTasks),
            "append" => Ok(Self::Append),
            "transfer" => Ok(Self::Transfer),
            _ => Err(ParseWorkbasketPermissionError(value.to_owned())),
        }
    }
}

/// Error returned while parsing workbasket permissions from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown workbasket permission: {0}")]
pub struct ParseWorkbasketPermissionError(pub String);
