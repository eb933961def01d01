//! Classification summaries attached to tasks.

use serde::{Deserialize, Serialize};

/// Denormalized view of the classification a task is categorized under.
///
/// The classification supplies the default priority consulted when no
/// manual priority or priority provider applies, and the service level the
/// surrounding system uses for due-date calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationSummary {
    key: String,
    priority: i32,
    service_level: String,
}

impl ClassificationSummary {
    /// Creates a summary from key, default priority, and service level.
    #[must_use]
    pub fn new(key: impl Into<String>, priority: i32, service_level: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            priority,
            service_level: service_level.into(),
        }
    }

    /// Returns the classification key.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the configured default priority.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns the service level as ISO-8601 duration text.
    #[must_use]
    pub fn service_level(&self) -> &str {
        &self.service_level
    }
}
