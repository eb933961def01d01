//! Access items granting permissions on a workbasket.

use super::{WorkbasketId, WorkbasketPermission};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Grant of a permission set on one workbasket to one access id.
///
/// The access id names either a user or a group resolved by the identity
/// provider. Access ids are case-insensitive and stored lowercase; there is
/// one item per `(workbasket, access id)` pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkbasketAccessItem {
    workbasket_id: WorkbasketId,
    access_id: String,
    permissions: BTreeSet<WorkbasketPermission>,
}

impl WorkbasketAccessItem {
    /// Creates an access item granting no permissions yet.
    #[must_use]
    pub fn new(workbasket_id: WorkbasketId, access_id: &str) -> Self {
        Self {
            workbasket_id,
            access_id: access_id.trim().to_ascii_lowercase(),
            permissions: BTreeSet::new(),
        }
    }

    /// Sets the granted permission set.
    #[must_use]
    pub fn with_permissions(
        mut self,
        permissions: impl IntoIterator<Item = WorkbasketPermission>,
    ) -> Self {
        self.permissions = permissions.into_iter().collect();
        self
    }

    /// Returns the workbasket this item applies to.
    #[must_use]
    pub const fn workbasket_id(&self) -> WorkbasketId {
        self.workbasket_id
    }

    /// Returns the lowercase access id the grant applies to.
    #[must_use]
    pub fn access_id(&self) -> &str {
        &self.access_id
    }

    /// Returns the granted permission set.
    #[must_use]
    pub const fn permissions(&self) -> &BTreeSet<WorkbasketPermission> {
        &self.permissions
    }

    /// Returns whether this item grants the given permission.
    #[must_use]
    pub fn grants(&self, permission: WorkbasketPermission) -> bool {
        self.permissions.contains(&permission)
    }

    /// Returns whether this item applies to the given access id,
    /// comparing case-insensitively.
    #[must_use]
    pub fn matches_access_id(&self, access_id: &str) -> bool {
        self.access_id == access_id.trim().to_ascii_lowercase()
    }
}
