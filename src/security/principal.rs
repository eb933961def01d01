//! The acting principal passed into every engine operation.

use super::Role;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Identity of the caller on whose behalf an operation runs.
///
/// The user id and group ids together form the access ids matched against
/// workbasket access items; the roles feed role-gated operations and the
/// administrative bypass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    user_id: String,
    group_ids: Vec<String>,
    roles: BTreeSet<Role>,
}

impl Principal {
    /// Creates a principal with no group memberships and no roles.
    #[must_use]
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            group_ids: Vec::new(),
            roles: BTreeSet::new(),
        }
    }

    /// Sets the group ids resolved for the user.
    #[must_use]
    pub fn with_groups(mut self, group_ids: impl IntoIterator<Item = String>) -> Self {
        self.group_ids = group_ids.into_iter().collect();
        self
    }

    /// Sets the roles granted to the user.
    #[must_use]
    pub fn with_roles(mut self, roles: impl IntoIterator<Item = Role>) -> Self {
        self.roles = roles.into_iter().collect();
        self
    }

    /// Returns the user id.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Returns the group ids.
    #[must_use]
    pub fn group_ids(&self) -> &[String] {
        &self.group_ids
    }

    /// Returns the granted roles.
    #[must_use]
    pub const fn roles(&self) -> &BTreeSet<Role> {
        &self.roles
    }

    /// Returns whether the principal holds the given role.
    #[must_use]
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Returns whether the principal holds any of the given roles.
    #[must_use]
    pub fn has_any_role(&self, roles: &[Role]) -> bool {
        roles.iter().any(|role| self.roles.contains(role))
    }

    /// Returns whether the principal holds an administrative role.
    #[must_use]
    pub fn is_administrator(&self) -> bool {
        self.roles.iter().any(|role| role.is_administrative())
    }

    /// Returns the access ids matched against workbasket access items:
    /// the user id followed by every group id.
    pub fn access_ids(&self) -> impl Iterator<Item = &str> {
        std::iter::once(self.user_id.as_str()).chain(self.group_ids.iter().map(String::as_str))
    }

    /// Returns whether the given owner value names this principal.
    #[must_use]
    pub fn is_owner(&self, owner: Option<&str>) -> bool {
        owner == Some(self.user_id.as_str())
    }
}
