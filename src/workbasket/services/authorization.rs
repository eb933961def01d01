//! The authorization gate evaluated before every task operation.

use crate::security::{Principal, Role};
use crate::workbasket::{
    domain::{WorkbasketId, WorkbasketPermission},
    ports::{WorkbasketAccessRepository, WorkbasketAccessRepositoryError},
};
use std::collections::BTreeSet;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Errors raised by authorization checks.
#[derive(Debug, Error)]
pub enum AuthorizationError {
    /// The principal lacks part of the required permission set on the
    /// workbasket. Carries only the permissions actually unsatisfied, in
    /// the order they were required.
    #[error(
        "user '{current_user_id}' is not authorized on workbasket '{workbasket_id}', missing permissions [{}]",
        format_permissions(.missing)
    )]
    NotAuthorizedOnWorkbasket {
        /// The acting user.
        current_user_id: String,
        /// The workbasket the check ran against.
        workbasket_id: WorkbasketId,
        /// The unsatisfied subset of the required permissions.
        missing: Vec<WorkbasketPermission>,
    },

    /// The principal lacks a required engine role.
    #[error(
        "user '{current_user_id}' is missing a required role, expected one of [{}]",
        format_roles(.required)
    )]
    NotAuthorized {
        /// The acting user.
        current_user_id: String,
        /// The roles any one of which would have satisfied the check.
        required: Vec<Role>,
    },

    /// Access-item lookup failed.
    #[error(transparent)]
    Repository(#[from] WorkbasketAccessRepositoryError),
}

fn format_permissions(permissions: &[WorkbasketPermission]) -> String {
    permissions
        .iter()
        .map(|permission| permission.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_roles(roles: &[Role]) -> String {
    roles
        .iter()
        .map(|role| role.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Requires the principal to hold at least one of the given roles.
///
/// Role checks are never bypassed, administrative roles included.
///
/// # Errors
///
/// Returns [`AuthorizationError::NotAuthorized`] carrying the required
/// roles when none of them is held.
pub fn require_any_role(principal: &Principal, required: &[Role]) -> Result<(), AuthorizationError> {
    if principal.has_any_role(required) {
        return Ok(());
    }
    Err(AuthorizationError::NotAuthorized {
        current_user_id: principal.user_id().to_owned(),
        required: required.to_vec(),
    })
}

/// Decides whether a principal may act on a workbasket.
///
/// Each task operation declares a required permission set; the gate unions
/// the permissions granted to the principal's access ids (user id plus
/// group ids) across the workbasket's access items and reports the
/// unsatisfied remainder. Principals holding an administrative role bypass
/// the check entirely.
#[derive(Clone)]
pub struct AuthorizationService<W>
where
    W: WorkbasketAccessRepository,
{
    access_items: Arc<W>,
}

impl<W> AuthorizationService<W>
where
    W: WorkbasketAccessRepository,
{
    /// Creates an authorization gate over the given access-item source.
    #[must_use]
    pub const fn new(access_items: Arc<W>) -> Self {
        Self { access_items }
    }

    /// Requires the principal to hold every permission in `required` on
    /// the workbasket.
    ///
    /// # Errors
    ///
    /// Returns [`AuthorizationError::NotAuthorizedOnWorkbasket`] carrying
    /// the unsatisfied subset of `required` (in input order), or
    /// [`AuthorizationError::Repository`] when access items cannot be
    /// read.
    pub async fn require_permissions(
        &self,
        principal: &Principal,
        workbasket_id: WorkbasketId,
        required: &[WorkbasketPermission],
    ) -> Result<(), AuthorizationError> {
        if principal.is_administrator() {
            debug!(
                user_id = principal.user_id(),
                %workbasket_id,
                "administrative role bypasses workbasket permission check"
            );
            return Ok(());
        }

        let granted = self.granted_permissions(principal, workbasket_id).await?;
        let missing: Vec<WorkbasketPermission> = required
            .iter()
            .copied()
            .filter(|permission| !granted.contains(permission))
            .collect();

        if missing.is_empty() {
            return Ok(());
        }

        debug!(
            user_id = principal.user_id(),
            %workbasket_id,
            missing = %format_permissions(&missing),
            "workbasket permission check failed"
        );
        Err(AuthorizationError::NotAuthorizedOnWorkbasket {
            current_user_id: principal.user_id().to_owned(),
            workbasket_id,
            missing,
        })
    }

    /// Unions the permissions granted to any of the principal's access ids.
    async fn granted_permissions(
        &self,
        principal: &Principal,
        workbasket_id: WorkbasketId,
    ) -> Result<BTreeSet<WorkbasketPermission>, AuthorizationError> {
        let items = self
            .access_items
            .access_items_for_workbasket(workbasket_id)
            .await?;

        let mut granted = BTreeSet::new();
        for item in &items {
            if principal
                .access_ids()
                .any(|access_id| item.matches_access_id(access_id))
            {
                granted.extend(item.permissions().iter().copied());
            }
        }
        Ok(granted)
    }
}
