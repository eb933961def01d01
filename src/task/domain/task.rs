//! The task aggregate root.

use super::{ClassificationSummary, ObjectReference, TaskDomainError, TaskId, TaskState};
use crate::workbasket::domain::WorkbasketId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Task aggregate root.
///
/// A task is created once in [`TaskState::Ready`] and afterwards mutated
/// exclusively through the lifecycle service. Callers updating a task work
/// on a copy: they mutate the copy through the setters below and hand it
/// back to the service, which guards against lost updates by comparing the
/// copy's `modified` stamp with the stored one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    workbasket_id: WorkbasketId,
    workbasket_key: String,
    state: TaskState,
    owner: Option<String>,
    owner_long_name: Option<String>,
    claimed: Option<DateTime<Utc>>,
    completed: Option<DateTime<Utc>>,
    created: DateTime<Utc>,
    modified: DateTime<Utc>,
    priority: i32,
    manual_priority: i32,
    classification: ClassificationSummary,
    primary_object_reference: ObjectReference,
    secondary_object_references: Vec<ObjectReference>,
    custom_attributes: BTreeMap<String, String>,
    callback_info: BTreeMap<String, String>,
    is_read: bool,
    is_transferred: bool,
    note: Option<String>,
    business_process_id: Option<String>,
    parent_business_process_id: Option<String>,
}

impl Task {
    /// Capacity of the custom attribute map.
    pub const MAX_CUSTOM_ATTRIBUTES: usize = 16;

    /// Manual priority value meaning "not set".
    pub const MANUAL_PRIORITY_UNSET: i32 = -1;

    /// Creates a new ready task in the given workbasket.
    ///
    /// `created` and `modified` are set to the same instant; the priority
    /// starts from the classification default until the lifecycle service
    /// resolves it.
    #[must_use]
    pub fn new(
        workbasket_id: WorkbasketId,
        workbasket_key: impl Into<String>,
        classification: ClassificationSummary,
        primary_object_reference: ObjectReference,
        clock: &impl Clock,
    ) -> Self {
        let timestamp = clock.utc();
        let priority = classification.priority();

        Self {
            id: TaskId::new(),
            workbasket_id,
            workbasket_key: workbasket_key.into(),
            state: TaskState::Ready,
            owner: None,
            owner_long_name: None,
            claimed: None,
            completed: None,
            created: timestamp,
            modified: timestamp,
            priority,
            manual_priority: Self::MANUAL_PRIORITY_UNSET,
            classification,
            primary_object_reference,
            secondary_object_references: Vec::new(),
            custom_attributes: BTreeMap::new(),
            callback_info: BTreeMap::new(),
            is_read: false,
            is_transferred: false,
            note: None,
            business_process_id: None,
            parent_business_process_id: None,
        }
    }

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
    }

    /// Returns the owning workbasket's identifier.
    #[must_use]
    pub const fn workbasket_id(&self) -> WorkbasketId {
        self.workbasket_id
    }

    /// Returns the owning workbasket's key.
    #[must_use]
    pub fn workbasket_key(&self) -> &str {
        &self.workbasket_key
    }

    /// Returns the lifecycle state.
    #[must_use]
    pub const fn state(&self) -> TaskState {
        self.state
    }

    /// Returns the owner, if any.
    #[must_use]
    pub fn owner(&self) -> Option<&str> {
        self.owner.as_deref()
    }

    /// Returns the cached long name of the owner, if any.
    #[must_use]
    pub fn owner_long_name(&self) -> Option<&str> {
        self.owner_long_name.as_deref()
    }

    /// Returns when the task was claimed, if it currently holds a claim.
    #[must_use]
    pub const fn claimed(&self) -> Option<DateTime<Utc>> {
        self.claimed
    }

    /// Returns when the task reached an end state, if it has.
    #[must_use]
    pub const fn completed(&self) -> Option<DateTime<Utc>> {
        self.completed
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created(&self) -> DateTime<Utc> {
        self.created
    }

    /// Returns the last modification timestamp.
    #[must_use]
    pub const fn modified(&self) -> DateTime<Utc> {
        self.modified
    }

    /// Returns the effective priority.
    #[must_use]
    pub const fn priority(&self) -> i32 {
        self.priority
    }

    /// Returns the manual priority override; negative means unset.
    #[must_use]
    pub const fn manual_priority(&self) -> i32 {
        self.manual_priority
    }

    /// Returns the classification summary.
    #[must_use]
    pub const fn classification(&self) -> &ClassificationSummary {
        &self.classification
    }

    /// Returns the primary object reference.
    #[must_use]
    pub const fn primary_object_reference(&self) -> &ObjectReference {
        &self.primary_object_reference
    }

    /// Returns the secondary object references.
    #[must_use]
    pub fn secondary_object_references(&self) -> &[ObjectReference] {
        &self.secondary_object_references
    }

    /// Returns the custom attributes.
    #[must_use]
    pub const fn custom_attributes(&self) -> &BTreeMap<String, String> {
        &self.custom_attributes
    }

    /// Returns the callback info handed through to job callbacks.
    #[must_use]
    pub const fn callback_info(&self) -> &BTreeMap<String, String> {
        &self.callback_info
    }

    /// Returns whether the task has been opened by a user.
    #[must_use]
    pub const fn is_read(&self) -> bool {
        self.is_read
    }

    /// Returns whether the task was moved between workbaskets.
    #[must_use]
    pub const fn is_transferred(&self) -> bool {
        self.is_transferred
    }

    /// Returns the free-text note.
    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Returns the business process id.
    #[must_use]
    pub fn business_process_id(&self) -> Option<&str> {
        self.business_process_id.as_deref()
    }

    /// Returns the parent business process id.
    #[must_use]
    pub fn parent_business_process_id(&self) -> Option<&str> {
        self.parent_business_process_id.as_deref()
    }

    /// Sets the owner. Changing the owner drops the cached long name.
    pub fn set_owner(&mut self, owner: Option<String>) {
        if self.owner != owner {
            self.owner_long_name = None;
        }
        self.owner = owner;
    }

    /// Sets the cached long name of the owner.
    pub fn set_owner_long_name(&mut self, owner_long_name: Option<String>) {
        self.owner_long_name = owner_long_name;
    }

    /// Sets the manual priority override; pass a negative value to unset.
    pub fn set_manual_priority(&mut self, manual_priority: i32) {
        self.manual_priority = manual_priority;
    }

    /// Replaces the classification summary.
    pub fn set_classification(&mut self, classification: ClassificationSummary) {
        self.classification = classification;
    }

    /// Replaces the primary object reference.
    pub fn set_primary_object_reference(&mut self, reference: ObjectReference) {
        self.primary_object_reference = reference;
    }

    /// Replaces the secondary object references.
    pub fn set_secondary_object_references(
        &mut self,
        references: impl IntoIterator<Item = ObjectReference>,
    ) {
        self.secondary_object_references = references.into_iter().collect();
    }

    /// Sets one custom attribute.
    pub fn set_custom_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.custom_attributes.insert(key.into(), value.into());
    }

    /// Removes one custom attribute.
    pub fn remove_custom_attribute(&mut self, key: &str) {
        self.custom_attributes.remove(key);
    }

    /// Applies custom-attribute overrides: `Some` overwrites the
    /// attribute, `None` clears it, keys absent from `overrides` are left
    /// untouched.
    pub fn apply_custom_attribute_overrides(
        &mut self,
        overrides: &BTreeMap<String, Option<String>>,
    ) {
        for (key, value) in overrides {
            match value {
                Some(value) => {
                    self.custom_attributes.insert(key.clone(), value.clone());
                }
                None => {
                    self.custom_attributes.remove(key);
                }
            }
        }
    }

    /// Replaces the callback info map.
    pub fn set_callback_info(&mut self, callback_info: BTreeMap<String, String>) {
        self.callback_info = callback_info;
    }

    /// Sets the read flag.
    pub fn set_read(&mut self, is_read: bool) {
        self.is_read = is_read;
    }

    /// Sets the transferred flag.
    pub fn set_transferred(&mut self, is_transferred: bool) {
        self.is_transferred = is_transferred;
    }

    /// Sets the free-text note.
    pub fn set_note(&mut self, note: Option<String>) {
        self.note = note;
    }

    /// Sets the business process id.
    pub fn set_business_process_id(&mut self, business_process_id: Option<String>) {
        self.business_process_id = business_process_id;
    }

    /// Sets the parent business process id.
    pub fn set_parent_business_process_id(&mut self, parent_business_process_id: Option<String>) {
        self.parent_business_process_id = parent_business_process_id;
    }

    /// Validates the invariants a caller-supplied task must satisfy on
    /// create and update.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::TooManyCustomAttributes`] when the
    /// custom attribute map exceeds its capacity.
    pub fn validate(&self) -> Result<(), TaskDomainError> {
        if self.custom_attributes.len() > Self::MAX_CUSTOM_ATTRIBUTES {
            return Err(TaskDomainError::TooManyCustomAttributes {
                count: self.custom_attributes.len(),
                max: Self::MAX_CUSTOM_ATTRIBUTES,
            });
        }
        Ok(())
    }

    /// Sets the effective priority after resolution.
    pub(crate) fn set_priority(&mut self, priority: i32) {
        self.priority = priority;
    }

    /// Claims the task: moves it into `target`, hands it to `owner`, and
    /// marks it read.
    pub(crate) fn begin_claim(&mut self, target: TaskState, owner: &str, now: DateTime<Utc>) {
        self.state = target;
        self.set_owner(Some(owner.to_owned()));
        self.claimed = Some(now);
        self.modified = now;
        self.is_read = true;
    }

    /// Releases a claim back into `target`, clearing the owner unless
    /// `keep_owner` is set.
    pub(crate) fn release_claim(&mut self, target: TaskState, keep_owner: bool, now: DateTime<Utc>) {
        self.state = target;
        self.claimed = None;
        if !keep_owner {
            self.owner = None;
            self.owner_long_name = None;
        }
        self.modified = now;
    }

    /// Sends a task whose completion was intercepted by a reviewer back
    /// into the review queue. The owner is kept so the reviewer can see
    /// who worked the task.
    pub(crate) fn send_to_review(&mut self, now: DateTime<Utc>) {
        self.state = TaskState::ReadyForReview;
        self.claimed = None;
        self.modified = now;
    }

    /// Moves the task into an end state, stamping `completed`.
    pub(crate) fn close(&mut self, target: TaskState, now: DateTime<Utc>) {
        self.state = target;
        self.completed = Some(now);
        self.modified = now;
    }

    /// Bumps the modification timestamp.
    pub(crate) fn touch(&mut self, now: DateTime<Utc>) {
        self.modified = now;
    }

    /// Restores the fields an update must not change from the stored
    /// task: lifecycle state and the engine-managed timestamps.
    pub(crate) fn restore_lifecycle_fields(&mut self, stored: &Self) {
        self.state = stored.state;
        self.created = stored.created;
        self.claimed = stored.claimed;
        self.completed = stored.completed;
    }
}
