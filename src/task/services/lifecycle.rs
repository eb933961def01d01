//! The task state machine and its surrounding lifecycle service.

use crate::security::{Principal, Role};
use crate::task::{
    domain::{ClassificationSummary, ObjectReference, Task, TaskDomainError, TaskId, TaskState},
    ports::{ClassificationRepository, ExtensionRegistry, TaskRepository},
    services::{
        BulkOperationResults, TaskServiceError, TaskServiceResult, dedupe_ids, resolve_priority,
    },
};
use crate::workbasket::{
    domain::{WorkbasketId, WorkbasketPermission},
    ports::WorkbasketAccessRepository,
    services::{AuthorizationService, require_any_role},
};
use mockable::Clock;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Permission set for read-only access.
const READ_PERMISSIONS: [WorkbasketPermission; 1] = [WorkbasketPermission::Read];

/// Permission set for state changes that leave task content untouched.
const STATE_CHANGE_PERMISSIONS: [WorkbasketPermission; 2] =
    [WorkbasketPermission::Read, WorkbasketPermission::ReadTasks];

/// Permission set for content-changing operations.
const EDIT_PERMISSIONS: [WorkbasketPermission; 3] = [
    WorkbasketPermission::Read,
    WorkbasketPermission::ReadTasks,
    WorkbasketPermission::EditTasks,
];

/// Permission set for creating tasks in a workbasket.
const APPEND_PERMISSIONS: [WorkbasketPermission; 1] = [WorkbasketPermission::Append];

/// Roles allowed to terminate tasks.
const TERMINATE_ROLES: [Role; 2] = [Role::Admin, Role::TaskAdmin];

/// Custom-attribute overrides applied by the bulk update operations:
/// `Some` overwrites the attribute, `None` clears it, absent keys are left
/// untouched.
pub type CustomAttributeOverrides = BTreeMap<String, Option<String>>;

/// Request payload for creating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    workbasket_id: WorkbasketId,
    workbasket_key: String,
    classification_key: String,
    primary_object_reference: ObjectReference,
    owner: Option<String>,
    note: Option<String>,
    manual_priority: i32,
    secondary_object_references: Vec<ObjectReference>,
    custom_attributes: BTreeMap<String, String>,
    callback_info: BTreeMap<String, String>,
    business_process_id: Option<String>,
    parent_business_process_id: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        workbasket_id: WorkbasketId,
        workbasket_key: impl Into<String>,
        classification_key: impl Into<String>,
        primary_object_reference: ObjectReference,
    ) -> Self {
        Self {
            workbasket_id,
            workbasket_key: workbasket_key.into(),
            classification_key: classification_key.into(),
            primary_object_reference,
            owner: None,
            note: None,
            manual_priority: Task::MANUAL_PRIORITY_UNSET,
            secondary_object_references: Vec::new(),
            custom_attributes: BTreeMap::new(),
            callback_info: BTreeMap::new(),
            business_process_id: None,
            parent_business_process_id: None,
        }
    }

    /// Sets the initial owner.
    #[must_use]
    pub fn with_owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Sets the free-text note.
    #[must_use]
    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    /// Sets the manual priority override.
    #[must_use]
    pub const fn with_manual_priority(mut self, manual_priority: i32) -> Self {
        self.manual_priority = manual_priority;
        self
    }

    /// Sets the secondary object references.
    #[must_use]
    pub fn with_secondary_object_references(
        mut self,
        references: impl IntoIterator<Item = ObjectReference>,
    ) -> Self {
        self.secondary_object_references = references.into_iter().collect();
        self
    }

    /// Adds one custom attribute.
    #[must_use]
    pub fn with_custom_attribute(
        mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.custom_attributes.insert(key.into(), value.into());
        self
    }

    /// Sets the callback info map.
    #[must_use]
    pub fn with_callback_info(mut self, callback_info: BTreeMap<String, String>) -> Self {
        self.callback_info = callback_info;
        self
    }

    /// Sets the business process id.
    #[must_use]
    pub fn with_business_process_id(mut self, business_process_id: impl Into<String>) -> Self {
        self.business_process_id = Some(business_process_id.into());
        self
    }

    /// Sets the parent business process id.
    #[must_use]
    pub fn with_parent_business_process_id(
        mut self,
        parent_business_process_id: impl Into<String>,
    ) -> Self {
        self.parent_business_process_id = Some(parent_business_process_id.into());
        self
    }
}

/// Task lifecycle orchestration service.
///
/// Every operation runs the same spine: authorize the principal against
/// the task's workbasket, validate the source state and ownership rules,
/// apply the transition, consult the extension points the transition
/// defines, and persist the result as one unit of work.
#[derive(Clone)]
pub struct TaskLifecycleService<R, W, K, C>
where
    R: TaskRepository,
    W: WorkbasketAccessRepository,
    K: ClassificationRepository,
    C: Clock + Send + Sync,
{
    tasks: Arc<R>,
    authorization: AuthorizationService<W>,
    classifications: Arc<K>,
    extensions: Arc<ExtensionRegistry>,
    clock: Arc<C>,
}

impl<R, W, K, C> TaskLifecycleService<R, W, K, C>
where
    R: TaskRepository,
    W: WorkbasketAccessRepository,
    K: ClassificationRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new task lifecycle service.
    #[must_use]
    pub const fn new(
        tasks: Arc<R>,
        access_items: Arc<W>,
        classifications: Arc<K>,
        extensions: Arc<ExtensionRegistry>,
        clock: Arc<C>,
    ) -> Self {
        Self {
            tasks,
            authorization: AuthorizationService::new(access_items),
            classifications,
            extensions,
            clock,
        }
    }

    /// Creates a new task in [`TaskState::Ready`].
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] when the principal may not append to
    /// the workbasket, the classification key is unknown, or the request
    /// violates a domain invariant.
    pub async fn create_task(
        &self,
        principal: &Principal,
        request: CreateTaskRequest,
    ) -> TaskServiceResult<Task> {
        self.authorization
            .require_permissions(principal, request.workbasket_id, &APPEND_PERMISSIONS)
            .await?;
        let classification = self
            .classification_by_key(&request.classification_key)
            .await?;

        let mut task = Task::new(
            request.workbasket_id,
            request.workbasket_key,
            classification,
            request.primary_object_reference,
            &*self.clock,
        );
        task.set_owner(request.owner);
        task.set_note(request.note);
        task.set_manual_priority(request.manual_priority);
        task.set_secondary_object_references(request.secondary_object_references);
        for (key, value) in request.custom_attributes {
            task.set_custom_attribute(key, value);
        }
        task.set_callback_info(request.callback_info);
        task.set_business_process_id(request.business_process_id);
        task.set_parent_business_process_id(request.parent_business_process_id);
        task.validate()?;
        task.set_priority(resolve_priority(&task, &self.extensions));

        self.tasks.store(&task).await?;
        info!(task_id = %task.id(), workbasket_id = %task.workbasket_id(), "task created");
        Ok(task)
    }

    /// Retrieves a task by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::TaskNotFound`] for unknown ids and an
    /// authorization error when the principal may not read the task's
    /// workbasket.
    pub async fn get_task(&self, principal: &Principal, task_id: TaskId) -> TaskServiceResult<Task> {
        let task = self.task_by_id(task_id).await?;
        self.authorization
            .require_permissions(principal, task.workbasket_id(), &READ_PERMISSIONS)
            .await?;
        Ok(task)
    }

    /// Claims a task for the principal.
    ///
    /// Ready tasks become claimed; tasks ready for review go into review.
    /// Claiming a task the principal already owns is a no-op. A task held
    /// by somebody else can only be taken over by an administrator.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidOwner`] for ownership conflicts
    /// and [`TaskServiceError::InvalidTaskState`] for end states.
    pub async fn claim(&self, principal: &Principal, task_id: TaskId) -> TaskServiceResult<Task> {
        self.claim_task(principal, task_id, false).await
    }

    /// Claims a task, taking it over from any current owner.
    ///
    /// # Errors
    ///
    /// As [`claim`](Self::claim), minus the ownership conflict.
    pub async fn force_claim(
        &self,
        principal: &Principal,
        task_id: TaskId,
    ) -> TaskServiceResult<Task> {
        self.claim_task(principal, task_id, true).await
    }

    /// Returns a claimed task to its unclaimed counterpart state.
    ///
    /// Clears the claim timestamp; clears the owner unless `keep_owner`
    /// is set.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidTaskState`] when the task holds
    /// no claim and [`TaskServiceError::InvalidOwner`] when it is owned by
    /// somebody else.
    pub async fn cancel_claim(
        &self,
        principal: &Principal,
        task_id: TaskId,
        keep_owner: bool,
    ) -> TaskServiceResult<Task> {
        self.cancel_claim_task(principal, task_id, keep_owner, false)
            .await
    }

    /// Returns a claimed task to its unclaimed counterpart state without
    /// checking ownership.
    ///
    /// # Errors
    ///
    /// As [`cancel_claim`](Self::cancel_claim), minus the ownership
    /// conflict.
    pub async fn force_cancel_claim(
        &self,
        principal: &Principal,
        task_id: TaskId,
        keep_owner: bool,
    ) -> TaskServiceResult<Task> {
        self.cancel_claim_task(principal, task_id, keep_owner, true)
            .await
    }

    /// Completes a task the principal has claimed.
    ///
    /// When a registered review provider demands it, the task goes to
    /// review instead of completing. Completing an already completed task
    /// is a no-op returning the unchanged task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidTaskState`] when the task holds
    /// no claim and [`TaskServiceError::InvalidOwner`] when it is owned by
    /// somebody else.
    pub async fn complete_task(
        &self,
        principal: &Principal,
        task_id: TaskId,
    ) -> TaskServiceResult<Task> {
        self.complete_internal(principal, task_id, false).await
    }

    /// Completes a task, claiming it first when necessary.
    ///
    /// An existing claim (its owner and timestamp included) is left in
    /// place; an unclaimed task is claimed for the principal on the way.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidTaskState`] when the task is
    /// already cancelled or terminated.
    pub async fn force_complete_task(
        &self,
        principal: &Principal,
        task_id: TaskId,
    ) -> TaskServiceResult<Task> {
        self.complete_internal(principal, task_id, true).await
    }

    /// Cancels a task. Terminal.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidTaskState`] when the task is
    /// already in an end state.
    pub async fn cancel_task(
        &self,
        principal: &Principal,
        task_id: TaskId,
    ) -> TaskServiceResult<Task> {
        let mut task = self.task_by_id(task_id).await?;
        self.authorization
            .require_permissions(principal, task.workbasket_id(), &READ_PERMISSIONS)
            .await?;
        self.close_task(&mut task, TaskState::Cancelled)?;
        self.tasks.update(&task).await?;
        info!(task_id = %task_id, user_id = principal.user_id(), "task cancelled");
        Ok(task)
    }

    /// Terminates a task. Terminal, administrators only.
    ///
    /// The role requirement replaces the workbasket permission check and
    /// is never bypassed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Authorization`] when the principal
    /// holds neither the admin nor the task-admin role, and
    /// [`TaskServiceError::InvalidTaskState`] when the task is already in
    /// an end state.
    pub async fn terminate_task(
        &self,
        principal: &Principal,
        task_id: TaskId,
    ) -> TaskServiceResult<Task> {
        require_any_role(principal, &TERMINATE_ROLES)?;
        let mut task = self.task_by_id(task_id).await?;
        self.close_task(&mut task, TaskState::Terminated)?;
        self.tasks.update(&task).await?;
        info!(task_id = %task_id, user_id = principal.user_id(), "task terminated");
        Ok(task)
    }

    /// Updates the mutable content of a task.
    ///
    /// The caller works on a copy obtained earlier; a stale copy is
    /// rejected by comparing its `modified` stamp with the stored one.
    /// Lifecycle state, timestamps, and the owning workbasket cannot be
    /// changed this way. A changed classification key re-fetches the
    /// classification summary, and the priority is re-derived whenever the
    /// classification or the manual priority changed.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Concurrency`] for stale copies,
    /// [`TaskServiceError::InvalidArgument`] for workbasket changes or
    /// invalid content, and [`TaskServiceError::ClassificationNotFound`]
    /// for unknown classification keys.
    pub async fn update_task(
        &self,
        principal: &Principal,
        task: Task,
    ) -> TaskServiceResult<Task> {
        let stored = self.task_by_id(task.id()).await?;
        self.authorization
            .require_permissions(principal, stored.workbasket_id(), &EDIT_PERMISSIONS)
            .await?;
        if task.modified() != stored.modified() {
            return Err(TaskServiceError::Concurrency {
                entity_id: task.id(),
            });
        }
        if task.workbasket_id() != stored.workbasket_id()
            || task.workbasket_key() != stored.workbasket_key()
        {
            return Err(TaskServiceError::InvalidArgument(
                TaskDomainError::WorkbasketChangeForbidden { task_id: task.id() },
            ));
        }
        task.validate()?;

        let mut updated = task;
        updated.restore_lifecycle_fields(&stored);

        let classification_changed =
            updated.classification().key() != stored.classification().key();
        if classification_changed {
            let classification = self
                .classification_by_key(updated.classification().key())
                .await?;
            updated.set_classification(classification);
        } else {
            updated.set_classification(stored.classification().clone());
        }

        if classification_changed || updated.manual_priority() != stored.manual_priority() {
            updated.set_priority(resolve_priority(&updated, &self.extensions));
        } else {
            updated.set_priority(stored.priority());
        }

        updated.touch(self.clock.utc());
        self.tasks.update(&updated).await?;
        debug!(task_id = %updated.id(), user_id = principal.user_id(), "task updated");
        Ok(updated)
    }

    /// Assigns an owner to a task that has not reached an end state.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::InvalidArgument`] for a blank owner and
    /// [`TaskServiceError::InvalidTaskState`] for end states.
    pub async fn set_task_owner(
        &self,
        principal: &Principal,
        task_id: TaskId,
        owner: &str,
    ) -> TaskServiceResult<Task> {
        if owner.trim().is_empty() {
            return Err(TaskServiceError::InvalidArgument(TaskDomainError::EmptyOwner));
        }
        let mut task = self.task_by_id(task_id).await?;
        self.authorization
            .require_permissions(principal, task.workbasket_id(), &EDIT_PERMISSIONS)
            .await?;
        let state = task.state();
        if state.is_end_state() {
            return Err(TaskServiceError::invalid_state(
                task_id,
                state,
                &TaskState::NON_FINAL_STATES,
            ));
        }
        task.set_owner(Some(owner.to_owned()));
        task.touch(self.clock.utc());
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Marks a task as read or unread.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError`] for unknown ids or missing
    /// permissions.
    pub async fn set_task_read(
        &self,
        principal: &Principal,
        task_id: TaskId,
        is_read: bool,
    ) -> TaskServiceResult<Task> {
        let mut task = self.task_by_id(task_id).await?;
        self.authorization
            .require_permissions(principal, task.workbasket_id(), &STATE_CHANGE_PERMISSIONS)
            .await?;
        task.set_read(is_read);
        task.touch(self.clock.utc());
        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Assigns an owner to every task in `task_ids`.
    ///
    /// Ids are deduplicated before processing; each id is processed
    /// independently, and a failing id is recorded in the result instead
    /// of aborting the batch.
    pub async fn set_owner_of_tasks(
        &self,
        principal: &Principal,
        owner: &str,
        task_ids: &[TaskId],
    ) -> BulkOperationResults<TaskId, TaskServiceError> {
        let mut results = BulkOperationResults::new();
        for task_id in dedupe_ids(task_ids) {
            if let Err(error) = self.set_task_owner(principal, task_id, owner).await {
                warn!(task_id = %task_id, error = %error, "setting owner failed");
                results.add_error(task_id, error);
            }
        }
        results
    }

    /// Completes every task in `task_ids`, with per-item failure
    /// isolation as in [`set_owner_of_tasks`](Self::set_owner_of_tasks).
    pub async fn complete_tasks(
        &self,
        principal: &Principal,
        task_ids: &[TaskId],
    ) -> BulkOperationResults<TaskId, TaskServiceError> {
        self.complete_many(principal, task_ids, false).await
    }

    /// Force-completes every task in `task_ids`, with per-item failure
    /// isolation as in [`set_owner_of_tasks`](Self::set_owner_of_tasks).
    pub async fn force_complete_tasks(
        &self,
        principal: &Principal,
        task_ids: &[TaskId],
    ) -> BulkOperationResults<TaskId, TaskServiceError> {
        self.complete_many(principal, task_ids, true).await
    }

    /// Applies custom-attribute overrides to every task whose primary
    /// object reference equals `reference`.
    ///
    /// Returns the ids of the tasks that changed. Per-item failures are
    /// logged and skipped.
    ///
    /// # Errors
    ///
    /// Returns [`TaskServiceError::Repository`] when the selector query
    /// itself fails.
    pub async fn update_tasks_by_object_reference(
        &self,
        principal: &Principal,
        reference: &ObjectReference,
        overrides: &CustomAttributeOverrides,
    ) -> TaskServiceResult<Vec<TaskId>> {
        let tasks = self
            .tasks
            .find_by_primary_object_reference(reference)
            .await?;
        let mut changed = Vec::new();
        for task in tasks {
            let task_id = task.id();
            match self.apply_overrides(principal, task, overrides).await {
                Ok(()) => changed.push(task_id),
                Err(error) => {
                    warn!(task_id = %task_id, error = %error, "bulk attribute update failed");
                }
            }
        }
        Ok(changed)
    }

    /// Applies custom-attribute overrides to every task in `task_ids`.
    ///
    /// Ids are deduplicated before processing. Returns the ids of the
    /// tasks that changed; per-item failures are logged and skipped.
    pub async fn update_tasks_by_ids(
        &self,
        principal: &Principal,
        task_ids: &[TaskId],
        overrides: &CustomAttributeOverrides,
    ) -> Vec<TaskId> {
        let mut changed = Vec::new();
        for task_id in dedupe_ids(task_ids) {
            let outcome = match self.task_by_id(task_id).await {
                Ok(task) => self.apply_overrides(principal, task, overrides).await,
                Err(error) => Err(error),
            };
            match outcome {
                Ok(()) => changed.push(task_id),
                Err(error) => {
                    warn!(task_id = %task_id, error = %error, "bulk attribute update failed");
                }
            }
        }
        changed
    }

    /// Loads a task or reports it as unknown.
    async fn task_by_id(&self, task_id: TaskId) -> TaskServiceResult<Task> {
        self.tasks
            .find_by_id(task_id)
            .await?
            .ok_or(TaskServiceError::TaskNotFound(task_id))
    }

    /// Loads a classification summary or reports its key as unknown.
    async fn classification_by_key(
        &self,
        key: &str,
    ) -> TaskServiceResult<ClassificationSummary> {
        self.classifications
            .find_by_key(key)
            .await?
            .ok_or_else(|| TaskServiceError::ClassificationNotFound(key.to_owned()))
    }

    async fn claim_task(
        &self,
        principal: &Principal,
        task_id: TaskId,
        force: bool,
    ) -> TaskServiceResult<Task> {
        let mut task = self.task_by_id(task_id).await?;
        self.authorization
            .require_permissions(principal, task.workbasket_id(), &EDIT_PERMISSIONS)
            .await?;
        let state = task.state();
        let now = self.clock.utc();

        if let Some(target) = state.claim_target() {
            task.begin_claim(target, principal.user_id(), now);
        } else if state.is_claimed_state() {
            if principal.is_owner(task.owner()) {
                debug!(task_id = %task_id, user_id = principal.user_id(), "task already claimed by caller");
                return Ok(task);
            }
            if !force && !principal.is_administrator() {
                return Err(TaskServiceError::InvalidOwner {
                    task_id,
                    current_user_id: principal.user_id().to_owned(),
                });
            }
            task.begin_claim(state, principal.user_id(), now);
        } else {
            return Err(TaskServiceError::invalid_state(
                task_id,
                state,
                &TaskState::CLAIM_SOURCE_STATES,
            ));
        }

        self.tasks.update(&task).await?;
        info!(task_id = %task_id, user_id = principal.user_id(), state = %task.state(), "task claimed");
        Ok(task)
    }

    async fn cancel_claim_task(
        &self,
        principal: &Principal,
        task_id: TaskId,
        keep_owner: bool,
        force: bool,
    ) -> TaskServiceResult<Task> {
        let mut task = self.task_by_id(task_id).await?;
        self.authorization
            .require_permissions(principal, task.workbasket_id(), &EDIT_PERMISSIONS)
            .await?;
        let state = task.state();
        let Some(target) = state.cancel_claim_target() else {
            return Err(TaskServiceError::invalid_state(
                task_id,
                state,
                &TaskState::CLAIMED_STATES,
            ));
        };
        if !force && !principal.is_owner(task.owner()) && !principal.is_administrator() {
            return Err(TaskServiceError::InvalidOwner {
                task_id,
                current_user_id: principal.user_id().to_owned(),
            });
        }

        task.release_claim(target, keep_owner, self.clock.utc());
        self.tasks.update(&task).await?;
        info!(task_id = %task_id, user_id = principal.user_id(), state = %task.state(), "claim cancelled");
        Ok(task)
    }

    async fn complete_internal(
        &self,
        principal: &Principal,
        task_id: TaskId,
        force: bool,
    ) -> TaskServiceResult<Task> {
        let mut task = self.task_by_id(task_id).await?;
        self.authorization
            .require_permissions(principal, task.workbasket_id(), &EDIT_PERMISSIONS)
            .await?;
        let state = task.state();
        if state == TaskState::Completed {
            debug!(task_id = %task_id, "task already completed");
            return Ok(task);
        }
        let now = self.clock.utc();

        if force {
            match state.claim_target() {
                // An unclaimed task is claimed on the way; an existing
                // claim keeps its owner and timestamp.
                Some(target) => task.begin_claim(target, principal.user_id(), now),
                None if state.is_claimed_state() => {}
                None => {
                    return Err(TaskServiceError::invalid_state(
                        task_id,
                        state,
                        &TaskState::NON_FINAL_STATES,
                    ));
                }
            }
        } else {
            if !state.is_claimed_state() {
                return Err(TaskServiceError::invalid_state(
                    task_id,
                    state,
                    &TaskState::CLAIMED_STATES,
                ));
            }
            if !principal.is_owner(task.owner()) && !principal.is_administrator() {
                return Err(TaskServiceError::InvalidOwner {
                    task_id,
                    current_user_id: principal.user_id().to_owned(),
                });
            }
        }

        if self.extensions.review_required(&task) {
            task.send_to_review(now);
            info!(task_id = %task_id, user_id = principal.user_id(), "completion deferred to review");
        } else {
            task.close(TaskState::Completed, now);
            self.extensions.preprocess_end_state(&mut task);
            info!(task_id = %task_id, user_id = principal.user_id(), "task completed");
        }

        self.tasks.update(&task).await?;
        Ok(task)
    }

    /// Validates the source state and closes the task into `target`,
    /// running the end-state preprocessors.
    fn close_task(&self, task: &mut Task, target: TaskState) -> TaskServiceResult<()> {
        let state = task.state();
        if state.is_end_state() {
            return Err(TaskServiceError::invalid_state(
                task.id(),
                state,
                &TaskState::NON_FINAL_STATES,
            ));
        }
        task.close(target, self.clock.utc());
        self.extensions.preprocess_end_state(task);
        Ok(())
    }

    async fn complete_many(
        &self,
        principal: &Principal,
        task_ids: &[TaskId],
        force: bool,
    ) -> BulkOperationResults<TaskId, TaskServiceError> {
        let mut results = BulkOperationResults::new();
        for task_id in dedupe_ids(task_ids) {
            if let Err(error) = self.complete_internal(principal, task_id, force).await {
                warn!(task_id = %task_id, error = %error, "completing task failed");
                results.add_error(task_id, error);
            }
        }
        results
    }

    /// Applies overrides to one task and persists it.
    async fn apply_overrides(
        &self,
        principal: &Principal,
        mut task: Task,
        overrides: &CustomAttributeOverrides,
    ) -> TaskServiceResult<()> {
        self.authorization
            .require_permissions(principal, task.workbasket_id(), &EDIT_PERMISSIONS)
            .await?;
        task.apply_custom_attribute_overrides(overrides);
        task.validate()?;
        task.touch(self.clock.utc());
        self.tasks.update(&task).await?;
        Ok(())
    }
}
