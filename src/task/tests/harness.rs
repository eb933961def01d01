//! Shared fixtures for task lifecycle tests.

use std::sync::Arc;

use crate::security::{Principal, Role};
use crate::task::{
    adapters::memory::{InMemoryClassificationRepository, InMemoryTaskRepository},
    domain::{ClassificationSummary, ObjectReference, Task, TaskState},
    ports::{ExtensionRegistry, TaskRepository},
    services::{CreateTaskRequest, TaskLifecycleService},
};
use crate::workbasket::{
    adapters::memory::InMemoryWorkbasketAccessRepository,
    domain::{WorkbasketAccessItem, WorkbasketId, WorkbasketPermission},
};
use mockable::{Clock, DefaultClock};
use rstest::fixture;

/// Service type assembled from the in-memory adapters.
pub(crate) type TestService = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryWorkbasketAccessRepository,
    InMemoryClassificationRepository,
    DefaultClock,
>;

/// Classification key seeded into every harness.
pub(crate) const CLASSIFICATION_KEY: &str = "standard";

/// Default priority of the seeded classification.
pub(crate) const CLASSIFICATION_PRIORITY: i32 = 4;

/// Workbasket key used by every harness task.
pub(crate) const WORKBASKET_KEY: &str = "team-basket";

/// In-memory engine plus handles to its adapters.
pub(crate) struct Harness {
    pub service: TestService,
    pub tasks: Arc<InMemoryTaskRepository>,
    pub access_items: Arc<InMemoryWorkbasketAccessRepository>,
    pub classifications: Arc<InMemoryClassificationRepository>,
    pub workbasket_id: WorkbasketId,
}

impl Harness {
    /// Builds an engine around the given extension registry, with one
    /// workbasket and one classification seeded.
    pub(crate) fn with_extensions(extensions: ExtensionRegistry) -> Self {
        let tasks = Arc::new(InMemoryTaskRepository::new());
        let access_items = Arc::new(InMemoryWorkbasketAccessRepository::new());
        let classifications = Arc::new(InMemoryClassificationRepository::new());
        classifications
            .put(ClassificationSummary::new(
                CLASSIFICATION_KEY,
                CLASSIFICATION_PRIORITY,
                "P2D",
            ))
            .expect("seeding classification should succeed");

        let service = TaskLifecycleService::new(
            Arc::clone(&tasks),
            Arc::clone(&access_items),
            Arc::clone(&classifications),
            Arc::new(extensions),
            Arc::new(DefaultClock),
        );

        Self {
            service,
            tasks,
            access_items,
            classifications,
            workbasket_id: WorkbasketId::new(),
        }
    }

    /// Grants permissions on the harness workbasket to an access id.
    pub(crate) fn grant(&self, access_id: &str, permissions: &[WorkbasketPermission]) {
        self.access_items
            .put(
                WorkbasketAccessItem::new(self.workbasket_id, access_id)
                    .with_permissions(permissions.iter().copied()),
            )
            .expect("granting access should succeed");
    }

    /// Returns a principal granted the full working permission set on the
    /// harness workbasket.
    pub(crate) fn worker(&self, user_id: &str) -> Principal {
        self.grant(
            user_id,
            &[
                WorkbasketPermission::Read,
                WorkbasketPermission::ReadTasks,
                WorkbasketPermission::EditTasks,
                WorkbasketPermission::Append,
            ],
        );
        Principal::new(user_id)
    }

    /// Returns a default create request against the harness workbasket.
    pub(crate) fn create_request(&self) -> CreateTaskRequest {
        CreateTaskRequest::new(
            self.workbasket_id,
            WORKBASKET_KEY,
            CLASSIFICATION_KEY,
            object_reference("order-4711"),
        )
    }

    /// Creates a ready task through the service.
    pub(crate) async fn create_ready_task(&self, principal: &Principal) -> Task {
        self.service
            .create_task(principal, self.create_request())
            .await
            .expect("task creation should succeed")
    }

    /// Creates a task and claims it for the principal.
    pub(crate) async fn create_claimed_task(&self, principal: &Principal) -> Task {
        let task = self.create_ready_task(principal).await;
        self.service
            .claim(principal, task.id())
            .await
            .expect("claim should succeed")
    }

    /// Stores a task directly in the repository in the given state,
    /// owned by `owner` when the state holds a claim.
    pub(crate) async fn seed_task_in_state(&self, state: TaskState, owner: &str) -> Task {
        let clock = DefaultClock;
        let mut task = Task::new(
            self.workbasket_id,
            WORKBASKET_KEY,
            ClassificationSummary::new(CLASSIFICATION_KEY, CLASSIFICATION_PRIORITY, "P2D"),
            object_reference("order-4711"),
            &clock,
        );
        match state {
            TaskState::Ready => {}
            TaskState::Claimed | TaskState::InReview => {
                task.begin_claim(state, owner, clock.utc());
            }
            TaskState::ReadyForReview => task.send_to_review(clock.utc()),
            TaskState::Completed | TaskState::Cancelled | TaskState::Terminated => {
                task.close(state, clock.utc());
            }
        }
        self.tasks
            .store(&task)
            .await
            .expect("seeding task should succeed");
        task
    }
}

/// Harness with no extension points registered.
#[fixture]
pub(crate) fn harness() -> Harness {
    Harness::with_extensions(ExtensionRegistry::new())
}

/// Principal holding the admin role without workbasket grants.
pub(crate) fn admin(user_id: &str) -> Principal {
    Principal::new(user_id).with_roles([Role::Admin])
}

/// Valid object reference with the given value.
pub(crate) fn object_reference(value: &str) -> ObjectReference {
    ObjectReference::new("acme", "invoice", value)
        .expect("valid object reference")
        .with_system("erp")
}
