//! Shared world state for task lifecycle BDD scenarios.

use std::collections::HashMap;
use std::sync::Arc;

use mockable::DefaultClock;
use rstest::fixture;
use wicker::security::Principal;
use wicker::task::{
    adapters::memory::{InMemoryClassificationRepository, InMemoryTaskRepository},
    domain::Task,
    ports::ReviewRequiredProvider,
    services::{TaskLifecycleService, TaskServiceError},
};
use wicker::workbasket::{
    adapters::memory::InMemoryWorkbasketAccessRepository, domain::WorkbasketId,
};

/// Service type used by the BDD world.
pub type TestTaskService = TaskLifecycleService<
    InMemoryTaskRepository,
    InMemoryWorkbasketAccessRepository,
    InMemoryClassificationRepository,
    DefaultClock,
>;

/// Review provider demanding a review for every task.
pub struct AlwaysReview;

impl ReviewRequiredProvider for AlwaysReview {
    fn review_required(&self, _task: &Task) -> bool {
        true
    }
}

/// Scenario world for task lifecycle behaviour tests.
#[derive(Default)]
pub struct LifecycleWorld {
    pub review_required: bool,
    pub service: Option<TestTaskService>,
    pub access_items: Option<Arc<InMemoryWorkbasketAccessRepository>>,
    pub workbasket_id: Option<WorkbasketId>,
    pub principals: HashMap<String, Principal>,
    pub task: Option<Task>,
    pub stale_copy: Option<Task>,
    pub last_result: Option<Result<Task, TaskServiceError>>,
}

impl LifecycleWorld {
    /// Returns the engine service, once a scenario has built it.
    pub fn service(&self) -> Result<&TestTaskService, eyre::Report> {
        self.service
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing engine in scenario world"))
    }

    /// Returns the task under test.
    pub fn task(&self) -> Result<&Task, eyre::Report> {
        self.task
            .as_ref()
            .ok_or_else(|| eyre::eyre!("missing task in scenario world"))
    }

    /// Returns a principal registered by an earlier step.
    pub fn principal(&self, name: &str) -> Result<Principal, eyre::Report> {
        self.principals
            .get(name)
            .cloned()
            .ok_or_else(|| eyre::eyre!("unknown caller '{name}' in scenario world"))
    }

    /// Records the outcome of a lifecycle operation, tracking the task on
    /// success.
    pub fn record(&mut self, result: Result<Task, TaskServiceError>) {
        if let Ok(ref task) = result {
            self.task = Some(task.clone());
        }
        self.last_result = Some(result);
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> LifecycleWorld {
    LifecycleWorld::default()
}

/// Runs an async operation within sync step definitions.
pub fn run_async<T>(future: impl std::future::Future<Output = T>) -> T {
    tokio::task::block_in_place(|| tokio::runtime::Handle::current().block_on(future))
}
