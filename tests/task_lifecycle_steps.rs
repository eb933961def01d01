//! Behaviour tests for the task lifecycle engine.
//!
//! Scenario wiring lives here; step definitions live in
//! `task_lifecycle_steps/`.

#[path = "task_lifecycle_steps/mod.rs"]
mod task_lifecycle_steps_defs;

use rstest_bdd_macros::scenario;
use task_lifecycle_steps_defs::world::{LifecycleWorld, world};

#[scenario(
    path = "tests/features/task_lifecycle.feature",
    name = "Claim a ready task"
)]
#[tokio::test(flavor = "multi_thread")]
async fn claim_a_ready_task(world: LifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_lifecycle.feature",
    name = "Completing a claimed task closes it"
)]
#[tokio::test(flavor = "multi_thread")]
async fn completing_a_claimed_task(world: LifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_lifecycle.feature",
    name = "A demanded review defers completion"
)]
#[tokio::test(flavor = "multi_thread")]
async fn demanded_review_defers_completion(world: LifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_lifecycle.feature",
    name = "A stale update is rejected"
)]
#[tokio::test(flavor = "multi_thread")]
async fn stale_update_is_rejected(world: LifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_lifecycle.feature",
    name = "Terminating requires an administrative role"
)]
#[tokio::test(flavor = "multi_thread")]
async fn terminating_requires_a_role(world: LifecycleWorld) {
    let _ = world;
}

#[scenario(
    path = "tests/features/task_lifecycle.feature",
    name = "An administrator terminates a task"
)]
#[tokio::test(flavor = "multi_thread")]
async fn administrator_terminates_a_task(world: LifecycleWorld) {
    let _ = world;
}
