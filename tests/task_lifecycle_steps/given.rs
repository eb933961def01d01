//! Given steps for task lifecycle BDD scenarios.

use std::sync::Arc;

use super::world::{AlwaysReview, LifecycleWorld, run_async};
use eyre::WrapErr;
use mockable::DefaultClock;
use rstest_bdd_macros::given;
use wicker::security::{Principal, Role};
use wicker::task::{
    adapters::memory::{InMemoryClassificationRepository, InMemoryTaskRepository},
    domain::{ClassificationSummary, ObjectReference},
    ports::ExtensionRegistry,
    services::{CreateTaskRequest, TaskLifecycleService},
};
use wicker::workbasket::{
    adapters::memory::InMemoryWorkbasketAccessRepository,
    domain::{WorkbasketAccessItem, WorkbasketId, WorkbasketPermission},
};

#[given("a review provider that always demands review")]
fn review_provider(world: &mut LifecycleWorld) {
    world.review_required = true;
}

#[given("a workbasket with a task ready to work")]
fn workbasket_with_task(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let access_items = Arc::new(InMemoryWorkbasketAccessRepository::new());
    let classifications = Arc::new(InMemoryClassificationRepository::new());
    classifications
        .put(ClassificationSummary::new("standard", 4, "P2D"))
        .wrap_err("seed classification")?;

    let mut extensions = ExtensionRegistry::new();
    if world.review_required {
        extensions.register_review_required(AlwaysReview);
    }

    let service = TaskLifecycleService::new(
        tasks,
        Arc::clone(&access_items),
        classifications,
        Arc::new(extensions),
        Arc::new(DefaultClock),
    );

    let workbasket_id = WorkbasketId::new();
    let seeder = Principal::new("seeder").with_roles([Role::Admin]);
    let reference = ObjectReference::new("acme", "invoice", "order-1")
        .wrap_err("build object reference")?;
    let task = run_async(service.create_task(
        &seeder,
        CreateTaskRequest::new(workbasket_id, "team-basket", "standard", reference),
    ))
    .wrap_err("seed task for scenario")?;

    world.service = Some(service);
    world.access_items = Some(access_items);
    world.workbasket_id = Some(workbasket_id);
    world.principals.insert("seeder".to_owned(), seeder);
    world.task = Some(task);
    Ok(())
}

#[given(r#"the caller "{name}" may edit tasks in the workbasket"#)]
fn caller_may_edit(world: &mut LifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let workbasket_id = world
        .workbasket_id
        .ok_or_else(|| eyre::eyre!("missing workbasket in scenario world"))?;
    let access_items = world
        .access_items
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing access items in scenario world"))?;
    access_items
        .put(
            WorkbasketAccessItem::new(workbasket_id, &name).with_permissions([
                WorkbasketPermission::Read,
                WorkbasketPermission::ReadTasks,
                WorkbasketPermission::EditTasks,
            ]),
        )
        .wrap_err("grant workbasket access")?;
    world.principals.insert(name.clone(), Principal::new(name));
    Ok(())
}

#[given(r#"the caller "{name}" holds the task admin role"#)]
fn caller_is_task_admin(world: &mut LifecycleWorld, name: String) {
    world.principals.insert(
        name.clone(),
        Principal::new(name).with_roles([Role::TaskAdmin]),
    );
}

#[given(r#""{name}" has claimed the task"#)]
fn caller_has_claimed(world: &mut LifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let principal = world.principal(&name)?;
    let task_id = world.task()?.id();
    let claimed = run_async(world.service()?.claim(&principal, task_id))
        .wrap_err("claim task in scenario setup")?;
    world.task = Some(claimed);
    Ok(())
}

#[given(r#""{name}" holds a copy of the task"#)]
fn caller_holds_a_copy(world: &mut LifecycleWorld, name: String) -> Result<(), eyre::Report> {
    world.principal(&name)?;
    world.stale_copy = Some(world.task()?.clone());
    Ok(())
}

#[given("the task is updated behind the copy")]
fn task_updated_behind_the_copy(world: &mut LifecycleWorld) -> Result<(), eyre::Report> {
    let seeder = world.principal("seeder")?;
    let mut interim = world.task()?.clone();
    interim.set_note(Some("interim edit".to_owned()));
    let updated = run_async(world.service()?.update_task(&seeder, interim))
        .wrap_err("interim update in scenario setup")?;
    world.task = Some(updated);
    Ok(())
}
