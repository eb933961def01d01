//! When steps for task lifecycle BDD scenarios.

use super::world::{LifecycleWorld, run_async};
use rstest_bdd_macros::when;

#[when(r#""{name}" claims the task"#)]
fn claims_the_task(world: &mut LifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let principal = world.principal(&name)?;
    let task_id = world.task()?.id();
    let result = run_async(world.service()?.claim(&principal, task_id));
    world.record(result);
    Ok(())
}

#[when(r#""{name}" completes the task"#)]
fn completes_the_task(world: &mut LifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let principal = world.principal(&name)?;
    let task_id = world.task()?.id();
    let result = run_async(world.service()?.complete_task(&principal, task_id));
    world.record(result);
    Ok(())
}

#[when(r#""{name}" terminates the task"#)]
fn terminates_the_task(world: &mut LifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let principal = world.principal(&name)?;
    let task_id = world.task()?.id();
    let result = run_async(world.service()?.terminate_task(&principal, task_id));
    world.record(result);
    Ok(())
}

#[when(r#""{name}" submits the stale copy"#)]
fn submits_the_stale_copy(world: &mut LifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let principal = world.principal(&name)?;
    let mut copy = world
        .stale_copy
        .take()
        .ok_or_else(|| eyre::eyre!("missing stale copy in scenario world"))?;
    copy.set_note(Some("stale edit".to_owned()));
    let result = run_async(world.service()?.update_task(&principal, copy));
    world.last_result = Some(result);
    Ok(())
}
