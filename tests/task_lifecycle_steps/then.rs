//! Then steps for task lifecycle BDD scenarios.

use super::world::LifecycleWorld;
use rstest_bdd_macros::then;
use wicker::task::domain::TaskState;
use wicker::task::services::TaskServiceError;
use wicker::workbasket::services::AuthorizationError;

#[then(r#"the task state is "{state}""#)]
fn task_state_is(world: &LifecycleWorld, state: String) -> Result<(), eyre::Report> {
    let expected = TaskState::try_from(state.as_str())
        .map_err(|err| eyre::eyre!("invalid expected state in scenario: {err}"))?;
    let task = world.task()?;

    if task.state() != expected {
        return Err(eyre::eyre!(
            "expected state {}, found {}",
            expected.as_str(),
            task.state().as_str()
        ));
    }
    Ok(())
}

#[then(r#"the task is owned by "{name}""#)]
fn task_is_owned_by(world: &LifecycleWorld, name: String) -> Result<(), eyre::Report> {
    let task = world.task()?;
    if task.owner() != Some(name.as_str()) {
        return Err(eyre::eyre!(
            "expected owner {name}, found {:?}",
            task.owner()
        ));
    }
    Ok(())
}

#[then("the update fails with a concurrency error")]
fn update_fails_with_concurrency(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    if !matches!(result, Err(TaskServiceError::Concurrency { .. })) {
        return Err(eyre::eyre!("expected Concurrency error, got {result:?}"));
    }
    Ok(())
}

#[then("the operation fails with a missing-role error")]
fn operation_fails_with_missing_role(world: &LifecycleWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing operation result"))?;

    if !matches!(
        result,
        Err(TaskServiceError::Authorization(
            AuthorizationError::NotAuthorized { .. }
        ))
    ) {
        return Err(eyre::eyre!("expected missing-role error, got {result:?}"));
    }
    Ok(())
}
