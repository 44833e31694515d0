//! Then steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use campusdesk::task::{domain::TaskStatus, services::TaskLifecycleError};
use eyre::WrapErr;
use rstest_bdd_macros::then;

fn expected_status(status: &str) -> Result<TaskStatus, eyre::Report> {
    TaskStatus::try_from(status).map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))
}

#[then(r#"the task status is "{status}""#)]
fn task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = expected_status(&status)?;
    let task = world.current_task()?;

    if task.status() != expected {
        return Err(eyre::eyre!("expected status {expected}, found {}", task.status()));
    }
    Ok(())
}

#[then("the task progress is {progress:u8}")]
fn task_progress_is(world: &TaskStatusWorld, progress: u8) -> Result<(), eyre::Report> {
    let task = world.current_task()?;

    if task.progress().value() != progress {
        return Err(eyre::eyre!(
            "expected progress {progress}, found {}",
            task.progress().value()
        ));
    }
    Ok(())
}

#[then(r#"the stored task status is "{status}""#)]
fn stored_task_status_is(world: &TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let expected = expected_status(&status)?;
    let task_id = world.current_task()?.id();
    let stored = run_async(world.service.get_task(task_id)).wrap_err("reload task")?;

    if stored.status() != expected {
        return Err(eyre::eyre!("expected stored status {expected}, found {}", stored.status()));
    }
    Ok(())
}

#[then("the update fails with an invalid transition error")]
fn update_fails_with_invalid_transition(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result"))?;

    if !matches!(result, Err(TaskLifecycleError::InvalidTransition { .. })) {
        return Err(eyre::eyre!("expected InvalidTransition error, got {result:?}"));
    }
    Ok(())
}

#[then("the update fails with a conflict error")]
fn update_fails_with_conflict(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_update
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing update result"))?;

    if !matches!(result, Err(TaskLifecycleError::Conflict { .. })) {
        return Err(eyre::eyre!("expected Conflict error, got {result:?}"));
    }
    Ok(())
}

#[then("the status string is rejected")]
fn status_string_rejected(world: &TaskStatusWorld) -> Result<(), eyre::Report> {
    if world.parse_error.is_none() {
        return Err(eyre::eyre!("expected the status string to fail parsing"));
    }
    if world.last_update.is_some() {
        return Err(eyre::eyre!("no update should have been attempted"));
    }
    Ok(())
}
