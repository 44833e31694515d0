//! When steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use campusdesk::task::{
    domain::{TaskPatch, TaskStatus},
    services::UpdateTaskRequest,
};
use rstest_bdd_macros::when;

#[when(r#"the task status is changed to "{status}""#)]
fn task_status_changed(world: &mut TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let target = match TaskStatus::try_from(status.as_str()) {
        Ok(target) => target,
        Err(err) => {
            world.parse_error = Some(err);
            return Ok(());
        }
    };
    let task = world.current_task()?.clone();

    let result = run_async(world.service.update_task(UpdateTaskRequest::new(
        task.id(),
        world.actor,
        task.updated_at(),
        TaskPatch::new().with_status(target),
    )));
    if let Ok(updated) = &result {
        world.task = Some(updated.clone());
    }
    world.last_update = Some(result);
    Ok(())
}

#[when("a stale copy of the task sets progress to {progress:u8}")]
fn stale_copy_sets_progress(world: &mut TaskStatusWorld, progress: u8) -> Result<(), eyre::Report> {
    let stale = world
        .stale_copy
        .clone()
        .ok_or_else(|| eyre::eyre!("missing stale copy in scenario world"))?;

    let result = run_async(world.service.update_task(UpdateTaskRequest::new(
        stale.id(),
        world.actor,
        stale.updated_at(),
        TaskPatch::new().with_progress(progress),
    )));
    world.last_update = Some(result);
    Ok(())
}
