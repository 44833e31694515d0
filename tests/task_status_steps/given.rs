//! Given steps for task status BDD scenarios.

use super::world::{TaskStatusWorld, run_async};
use campusdesk::schema::UserId;
use campusdesk::task::{
    domain::{NewTask, TaskPatch, TaskStatus},
    services::UpdateTaskRequest,
};
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a task "{title}" assigned to an educator"#)]
fn task_assigned_to_educator(world: &mut TaskStatusWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(
        world
            .service
            .create_task(NewTask::new(title, world.actor, [UserId::new()])),
    )
    .wrap_err("create task for status scenario")?;
    world.task = Some(created);
    Ok(())
}

#[given(r#"the task has been moved to "{status}""#)]
fn task_has_been_moved(world: &mut TaskStatusWorld, status: String) -> Result<(), eyre::Report> {
    let target = TaskStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid status in scenario setup: {err}"))?;
    let task = world.current_task()?.clone();

    let moved = run_async(world.service.update_task(UpdateTaskRequest::new(
        task.id(),
        world.actor,
        task.updated_at(),
        TaskPatch::new().with_status(target),
    )))
    .wrap_err("move task in scenario setup")?;

    world.stale_copy = Some(task);
    world.task = Some(moved);
    Ok(())
}
