//! Then steps for suggestion lifecycle BDD scenarios.

use super::world::{SuggestionWorld, run_async};
use campusdesk::error::ErrorKind;
use campusdesk::suggestion::{domain::SuggestionStatus, services::SuggestionLifecycleError};
use campusdesk::task::{
    domain::{TaskOrigin, TaskPriority},
    ports::TaskFilter,
};
use eyre::WrapErr;
use rstest_bdd_macros::then;

#[then(r#"the suggestion status is "{status}""#)]
fn suggestion_status_is(world: &SuggestionWorld, status: String) -> Result<(), eyre::Report> {
    let expected = SuggestionStatus::try_from(status.as_str())
        .map_err(|err| eyre::eyre!("invalid expected status in scenario: {err}"))?;
    let id = world.current_suggestion()?.id();
    let stored = run_async(world.service.get_suggestion(id)).wrap_err("reload suggestion")?;

    if stored.status() != expected {
        return Err(eyre::eyre!(
            "expected suggestion status {}, found {}",
            expected.as_str(),
            stored.status().as_str()
        ));
    }
    Ok(())
}

#[then(r#"a "{priority}" priority task "{title}" exists for the recipient"#)]
fn task_exists_for_recipient(
    world: &SuggestionWorld,
    priority: String,
    title: String,
) -> Result<(), eyre::Report> {
    let expected_priority = TaskPriority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid expected priority in scenario: {err}"))?;
    let tasks = run_async(world.tasks.list_tasks(TaskFilter::AssignedTo(world.recipient)))
        .wrap_err("list recipient tasks")?;

    let found = tasks
        .iter()
        .any(|task| task.title() == title && task.priority() == expected_priority);
    if !found {
        return Err(eyre::eyre!("no {priority} task titled {title:?} among {tasks:?}"));
    }
    Ok(())
}

#[then("the task records the suggestion as its origin")]
fn task_records_origin(world: &SuggestionWorld) -> Result<(), eyre::Report> {
    let accepted = world
        .accepted
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing accepted suggestion"))?;
    let expected = TaskOrigin::Suggestion {
        suggestion_id: accepted.suggestion.id(),
    };

    if accepted.task.origin() != expected {
        return Err(eyre::eyre!(
            "expected origin {expected:?}, found {:?}",
            accepted.task.origin()
        ));
    }
    Ok(())
}

#[then("no task has been created")]
fn no_task_created(world: &SuggestionWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.tasks.list_tasks(TaskFilter::All)).wrap_err("list tasks")?;
    if !tasks.is_empty() {
        return Err(eyre::eyre!("expected no tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then("exactly {count:usize} task exists")]
fn exactly_n_tasks(world: &SuggestionWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = run_async(world.tasks.list_tasks(TaskFilter::All)).wrap_err("list tasks")?;
    if tasks.len() != count {
        return Err(eyre::eyre!("expected {count} tasks, found {}", tasks.len()));
    }
    Ok(())
}

#[then("the decision fails with an invalid transition error")]
fn decision_fails_with_invalid_transition(world: &SuggestionWorld) -> Result<(), eyre::Report> {
    let error = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing decision error"))?;

    if !matches!(error, SuggestionLifecycleError::InvalidTransition { .. }) {
        return Err(eyre::eyre!("expected InvalidTransition error, got {error:?}"));
    }
    Ok(())
}

#[then("the suggestion is rejected as invalid")]
fn suggestion_rejected(world: &SuggestionWorld) -> Result<(), eyre::Report> {
    let error = world
        .last_error
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing validation error"))?;

    if error.kind() != ErrorKind::Validation {
        return Err(eyre::eyre!("expected a validation error, got {error:?}"));
    }
    if world.suggestion.is_some() {
        return Err(eyre::eyre!("an invalid suggestion should not be recorded"));
    }
    Ok(())
}
