//! Given steps for suggestion lifecycle BDD scenarios.

use super::world::{SuggestionWorld, run_async};
use campusdesk::suggestion::domain::NewSuggestion;
use campusdesk::task::domain::TaskPriority;
use eyre::WrapErr;
use rstest_bdd_macros::given;

#[given(r#"a pending "{priority}" priority suggestion "{title}""#)]
fn pending_suggestion(
    world: &mut SuggestionWorld,
    priority: String,
    title: String,
) -> Result<(), eyre::Report> {
    let parsed = TaskPriority::try_from(priority.as_str())
        .map_err(|err| eyre::eyre!("invalid priority in scenario setup: {err}"))?;
    let input = NewSuggestion::new(world.recipient, title, "facilities", 0.8)
        .with_reasoning("Raised by the weekly site walk")
        .with_priority(parsed);

    let recorded = run_async(world.service.record_suggestion(input)).wrap_err("record suggestion")?;
    world.suggestion = Some(recorded);
    Ok(())
}

#[given("the suggestion has been dismissed")]
fn suggestion_dismissed(world: &mut SuggestionWorld) -> Result<(), eyre::Report> {
    let id = world.current_suggestion()?.id();
    let dismissed = run_async(world.service.dismiss_suggestion(id, world.recipient))
        .wrap_err("dismiss suggestion in scenario setup")?;
    world.suggestion = Some(dismissed);
    Ok(())
}

#[given("the suggestion has been accepted")]
fn suggestion_accepted(world: &mut SuggestionWorld) -> Result<(), eyre::Report> {
    let id = world.current_suggestion()?.id();
    let accepted = run_async(world.service.accept_suggestion(id, world.recipient))
        .wrap_err("accept suggestion in scenario setup")?;
    world.suggestion = Some(accepted.suggestion.clone());
    world.accepted = Some(accepted);
    Ok(())
}
