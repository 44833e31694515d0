//! When steps for suggestion lifecycle BDD scenarios.

use super::world::{SuggestionWorld, run_async};
use campusdesk::suggestion::domain::NewSuggestion;
use rstest_bdd_macros::when;

#[when("the recipient accepts the suggestion")]
fn recipient_accepts(world: &mut SuggestionWorld) -> Result<(), eyre::Report> {
    let id = world.current_suggestion()?.id();
    match run_async(world.service.accept_suggestion(id, world.recipient)) {
        Ok(accepted) => {
            world.suggestion = Some(accepted.suggestion.clone());
            world.accepted = Some(accepted);
        }
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when("the recipient dismisses the suggestion")]
fn recipient_dismisses(world: &mut SuggestionWorld) -> Result<(), eyre::Report> {
    let id = world.current_suggestion()?.id();
    match run_async(world.service.dismiss_suggestion(id, world.recipient)) {
        Ok(dismissed) => world.suggestion = Some(dismissed),
        Err(err) => world.last_error = Some(err),
    }
    Ok(())
}

#[when(r#"a suggestion "{title}" arrives with confidence {confidence:f64}"#)]
fn suggestion_arrives(world: &mut SuggestionWorld, title: String, confidence: f64) {
    let input = NewSuggestion::new(world.recipient, title, "library", confidence);
    match run_async(world.service.record_suggestion(input)) {
        Ok(recorded) => world.suggestion = Some(recorded),
        Err(err) => world.last_error = Some(err),
    }
}
