//! Assignment notifications delivered through the channel dispatcher.

use super::helpers::{Campus, campus};
use campusdesk::notification::NotificationEvent;
use campusdesk::schema::UserId;
use campusdesk::suggestion::domain::NewSuggestion;
use campusdesk::task::{
    domain::{NewTask, TaskPatch, TaskPriority},
    services::UpdateTaskRequest,
};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn new_and_added_assignees_are_notified_once(mut campus: Campus) {
    let (head, first, second, third) = (UserId::new(), UserId::new(), UserId::new(), UserId::new());
    let task = campus
        .tasks
        .create_task(
            NewTask::new("Cover period 3 for Year 8", head, [first, second])
                .with_priority(TaskPriority::Urgent),
        )
        .await
        .expect("create task");

    campus
        .tasks
        .update_task(UpdateTaskRequest::new(
            task.id(),
            head,
            task.updated_at(),
            TaskPatch::new().with_assignees([second, third]),
        ))
        .await
        .expect("reassign task");

    let delivered = campus.drain_notifications();
    let [assigned, reassigned] = delivered.as_slice() else {
        panic!("expected two notifications, got {delivered:?}");
    };

    assert_eq!(assigned.event, NotificationEvent::TaskAssigned);
    assert_eq!(assigned.recipients.len(), 2);
    assert!(assigned.recipients.contains(&first) && assigned.recipients.contains(&second));
    assert_eq!(assigned.subject, "New task: Cover period 3 for Year 8");
    assert!(assigned.body.contains("urgent priority"));

    assert_eq!(reassigned.event, NotificationEvent::TaskReassigned);
    assert_eq!(reassigned.recipients, vec![third]);
    assert_eq!(reassigned.task_id, task.id());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accepted_suggestion_notifies_its_recipient(mut campus: Campus) {
    let recipient = UserId::new();
    let suggestion = campus
        .suggestions
        .record_suggestion(NewSuggestion::new(recipient, "Refresh reading corner", "classroom", 0.6))
        .await
        .expect("record suggestion");
    assert!(campus.drain_notifications().is_empty());

    let accepted = campus
        .suggestions
        .accept_suggestion(suggestion.id(), recipient)
        .await
        .expect("accept suggestion");

    let delivered = campus.drain_notifications();
    assert_eq!(delivered.len(), 1);
    assert!(delivered.iter().all(|note| {
        note.event == NotificationEvent::TaskAssigned
            && note.recipients == vec![recipient]
            && note.task_id == accepted.task.id()
    }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dismissing_a_suggestion_sends_nothing(mut campus: Campus) {
    let recipient = UserId::new();
    let suggestion = campus
        .suggestions
        .record_suggestion(NewSuggestion::new(recipient, "Repaint corridor", "facilities", 0.3))
        .await
        .expect("record suggestion");

    campus
        .suggestions
        .dismiss_suggestion(suggestion.id(), recipient)
        .await
        .expect("dismiss suggestion");

    assert!(campus.drain_notifications().is_empty());
}
