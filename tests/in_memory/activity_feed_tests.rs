//! Activity trail produced by task, comment, and suggestion operations.

use super::helpers::{Campus, campus};
use campusdesk::activity::domain::{ActivityFilter, ActivityKind};
use campusdesk::schema::UserId;
use campusdesk::suggestion::domain::NewSuggestion;
use campusdesk::task::domain::{NewTask, TaskStatus};
use chrono::TimeDelta;
use rstest::rstest;
use serde_json::Value;

fn kinds(entries: &[campusdesk::activity::domain::Activity]) -> Vec<&str> {
    entries.iter().map(|entry| entry.kind.as_str()).collect()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn task_feed_lists_newest_first(campus: Campus) {
    let (author, teacher) = (UserId::new(), UserId::new());
    let task = campus
        .tasks
        .create_task(NewTask::new("Prepare parents' evening rota", author, [teacher]))
        .await
        .expect("create task");
    campus.clock.advance(TimeDelta::minutes(5));
    campus
        .comments
        .add_comment(task.id(), teacher, "Draft shared in the staff drive")
        .await
        .expect("add comment");
    campus.clock.advance(TimeDelta::minutes(5));
    campus.move_task(&task, teacher, TaskStatus::InProgress).await;

    let feed = campus
        .activity
        .feed(&ActivityFilter::all().with_target(task.id()))
        .await
        .expect("task feed");

    assert_eq!(kinds(&feed), ["task_updated", "comment_added", "task_created"]);
    assert!(feed.windows(2).all(|pair| match pair {
        [newer, older] => newer.created_at >= older.created_at,
        _ => false,
    }));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn feed_filters_by_user_and_limit(campus: Campus) {
    let (head, teacher) = (UserId::new(), UserId::new());
    for title in ["Audit PE kit", "Restock science lab", "Book hall for assembly"] {
        campus
            .tasks
            .create_task(NewTask::new(title, head, [teacher]))
            .await
            .expect("create task");
        campus.clock.advance(TimeDelta::minutes(1));
    }

    let latest_two = campus
        .activity
        .feed(&ActivityFilter::all().with_user(head).with_limit(2))
        .await
        .expect("limited feed");
    let by_teacher = campus
        .activity
        .feed(&ActivityFilter::all().with_user(teacher))
        .await
        .expect("teacher feed");

    assert_eq!(latest_two.len(), 2);
    assert!(
        latest_two
            .first()
            .is_some_and(|entry| entry.description.contains("Book hall for assembly"))
    );
    assert!(by_teacher.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn accepted_suggestion_links_its_task_in_the_feed(campus: Campus) {
    let recipient = UserId::new();
    let suggestion = campus
        .suggestions
        .record_suggestion(
            NewSuggestion::new(recipient, "Chase overdue trip payments", "finance", 0.74)
                .with_reasoning("Twelve families have not paid for the Year 6 residential"),
        )
        .await
        .expect("record suggestion");

    let accepted = campus
        .suggestions
        .accept_suggestion(suggestion.id(), recipient)
        .await
        .expect("accept suggestion");

    let kind = ActivityKind::new(ActivityKind::SUGGESTION_ACCEPTED).expect("valid kind");
    let feed = campus
        .activity
        .feed(&ActivityFilter::all().with_kind(kind))
        .await
        .expect("suggestion feed");

    let [entry] = feed.as_slice() else {
        panic!("expected exactly one acceptance entry, got {feed:?}");
    };
    assert_eq!(entry.user_id, recipient);
    assert_eq!(
        entry.metadata.get("taskId"),
        Some(&Value::from(accepted.task.id().to_string()))
    );
    assert_eq!(entry.metadata.get("type"), Some(&Value::from("finance")));

    let created = campus
        .activity
        .feed(&ActivityFilter::all().with_target(accepted.task.id()))
        .await
        .expect("task feed");
    assert_eq!(kinds(&created), ["task_created"]);
}
