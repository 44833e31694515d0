//! A week of task work rolled up into dashboard, team, and series figures.

use super::helpers::{Campus, campus, term_start};
use campusdesk::error::ErrorKind;
use campusdesk::task::domain::{NewTask, TaskStatus};
use campusdesk::user::domain::UserRole;
use chrono::{Days, TimeDelta};
use rstest::rstest;

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dashboard_reflects_task_progress(campus: Campus) {
    let head = campus
        .provision("head@oakfield.sch.uk", "Priya", "Shah", UserRole::Administrator)
        .await;
    let teacher = campus
        .provision("j.morgan@oakfield.sch.uk", "Jamie", "Morgan", UserRole::Educator)
        .await;

    let reports = campus
        .tasks
        .create_task(
            NewTask::new("Write Year 9 reports", head.id(), [teacher.id()])
                .with_due_date(term_start() + TimeDelta::days(2)),
        )
        .await
        .expect("create reports task");
    let trip = campus
        .tasks
        .create_task(
            NewTask::new("Plan museum trip", head.id(), [teacher.id()])
                .with_due_date(term_start() + TimeDelta::days(10)),
        )
        .await
        .expect("create trip task");
    campus
        .tasks
        .create_task(
            NewTask::new("Update seating plans", head.id(), [teacher.id()])
                .with_due_date(term_start() + TimeDelta::days(4)),
        )
        .await
        .expect("create seating task");

    campus.clock.advance(TimeDelta::days(1));
    let started = campus.move_task(&reports, teacher.id(), TaskStatus::InProgress).await;
    campus.clock.advance(TimeDelta::days(1));
    campus.move_task(&started, teacher.id(), TaskStatus::Completed).await;
    campus.move_task(&trip, teacher.id(), TaskStatus::InProgress).await;

    let stats = campus.stats.dashboard_stats().await.expect("dashboard stats");

    assert_eq!(stats.total_tasks, 3);
    assert_eq!(stats.in_progress, 1);
    assert_eq!(stats.completed, 1);
    // Seating plans are due in 48 hours; the trip is eight days out and the
    // reports are done.
    assert_eq!(stats.due_soon, 1);
    assert_eq!(stats.completed_percentage(), 33);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn team_stats_count_active_staff_by_role(campus: Campus) {
    campus
        .provision("head@oakfield.sch.uk", "Priya", "Shah", UserRole::Administrator)
        .await;
    campus
        .provision("j.morgan@oakfield.sch.uk", "Jamie", "Morgan", UserRole::Educator)
        .await;
    let leaver = campus
        .provision("caretaker@oakfield.sch.uk", "Sam", "Okafor", UserRole::SupportStaff)
        .await;
    campus
        .users
        .deactivate_user(leaver.id())
        .await
        .expect("deactivate leaver");

    let stats = campus.stats.team_stats().await.expect("team stats");

    assert_eq!(stats.total_users, 3);
    assert_eq!(stats.active_users, 2);
    assert_eq!(stats.count_for(UserRole::Administrator), 1);
    assert_eq!(stats.count_for(UserRole::Educator), 1);
    assert_eq!(stats.count_for(UserRole::SupportStaff), 0);
    assert_eq!(stats.count_for(UserRole::Management), 0);
    assert_eq!(stats.recent_joins, 3);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn weekly_series_buckets_tasks_by_last_touch(campus: Campus) {
    let head = campus
        .provision("head@oakfield.sch.uk", "Priya", "Shah", UserRole::Administrator)
        .await;
    let idle = campus
        .tasks
        .create_task(NewTask::new("Check fire extinguishers", head.id(), [head.id()]))
        .await
        .expect("create idle task");
    let busy = campus
        .tasks
        .create_task(NewTask::new("Order textbooks", head.id(), [head.id()]))
        .await
        .expect("create busy task");

    campus.clock.advance(TimeDelta::days(2));
    campus.move_task(&busy, head.id(), TaskStatus::InProgress).await;

    let series = campus.stats.progress_series(7).await.expect("weekly series");

    assert_eq!(series.len(), 7);
    let today = (term_start() + TimeDelta::days(2)).date_naive();
    assert_eq!(series.last().map(|point| point.date), Some(today));
    let start_day = series
        .iter()
        .find(|point| point.date == idle.created_at().date_naive())
        .expect("term start inside the window");
    assert_eq!((start_day.todo, start_day.in_progress), (1, 0));
    let latest = series.last().expect("non-empty series");
    assert_eq!((latest.todo, latest.in_progress), (0, 1));
    assert_eq!(
        series.first().map(|point| point.date),
        today.checked_sub_days(Days::new(6))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn unsupported_series_period_is_a_validation_error(campus: Campus) {
    let err = campus
        .stats
        .progress_series(14)
        .await
        .expect_err("fortnight is not a supported period");

    assert_eq!(err.kind(), ErrorKind::Validation);
}
