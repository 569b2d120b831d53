mod common;

use common::{
    FakeCalendarClient, calendar_config, link_calendar, memory_storage, seed_classroom,
    seed_user, slot,
};
use rust_classroom::models::calendar::entities::SyncStatus;
use rust_classroom::services::calendar::sync_classroom_for_user;

#[tokio::test]
async fn test_wednesday_slot_creates_weekly_event() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    let student = seed_user(&storage, "student@example.com", "Student").await;
    link_calendar(&storage, student.id).await;
    let classroom = seed_classroom(
        &storage,
        owner.id,
        "WEDCLASS",
        vec![slot("Wednesday", "10:00", "11:00")],
    )
    .await;

    let client = FakeCalendarClient::default();
    let report =
        sync_classroom_for_user(&storage, &client, &calendar_config(), &classroom, student.id)
            .await;

    assert_eq!(report.status, SyncStatus::Success);
    assert_eq!(report.created, 1);

    let events = client.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].summary, "Algorithms");
    assert_eq!(events[0].start.date_time, "2024-01-03T10:00:00+05:30");
    assert_eq!(events[0].end.date_time, "2024-01-03T11:00:00+05:30");
    assert_eq!(events[0].start.time_zone, "Asia/Kolkata");
    assert_eq!(
        events[0].recurrence,
        vec!["RRULE:FREQ=WEEKLY;BYDAY=WE;UNTIL=20240301T235959Z".to_string()]
    );
}

#[tokio::test]
async fn test_one_failing_slot_reports_partial() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    let student = seed_user(&storage, "student@example.com", "Student").await;
    link_calendar(&storage, student.id).await;
    let classroom = seed_classroom(
        &storage,
        owner.id,
        "PARTIAL1",
        vec![
            slot("Monday", "09:00", "10:00"),
            slot("Tuesday", "09:00", "10:00"),
            slot("Thursday", "09:00", "10:00"),
        ],
    )
    .await;

    let client = FakeCalendarClient::failing_on(&["TU"]);
    let report =
        sync_classroom_for_user(&storage, &client, &calendar_config(), &classroom, student.id)
            .await;

    assert_eq!(report.status, SyncStatus::Partial);
    assert_eq!(report.created, 2);
    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].index, 1);
    assert_eq!(report.failures[0].day, "Tuesday");
    assert_eq!(client.events().len(), 2);
}

#[tokio::test]
async fn test_unrecognised_days_succeed_without_events() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    // 未绑定日历：没有可创建的事件时不需要凭据
    let student = seed_user(&storage, "student@example.com", "Student").await;
    let classroom = seed_classroom(
        &storage,
        owner.id,
        "FUNDAYS1",
        vec![slot("Funday", "09:00", "10:00"), slot("Caturday", "11:00", "12:00")],
    )
    .await;

    let client = FakeCalendarClient::default();
    let report =
        sync_classroom_for_user(&storage, &client, &calendar_config(), &classroom, student.id)
            .await;

    assert_eq!(report.status, SyncStatus::Success);
    assert_eq!(report.created, 0);
    assert_eq!(report.skipped.len(), 2);
    assert!(client.events().is_empty());
}

#[tokio::test]
async fn test_missing_credential_is_unauthorized() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    let student = seed_user(&storage, "student@example.com", "Student").await;
    let classroom = seed_classroom(
        &storage,
        owner.id,
        "NOCREDS1",
        vec![slot("Friday", "14:00", "15:00")],
    )
    .await;

    let client = FakeCalendarClient::default();
    let report =
        sync_classroom_for_user(&storage, &client, &calendar_config(), &classroom, student.id)
            .await;

    assert_eq!(report.status, SyncStatus::Unauthorized);
    assert_eq!(report.created, 0);
    assert!(client.events().is_empty());
}
