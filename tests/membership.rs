mod common;

use common::{
    FakeCalendarClient, calendar_config, link_calendar, memory_storage, seed_classroom,
    seed_user, slot,
};
use rust_classroom::config::CalendarConfig;
use rust_classroom::errors::ClassroomError;
use rust_classroom::models::calendar::entities::SyncStatus;
use rust_classroom::models::members::entities::MemberRole;
use rust_classroom::services::members::join_classroom;

#[tokio::test]
async fn test_join_by_code_adds_student_and_syncs() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    let student = seed_user(&storage, "student@example.com", "Student").await;
    link_calendar(&storage, student.id).await;
    seed_classroom(
        &storage,
        owner.id,
        "JOINME12",
        vec![slot("Monday", "08:00", "09:30")],
    )
    .await;

    let client = FakeCalendarClient::default();
    // 课堂码不区分大小写，允许首尾空白
    let response = join_classroom(
        &storage,
        &client,
        &calendar_config(),
        student.id,
        " joinme12 ",
    )
    .await
    .unwrap();

    assert_eq!(response.member.role, MemberRole::Student);
    assert_eq!(response.member.user_id, student.id);
    assert_eq!(response.calendar.status, SyncStatus::Success);
    assert_eq!(response.calendar.created, 1);
}

#[tokio::test]
async fn test_join_as_existing_member_writes_nothing() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    link_calendar(&storage, owner.id).await;
    let classroom = seed_classroom(
        &storage,
        owner.id,
        "OWNED123",
        vec![slot("Monday", "08:00", "09:30")],
    )
    .await;

    let client = FakeCalendarClient::default();
    let result = join_classroom(&storage, &client, &calendar_config(), owner.id, "OWNED123").await;

    assert!(matches!(result, Err(ClassroomError::AlreadyMember(_))));
    assert!(client.events().is_empty());

    let members = storage.list_members(classroom.id).await.unwrap();
    assert_eq!(members.len(), 1);
    assert_eq!(members[0].member.role, MemberRole::Teacher);
}

#[tokio::test]
async fn test_join_with_unknown_code_is_not_found() {
    let storage = memory_storage().await;
    let student = seed_user(&storage, "student@example.com", "Student").await;

    let client = FakeCalendarClient::default();
    let result =
        join_classroom(&storage, &client, &calendar_config(), student.id, "NOPE0000").await;

    assert!(matches!(result, Err(ClassroomError::NotFound(_))));
}

#[tokio::test]
async fn test_creator_becomes_teacher_member() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    let classroom = seed_classroom(&storage, owner.id, "CREATOR1", vec![]).await;

    let member = storage
        .get_member(classroom.id, owner.id)
        .await
        .unwrap()
        .expect("creator membership");
    assert_eq!(member.role, MemberRole::Teacher);
    assert_eq!(storage.count_members(classroom.id).await.unwrap(), 1);
}

#[tokio::test]
async fn test_join_with_unusable_offset_keeps_membership() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    let student = seed_user(&storage, "student@example.com", "Student").await;
    link_calendar(&storage, student.id).await;
    let classroom = seed_classroom(
        &storage,
        owner.id,
        "JOINME34",
        vec![slot("Monday", "08:00", "09:30")],
    )
    .await;

    let config = CalendarConfig {
        utc_offset: "IST".to_string(),
        ..calendar_config()
    };
    let client = FakeCalendarClient::default();
    let response = join_classroom(&storage, &client, &config, student.id, "JOINME34")
        .await
        .unwrap();

    assert_eq!(response.member.user_id, student.id);
    assert_eq!(response.calendar.status, SyncStatus::Partial);
    assert_eq!(response.calendar.created, 0);
    assert_eq!(response.calendar.failures.len(), 1);
    assert!(storage.is_member(student.id, classroom.id).await.unwrap());
    assert!(client.events().is_empty());
}
