mod common;

use common::{
    FakeCalendarClient, calendar_config, link_calendar, memory_storage, seed_classroom, seed_user,
    slot,
};
use rust_classroom::config::CalendarConfig;
use rust_classroom::models::calendar::entities::SyncStatus;
use rust_classroom::errors::ClassroomError;
use rust_classroom::models::invitations::entities::InvitationAction;
use rust_classroom::models::invitations::requests::InvitationEntry;
use rust_classroom::models::invitations::responses::SendOutcome;
use rust_classroom::models::members::entities::MemberRole;
use rust_classroom::services::invitations::respond::respond_invitation;
use rust_classroom::services::invitations::send::send_invitations;

fn entry(email: &str, role: MemberRole) -> InvitationEntry {
    InvitationEntry {
        email: email.to_string(),
        role,
    }
}

#[tokio::test]
async fn test_send_reports_outcome_per_email() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    let classroom = seed_classroom(&storage, owner.id, "INVITE01", vec![]).await;

    let results = send_invitations(
        &storage,
        owner.id,
        classroom.id,
        &[
            entry("New.Student@Example.com", MemberRole::Student),
            entry("not-an-email", MemberRole::Student),
            entry("owner@example.com", MemberRole::CoTeacher),
        ],
    )
    .await
    .unwrap();

    let outcomes: Vec<_> = results.iter().map(|r| r.outcome).collect();
    assert_eq!(
        outcomes,
        vec![
            SendOutcome::Sent,
            SendOutcome::InvalidEmail,
            SendOutcome::AlreadyMember
        ]
    );
    assert_eq!(results[0].email, "new.student@example.com");

    // 再次发送同一邮箱时不重复创建
    let again = send_invitations(
        &storage,
        owner.id,
        classroom.id,
        &[entry("new.student@example.com", MemberRole::Student)],
    )
    .await
    .unwrap();
    assert_eq!(again[0].outcome, SendOutcome::AlreadyInvited);
    assert_eq!(
        storage
            .list_classroom_invitations(classroom.id)
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn test_only_teachers_can_send() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    let student = seed_user(&storage, "student@example.com", "Student").await;
    let classroom = seed_classroom(&storage, owner.id, "INVITE02", vec![]).await;
    storage
        .add_member_if_absent(classroom.id, student.id, MemberRole::Student)
        .await
        .unwrap();

    let result = send_invitations(
        &storage,
        student.id,
        classroom.id,
        &[entry("friend@example.com", MemberRole::Student)],
    )
    .await;

    assert!(matches!(result, Err(ClassroomError::Authorization(_))));
}

#[tokio::test]
async fn test_decline_deletes_invitation_without_membership() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    let invitee = seed_user(&storage, "invitee@example.com", "Invitee").await;
    let classroom = seed_classroom(&storage, owner.id, "INVITE03", vec![]).await;
    let invitation = storage
        .create_invitation_if_absent(owner.id, "invitee@example.com", classroom.id, MemberRole::Student)
        .await
        .unwrap()
        .expect("new invitation");

    let client = FakeCalendarClient::default();
    let response = respond_invitation(
        &storage,
        &client,
        &calendar_config(),
        invitation.id,
        "invitee@example.com",
        InvitationAction::Decline,
    )
    .await
    .unwrap();

    assert_eq!(response.action, InvitationAction::Decline);
    assert!(response.member.is_none());
    assert!(storage.get_invitation_by_id(invitation.id).await.unwrap().is_none());
    assert!(!storage.is_member(invitee.id, classroom.id).await.unwrap());
}

#[tokio::test]
async fn test_respond_with_other_email_is_rejected() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    seed_user(&storage, "someone@example.com", "Someone").await;
    let classroom = seed_classroom(&storage, owner.id, "INVITE04", vec![]).await;
    let invitation = storage
        .create_invitation_if_absent(owner.id, "invitee@example.com", classroom.id, MemberRole::Student)
        .await
        .unwrap()
        .expect("new invitation");

    let client = FakeCalendarClient::default();
    let result = respond_invitation(
        &storage,
        &client,
        &calendar_config(),
        invitation.id,
        "someone@example.com",
        InvitationAction::Accept,
    )
    .await;

    assert!(matches!(result, Err(ClassroomError::Authorization(_))));
    assert!(storage.get_invitation_by_id(invitation.id).await.unwrap().is_some());
}

#[tokio::test]
async fn test_accept_grants_invited_role() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    let invitee = seed_user(&storage, "invitee@example.com", "Invitee").await;
    let classroom = seed_classroom(&storage, owner.id, "INVITE05", vec![]).await;
    let invitation = storage
        .create_invitation_if_absent(owner.id, "invitee@example.com", classroom.id, MemberRole::CoTeacher)
        .await
        .unwrap()
        .expect("new invitation");

    let client = FakeCalendarClient::default();
    let response = respond_invitation(
        &storage,
        &client,
        &calendar_config(),
        invitation.id,
        "Invitee@Example.com",
        InvitationAction::Accept,
    )
    .await
    .unwrap();

    let member = response.member.expect("membership");
    assert_eq!(member.user_id, invitee.id);
    assert_eq!(member.role, MemberRole::CoTeacher);
    assert!(storage.get_invitation_by_id(invitation.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_concurrent_accepts_create_single_membership() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    let invitee = seed_user(&storage, "invitee@example.com", "Invitee").await;
    let classroom = seed_classroom(&storage, owner.id, "INVITE06", vec![]).await;
    let invitation = storage
        .create_invitation_if_absent(owner.id, "invitee@example.com", classroom.id, MemberRole::Student)
        .await
        .unwrap()
        .expect("new invitation");

    let client = FakeCalendarClient::default();
    let config = calendar_config();
    let (first, second) = tokio::join!(
        respond_invitation(
            &storage,
            &client,
            &config,
            invitation.id,
            "invitee@example.com",
            InvitationAction::Accept,
        ),
        respond_invitation(
            &storage,
            &client,
            &config,
            invitation.id,
            "invitee@example.com",
            InvitationAction::Accept,
        ),
    );

    // 后到的请求可能发现邀请已被删除
    assert!(first.is_ok() || second.is_ok());
    for result in [first, second] {
        if let Err(e) = result {
            assert!(matches!(e, ClassroomError::NotFound(_)));
        }
    }

    let members = storage.list_members(classroom.id).await.unwrap();
    let invitee_rows = members
        .iter()
        .filter(|m| m.member.user_id == invitee.id)
        .count();
    assert_eq!(invitee_rows, 1);
    assert!(storage.get_invitation_by_id(invitation.id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_decline_keeps_existing_membership() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    let invitee = seed_user(&storage, "invitee@example.com", "Invitee").await;
    let classroom = seed_classroom(&storage, owner.id, "INVITE07", vec![]).await;
    storage
        .add_member_if_absent(classroom.id, invitee.id, MemberRole::Student)
        .await
        .unwrap();
    let invitation = storage
        .create_invitation_if_absent(owner.id, "invitee@example.com", classroom.id, MemberRole::CoTeacher)
        .await
        .unwrap()
        .expect("new invitation");
    let before = storage.list_members(classroom.id).await.unwrap().len();

    let client = FakeCalendarClient::default();
    let response = respond_invitation(
        &storage,
        &client,
        &calendar_config(),
        invitation.id,
        "invitee@example.com",
        InvitationAction::Decline,
    )
    .await
    .unwrap();

    assert!(response.member.is_none());
    assert!(response.calendar.is_none());
    assert!(storage.get_invitation_by_id(invitation.id).await.unwrap().is_none());

    let members = storage.list_members(classroom.id).await.unwrap();
    assert_eq!(members.len(), before);
    let row = members
        .iter()
        .find(|m| m.member.user_id == invitee.id)
        .expect("membership");
    assert_eq!(row.member.role, MemberRole::Student);
    assert!(client.events().is_empty());
}

#[tokio::test]
async fn test_accept_without_linked_calendar_reports_unauthorized() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    let invitee = seed_user(&storage, "invitee@example.com", "Invitee").await;
    let classroom = seed_classroom(
        &storage,
        owner.id,
        "INVITE08",
        vec![slot("Monday", "09:00", "10:00")],
    )
    .await;
    let invitation = storage
        .create_invitation_if_absent(owner.id, "invitee@example.com", classroom.id, MemberRole::Student)
        .await
        .unwrap()
        .expect("new invitation");

    let client = FakeCalendarClient::default();
    let response = respond_invitation(
        &storage,
        &client,
        &calendar_config(),
        invitation.id,
        "invitee@example.com",
        InvitationAction::Accept,
    )
    .await
    .unwrap();

    let report = response.calendar.expect("calendar report");
    assert_eq!(report.status, SyncStatus::Unauthorized);
    assert_eq!(report.created, 0);
    assert!(response.member.is_some());
    assert!(storage.is_member(invitee.id, classroom.id).await.unwrap());
    assert!(storage.get_invitation_by_id(invitation.id).await.unwrap().is_none());
    assert!(client.events().is_empty());
}

#[tokio::test]
async fn test_accept_with_unusable_offset_still_completes() {
    let storage = memory_storage().await;
    let owner = seed_user(&storage, "owner@example.com", "Owner").await;
    let invitee = seed_user(&storage, "invitee@example.com", "Invitee").await;
    link_calendar(&storage, invitee.id).await;
    let classroom = seed_classroom(
        &storage,
        owner.id,
        "INVITE09",
        vec![slot("Monday", "09:00", "10:00")],
    )
    .await;
    let invitation = storage
        .create_invitation_if_absent(owner.id, "invitee@example.com", classroom.id, MemberRole::Student)
        .await
        .unwrap()
        .expect("new invitation");

    let config = CalendarConfig {
        utc_offset: "IST".to_string(),
        ..calendar_config()
    };
    let client = FakeCalendarClient::default();
    let response = respond_invitation(
        &storage,
        &client,
        &config,
        invitation.id,
        "invitee@example.com",
        InvitationAction::Accept,
    )
    .await
    .unwrap();

    let report = response.calendar.expect("calendar report");
    assert_eq!(report.status, SyncStatus::Partial);
    assert_eq!(report.failures.len(), 1);
    assert!(storage.is_member(invitee.id, classroom.id).await.unwrap());
    assert!(storage.get_invitation_by_id(invitation.id).await.unwrap().is_none());
    assert!(client.events().is_empty());
}
