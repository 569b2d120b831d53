use serde::Serialize;

use super::entities::{Invitation, InvitationAction};
use crate::models::{
    calendar::entities::CalendarSyncReport, members::entities::ClassroomMember,
};

// 单个邀请的发送结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SendOutcome {
    Sent,
    AlreadyInvited,
    AlreadyMember,
    InvalidEmail,
    Failed,
}

#[derive(Debug, Clone, Serialize)]
pub struct SendResult {
    pub email: String,
    pub outcome: SendOutcome,
}

#[derive(Debug, Serialize)]
pub struct SendInvitationsResponse {
    pub results: Vec<SendResult>,
}

#[derive(Debug, Serialize)]
pub struct RespondInvitationResponse {
    pub action: InvitationAction,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member: Option<ClassroomMember>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calendar: Option<CalendarSyncReport>,
}

#[derive(Debug, Serialize)]
pub struct InvitationListResponse {
    pub items: Vec<Invitation>,
}
