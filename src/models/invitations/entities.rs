use serde::{Deserialize, Serialize};

use crate::models::members::entities::MemberRole;

// 待处理邀请，接受或拒绝后即删除
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invitation {
    pub id: i64,
    pub sender_id: i64,
    pub receiver_email: String,
    pub classroom_id: i64,
    pub role: MemberRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationAction {
    Accept,
    Decline,
}
