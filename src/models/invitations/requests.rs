use serde::Deserialize;

use super::entities::InvitationAction;
use crate::models::members::entities::MemberRole;

#[derive(Debug, Clone, Deserialize)]
pub struct InvitationEntry {
    pub email: String,
    pub role: MemberRole,
}

#[derive(Debug, Deserialize)]
pub struct SendInvitationsRequest {
    pub invitations: Vec<InvitationEntry>,
}

#[derive(Debug, Deserialize)]
pub struct RespondInvitationRequest {
    pub action: InvitationAction,
}
