use serde::Deserialize;

use super::entities::MemberRole;

#[derive(Debug, Deserialize)]
pub struct UpdateMemberRoleRequest {
    pub role: MemberRole,
}
