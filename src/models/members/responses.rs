use serde::Serialize;

use super::entities::ClassroomMember;

// 成员详情（附带用户公开资料）
#[derive(Debug, Clone, Serialize)]
pub struct MemberDetail {
    #[serde(flatten)]
    pub member: ClassroomMember,
    pub name: String,
    pub email: String,
    pub image: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MemberListResponse {
    pub items: Vec<MemberDetail>,
}
