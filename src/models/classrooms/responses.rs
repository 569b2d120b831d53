use serde::Serialize;

use super::entities::Classroom;
use crate::models::{
    PaginationInfo, calendar::entities::CalendarSyncReport, members::entities::ClassroomMember,
};

#[derive(Debug, Serialize)]
pub struct ClassroomListResponse {
    pub pagination: PaginationInfo,
    pub items: Vec<Classroom>,
}

// 通过课堂码预览课堂（加入前）
#[derive(Debug, Serialize)]
pub struct ClassroomPreview {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub owner_id: i64,
    pub member_count: i64,
    pub is_member: bool,
}

// 加入课堂结果
#[derive(Debug, Serialize)]
pub struct JoinClassroomResponse {
    pub member: ClassroomMember,
    pub calendar: CalendarSyncReport,
}
