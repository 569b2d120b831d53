use serde::Deserialize;

use crate::models::common::PaginationQuery;

// 时间段输入
#[derive(Debug, Clone, Deserialize)]
pub struct TimeSlotInput {
    pub day: String,
    pub start_time: String,
    pub end_time: String,
}

// 课堂创建请求
#[derive(Debug, Clone, Deserialize)]
pub struct CreateClassroomRequest {
    pub name: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub start_date: chrono::NaiveDate,
    pub end_date: chrono::NaiveDate,
    #[serde(default)]
    pub time_slots: Vec<TimeSlotInput>,
}

// 课堂更新请求，time_slots 存在时整体替换
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateClassroomRequest {
    pub name: Option<String>,
    pub description: Option<String>,
    pub image: Option<String>,
    pub start_date: Option<chrono::NaiveDate>,
    pub end_date: Option<chrono::NaiveDate>,
    pub time_slots: Option<Vec<TimeSlotInput>>,
}

// 课堂列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct ClassroomListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub search: Option<String>,
}

// 课堂列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct ClassroomListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub search: Option<String>,
}

// 通过课堂码加入
#[derive(Debug, Deserialize)]
pub struct JoinClassroomRequest {
    pub code: String,
}
