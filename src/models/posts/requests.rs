use serde::Deserialize;

use super::entities::PostKind;
use crate::models::common::PaginationQuery;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePostRequest {
    pub kind: PostKind,
    pub title: String,
    pub content: Option<String>,
    pub section_id: Option<i64>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub max_score: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdatePostRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub section_id: Option<i64>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub max_score: Option<f64>,
}

// 帖子列表查询参数（来自HTTP请求）
#[derive(Debug, Deserialize)]
pub struct PostListParams {
    #[serde(flatten)]
    pub pagination: PaginationQuery,
    pub kind: Option<PostKind>,
    pub section_id: Option<i64>,
}

// 帖子列表查询参数（用于存储层）
#[derive(Debug, Clone)]
pub struct PostListQuery {
    pub page: Option<i64>,
    pub size: Option<i64>,
    pub kind: Option<PostKind>,
    pub section_id: Option<i64>,
}
