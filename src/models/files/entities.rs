use serde::{Deserialize, Serialize};

// 对象存储中文件的元数据
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct File {
    pub id: i64,
    pub object_key: String,
    pub name: String,
    pub size: i64,
    pub content_type: String,
    pub url: String,
    pub uploader_id: i64,
    pub classroom_id: i64,
    pub post_id: Option<i64>,
    pub submission_id: Option<i64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
