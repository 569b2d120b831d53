use serde::{Deserialize, Serialize};

// 作业提交，同一学生对同一作业只有一份，重复提交覆盖
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Submission {
    pub id: i64,
    pub post_id: i64,
    pub user_id: i64,
    pub content: Option<String>,
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
