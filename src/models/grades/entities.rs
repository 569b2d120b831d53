use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Grade {
    pub id: i64,
    pub submission_id: i64,
    pub grader_id: i64,
    pub score: f64,
    pub feedback: Option<String>,
    pub graded_at: chrono::DateTime<chrono::Utc>,
}

// 课堂成绩条目（带作业与学生信息）
#[derive(Debug, Clone, Serialize)]
pub struct GradeDetail {
    #[serde(flatten)]
    pub grade: Grade,
    pub post_id: i64,
    pub user_id: i64,
}
