use serde::{Deserialize, Serialize};

// 帖子类型
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PostKind {
    Announcement, // 公告
    Assignment,   // 作业
    Material,     // 资料
}

impl std::fmt::Display for PostKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostKind::Announcement => write!(f, "announcement"),
            PostKind::Assignment => write!(f, "assignment"),
            PostKind::Material => write!(f, "material"),
        }
    }
}

impl std::str::FromStr for PostKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "announcement" => Ok(PostKind::Announcement),
            "assignment" => Ok(PostKind::Assignment),
            "material" => Ok(PostKind::Material),
            _ => Err(format!("Invalid post kind: {s}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Post {
    pub id: i64,
    pub classroom_id: i64,
    pub section_id: Option<i64>,
    pub author_id: i64,
    pub kind: PostKind,
    pub title: String,
    pub content: Option<String>,
    pub due_date: Option<chrono::DateTime<chrono::Utc>>,
    pub max_score: Option<f64>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}
