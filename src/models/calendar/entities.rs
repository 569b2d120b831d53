use serde::{Deserialize, Serialize};

// 用户绑定的外部日历凭据
#[derive(Debug, Clone)]
pub struct CalendarCredential {
    pub user_id: i64,
    pub provider: String,
    pub access_token: String,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl CalendarCredential {
    /// 凭据是否仍可用于调用外部日历
    pub fn is_valid_at(&self, now: chrono::DateTime<chrono::Utc>) -> bool {
        !self.access_token.is_empty() && self.expires_at.is_none_or(|exp| exp > now)
    }
}

// 事件时间点（外部日历 API 格式）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDateTime {
    pub date_time: String,
    pub time_zone: String,
}

// 写入外部日历的周期事件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CalendarEvent {
    pub summary: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub start: EventDateTime,
    pub end: EventDateTime,
    pub recurrence: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SyncStatus {
    Success,
    Partial,
    Unauthorized,
}

// 未生成事件的时间段
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SkippedSlot {
    pub index: usize,
    pub day: String,
    pub reason: String,
}

// 创建事件失败的时间段
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SlotFailure {
    pub index: usize,
    pub day: String,
    pub reason: String,
}

// 一次日历同步的汇总结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalendarSyncReport {
    pub status: SyncStatus,
    pub created: usize,
    pub skipped: Vec<SkippedSlot>,
    pub failures: Vec<SlotFailure>,
}

impl CalendarSyncReport {
    pub fn unauthorized() -> Self {
        Self {
            status: SyncStatus::Unauthorized,
            created: 0,
            skipped: Vec::new(),
            failures: Vec::new(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == SyncStatus::Success
    }
}
