use serde::Serialize;

// 日历绑定状态，不回显令牌
#[derive(Debug, Serialize)]
pub struct CalendarLinkStatus {
    pub linked: bool,
    pub provider: Option<String>,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
    pub expired: bool,
}
