use serde::Deserialize;

// 绑定外部日历
#[derive(Debug, Deserialize)]
pub struct LinkCalendarRequest {
    pub access_token: String,
    pub expires_at: Option<chrono::DateTime<chrono::Utc>>,
    pub provider: Option<String>,
}
