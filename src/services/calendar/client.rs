use std::time::Duration;

use crate::config::CalendarConfig;
use crate::errors::{ClassroomError, Result};
use crate::models::calendar::entities::CalendarEvent;

/// 外部日历的最小能力：用访问令牌创建一个事件
#[async_trait::async_trait]
pub trait CalendarClient: Send + Sync {
    async fn create_event(&self, access_token: &str, event: &CalendarEvent) -> Result<()>;
}

/// 兼容 Google Calendar v3 REST API 的客户端
pub struct GoogleCalendarClient {
    http: reqwest::Client,
    api_base_url: String,
    calendar_id: String,
}

impl GoogleCalendarClient {
    pub fn new(config: &CalendarConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()?;

        Ok(Self {
            http,
            api_base_url: config.api_base_url.trim_end_matches('/').to_string(),
            calendar_id: config.calendar_id.clone(),
        })
    }

    fn events_url(&self) -> String {
        format!(
            "{}/calendars/{}/events",
            self.api_base_url, self.calendar_id
        )
    }
}

#[async_trait::async_trait]
impl CalendarClient for GoogleCalendarClient {
    async fn create_event(&self, access_token: &str, event: &CalendarEvent) -> Result<()> {
        let response = self
            .http
            .post(self.events_url())
            .bearer_auth(access_token)
            .json(event)
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(ClassroomError::external_service(format!(
            "Calendar API returned {status}: {body}"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_url_trims_trailing_slash() {
        let client = GoogleCalendarClient::new(&CalendarConfig {
            api_base_url: "https://calendar.example.com/v3/".to_string(),
            calendar_id: "primary".to_string(),
            timeout_ms: 1000,
            utc_offset: "+00:00".to_string(),
            time_zone: "UTC".to_string(),
        })
        .unwrap();

        assert_eq!(
            client.events_url(),
            "https://calendar.example.com/v3/calendars/primary/events"
        );
    }
}
