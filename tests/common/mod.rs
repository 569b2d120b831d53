#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use sea_orm::{ConnectOptions, Database};

use rust_classroom::config::CalendarConfig;
use rust_classroom::errors::{ClassroomError, Result};
use rust_classroom::models::calendar::entities::CalendarEvent;
use rust_classroom::models::classrooms::entities::Classroom;
use rust_classroom::models::classrooms::requests::{CreateClassroomRequest, TimeSlotInput};
use rust_classroom::models::users::entities::User;
use rust_classroom::models::users::requests::CreateUserRequest;
use rust_classroom::services::calendar::CalendarClient;
use rust_classroom::storage::{SeaOrmStorage, Storage};

/// 单连接的内存 SQLite，迁移已执行
pub async fn memory_storage() -> Arc<dyn Storage> {
    let mut opt = ConnectOptions::new("sqlite::memory:");
    opt.max_connections(1).min_connections(1).sqlx_logging(false);

    let db = Database::connect(opt)
        .await
        .expect("connect in-memory sqlite");
    let storage = SeaOrmStorage::from_connection(db)
        .await
        .expect("run migrations");
    Arc::new(storage)
}

pub fn calendar_config() -> CalendarConfig {
    CalendarConfig {
        api_base_url: "http://calendar.test".to_string(),
        calendar_id: "primary".to_string(),
        timeout_ms: 1000,
        utc_offset: "+05:30".to_string(),
        time_zone: "Asia/Kolkata".to_string(),
    }
}

pub async fn seed_user(storage: &Arc<dyn Storage>, email: &str, name: &str) -> User {
    storage
        .create_user(CreateUserRequest {
            email: email.to_string(),
            name: name.to_string(),
            image: None,
            password_hash: "not-a-real-hash".to_string(),
        })
        .await
        .expect("create user")
}

pub fn slot(day: &str, start: &str, end: &str) -> TimeSlotInput {
    TimeSlotInput {
        day: day.to_string(),
        start_time: start.to_string(),
        end_time: end.to_string(),
    }
}

/// 2024-01-01 (周一) 到 2024-03-01 的课堂
pub async fn seed_classroom(
    storage: &Arc<dyn Storage>,
    owner_id: i64,
    code: &str,
    time_slots: Vec<TimeSlotInput>,
) -> Classroom {
    storage
        .create_classroom(
            owner_id,
            code,
            CreateClassroomRequest {
                name: "Algorithms".to_string(),
                description: Some("Weekly lecture".to_string()),
                image: None,
                start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).expect("valid date"),
                end_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).expect("valid date"),
                time_slots,
            },
        )
        .await
        .expect("create classroom")
}

pub async fn link_calendar(storage: &Arc<dyn Storage>, user_id: i64) {
    storage
        .upsert_calendar_credential(user_id, "google", "access-token", None)
        .await
        .expect("link calendar");
}

/// 记录所有请求的日历客户端，BYDAY 命中 `failing_days` 的事件返回错误
#[derive(Default)]
pub struct FakeCalendarClient {
    pub failing_days: Vec<&'static str>,
    pub created: Mutex<Vec<CalendarEvent>>,
}

impl FakeCalendarClient {
    pub fn failing_on(days: &[&'static str]) -> Self {
        Self {
            failing_days: days.to_vec(),
            created: Mutex::new(Vec::new()),
        }
    }

    pub fn events(&self) -> Vec<CalendarEvent> {
        self.created.lock().expect("fake client lock").clone()
    }
}

#[async_trait]
impl CalendarClient for FakeCalendarClient {
    async fn create_event(&self, access_token: &str, event: &CalendarEvent) -> Result<()> {
        assert_eq!(access_token, "access-token");
        let rule = event.recurrence.join(";");
        if self
            .failing_days
            .iter()
            .any(|code| rule.contains(&format!("BYDAY={code};")))
        {
            return Err(ClassroomError::external_service("calendar rejected event"));
        }
        self.created
            .lock()
            .expect("fake client lock")
            .push(event.clone());
        Ok(())
    }
}
