use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{error, info, warn};

use super::client::CalendarClient;
use super::projector::{parse_utc_offset, project_slot};
use crate::config::CalendarConfig;
use crate::models::calendar::entities::{CalendarSyncReport, SkippedSlot, SlotFailure, SyncStatus};
use crate::models::classrooms::entities::Classroom;
use crate::storage::Storage;

/// 为某个用户同步课堂的所有时间段
///
/// 先投影所有时间段；没有可创建的事件时直接成功，不需要凭据。
/// 否则要求用户有未过期的日历凭据，缺失时整个同步以 `unauthorized` 结束且不发出任何请求。
/// 每个时间段一个请求，并发发出后汇总：全部成功为 `success`，否则为 `partial`。
///
/// 任何内部错误都只会体现在报告中，调用方此时已经写入了成员关系。
pub async fn sync_classroom_for_user(
    storage: &Arc<dyn Storage>,
    client: &dyn CalendarClient,
    config: &CalendarConfig,
    classroom: &Classroom,
    user_id: i64,
) -> CalendarSyncReport {
    let offset = match parse_utc_offset(&config.utc_offset) {
        Ok(offset) => offset,
        Err(e) => {
            error!("Calendar sync of classroom {} aborted: {}", classroom.id, e);
            let slots = classroom
                .time_slots
                .iter()
                .enumerate()
                .map(|(index, slot)| (index, slot.day.clone()));
            return failed_report(slots, Vec::new(), e.message());
        }
    };

    let mut skipped = Vec::new();
    let mut pending = Vec::new();
    for (index, slot) in classroom.time_slots.iter().enumerate() {
        match project_slot(classroom, slot, offset, &config.time_zone) {
            Ok(event) => pending.push((index, slot.day.clone(), event)),
            Err(reason) => skipped.push(SkippedSlot {
                index,
                day: slot.day.clone(),
                reason,
            }),
        }
    }

    if pending.is_empty() {
        return CalendarSyncReport {
            status: SyncStatus::Success,
            created: 0,
            skipped,
            failures: Vec::new(),
        };
    }

    let credential = match storage.get_calendar_credential(user_id).await {
        Ok(Some(credential)) if credential.is_valid_at(chrono::Utc::now()) => credential,
        Ok(_) => {
            info!(
                "User {} has no valid calendar credential, skipping sync of classroom {}",
                user_id, classroom.id
            );
            return CalendarSyncReport {
                skipped,
                ..CalendarSyncReport::unauthorized()
            };
        }
        Err(e) => {
            error!(
                "Failed to load calendar credential of user {}: {}",
                user_id, e
            );
            let slots = pending.into_iter().map(|(index, day, _)| (index, day));
            return failed_report(slots, skipped, "calendar credential lookup failed");
        }
    };

    let results = join_all(
        pending
            .iter()
            .map(|(_, _, event)| client.create_event(&credential.access_token, event)),
    )
    .await;

    let mut created = 0;
    let mut failures = Vec::new();
    for ((index, day, _), result) in pending.into_iter().zip(results) {
        match result {
            Ok(()) => created += 1,
            Err(e) => {
                warn!(
                    "Calendar event for slot {} of classroom {} failed: {}",
                    index, classroom.id, e
                );
                failures.push(SlotFailure {
                    index,
                    day,
                    reason: e.message().to_string(),
                });
            }
        }
    }

    let status = if failures.is_empty() {
        SyncStatus::Success
    } else {
        SyncStatus::Partial
    };

    info!(
        "Calendar sync for user {} in classroom {}: {} created, {} failed, {} skipped",
        user_id,
        classroom.id,
        created,
        failures.len(),
        skipped.len()
    );

    CalendarSyncReport {
        status,
        created,
        skipped,
        failures,
    }
}

/// 未发出任何请求就失败的同步：所有待创建的时间段都记为失败
fn failed_report(
    slots: impl Iterator<Item = (usize, String)>,
    skipped: Vec<SkippedSlot>,
    reason: &str,
) -> CalendarSyncReport {
    let failures: Vec<SlotFailure> = slots
        .map(|(index, day)| SlotFailure {
            index,
            day,
            reason: reason.to_string(),
        })
        .collect();
    let status = if failures.is_empty() {
        SyncStatus::Success
    } else {
        SyncStatus::Partial
    };

    CalendarSyncReport {
        status,
        created: 0,
        skipped,
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sea_orm::{ConnectOptions, ConnectionTrait, Database};
    use std::sync::atomic::{AtomicUsize, Ordering};

    use crate::models::calendar::entities::CalendarEvent;
    use crate::models::classrooms::requests::{CreateClassroomRequest, TimeSlotInput};
    use crate::models::users::requests::CreateUserRequest;
    use crate::storage::SeaOrmStorage;

    #[derive(Default)]
    struct CountingClient {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl CalendarClient for CountingClient {
        async fn create_event(
            &self,
            _access_token: &str,
            _event: &CalendarEvent,
        ) -> crate::errors::Result<()> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    fn config(utc_offset: &str) -> CalendarConfig {
        CalendarConfig {
            api_base_url: "http://calendar.test".to_string(),
            calendar_id: "primary".to_string(),
            timeout_ms: 1000,
            utc_offset: utc_offset.to_string(),
            time_zone: "UTC".to_string(),
        }
    }

    async fn seeded_storage() -> (SeaOrmStorage, Classroom, i64) {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.unwrap();
        let storage = SeaOrmStorage::from_connection(db).await.unwrap();

        let user = storage
            .create_user(CreateUserRequest {
                email: "student@example.com".to_string(),
                name: "Student".to_string(),
                image: None,
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap();
        let classroom = storage
            .create_classroom(
                user.id,
                "SYNC0001",
                CreateClassroomRequest {
                    name: "Sync".to_string(),
                    description: None,
                    image: None,
                    start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    end_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                    time_slots: vec![
                        TimeSlotInput {
                            day: "Monday".to_string(),
                            start_time: "09:00".to_string(),
                            end_time: "10:00".to_string(),
                        },
                        TimeSlotInput {
                            day: "Funday".to_string(),
                            start_time: "09:00".to_string(),
                            end_time: "10:00".to_string(),
                        },
                    ],
                },
            )
            .await
            .unwrap();
        storage
            .upsert_calendar_credential(user.id, "google", "token", None)
            .await
            .unwrap();

        (storage, classroom, user.id)
    }

    #[tokio::test]
    async fn test_invalid_offset_becomes_partial_report() {
        let (storage, classroom, user_id) = seeded_storage().await;
        let storage: Arc<dyn Storage> = Arc::new(storage);
        let client = CountingClient::default();

        let report =
            sync_classroom_for_user(&storage, &client, &config("IST"), &classroom, user_id).await;

        assert_eq!(report.status, SyncStatus::Partial);
        assert_eq!(report.created, 0);
        assert_eq!(report.failures.len(), 2);
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_credential_lookup_error_becomes_partial_report() {
        let (storage, classroom, user_id) = seeded_storage().await;
        storage
            .db
            .execute_unprepared("DROP TABLE calendar_credentials")
            .await
            .unwrap();
        let storage: Arc<dyn Storage> = Arc::new(storage);
        let client = CountingClient::default();

        let report =
            sync_classroom_for_user(&storage, &client, &config("+00:00"), &classroom, user_id)
                .await;

        assert_eq!(report.status, SyncStatus::Partial);
        assert_eq!(report.created, 0);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].day, "Monday");
        assert_eq!(client.calls.load(Ordering::SeqCst), 0);
    }
}
