//! 外部日历同步
//!
//! 把课堂的每周时间段投影为外部日历中的周期事件。同步是尽力而为的：
//! 单个时间段失败只会让结果降级为 `partial`，不会回滚成员关系。

pub mod client;
pub mod projector;
pub mod sync;

pub use client::{CalendarClient, GoogleCalendarClient};
pub use projector::{first_occurrence, parse_utc_offset, project_slot, weekday_code};
pub use sync::sync_classroom_for_user;

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse};
use serde::Serialize;
use std::sync::Arc;

use crate::models::calendar::entities::CalendarSyncReport;
use crate::models::{ApiResponse, ErrorCode};

/// 从 app_data 中取出日历客户端
pub(crate) fn calendar_client_from_request(request: &HttpRequest) -> Arc<dyn CalendarClient> {
    request
        .app_data::<actix_web::web::Data<Arc<dyn CalendarClient>>>()
        .expect("Calendar client not found in app data")
        .get_ref()
        .clone()
}

/// 同步完全成功时返回 200，否则以 207 返回同样的数据
pub(crate) fn sync_response<T: Serialize>(
    report: &CalendarSyncReport,
    data: T,
    message: &str,
) -> HttpResponse {
    if report.is_success() {
        HttpResponse::Ok().json(ApiResponse::success(data, message))
    } else {
        HttpResponse::build(StatusCode::MULTI_STATUS).json(ApiResponse::error(
            ErrorCode::CalendarSyncPartial,
            data,
            format!("{message}, calendar sync incomplete"),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::calendar::entities::{SlotFailure, SyncStatus};
    use actix_web::body::to_bytes;

    async fn status_and_code(report: &CalendarSyncReport) -> (StatusCode, i64, String) {
        let response = sync_response(report, serde_json::json!({ "id": 7 }), "Joined classroom");
        let status = response.status();
        let body = to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["data"]["id"], 7);
        (
            status,
            json["code"].as_i64().unwrap(),
            json["message"].as_str().unwrap().to_string(),
        )
    }

    #[actix_web::test]
    async fn test_success_report_is_ok() {
        let report = CalendarSyncReport {
            status: SyncStatus::Success,
            created: 2,
            skipped: Vec::new(),
            failures: Vec::new(),
        };

        let (status, code, message) = status_and_code(&report).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(code, ErrorCode::Success as i64);
        assert_eq!(message, "Joined classroom");
    }

    #[actix_web::test]
    async fn test_incomplete_reports_are_multi_status() {
        let partial = CalendarSyncReport {
            status: SyncStatus::Partial,
            created: 1,
            skipped: Vec::new(),
            failures: vec![SlotFailure {
                index: 1,
                day: "Tuesday".to_string(),
                reason: "upstream error".to_string(),
            }],
        };

        for report in [partial, CalendarSyncReport::unauthorized()] {
            let (status, code, message) = status_and_code(&report).await;
            assert_eq!(status, StatusCode::MULTI_STATUS);
            assert_eq!(code, ErrorCode::CalendarSyncPartial as i64);
            assert!(message.ends_with("calendar sync incomplete"));
        }
    }
}
