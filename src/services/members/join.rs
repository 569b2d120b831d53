use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::MemberService;
use crate::config::CalendarConfig;
use crate::errors::{ClassroomError, Result};
use crate::middlewares::RequireJWT;
use crate::models::classrooms::requests::JoinClassroomRequest;
use crate::models::classrooms::responses::JoinClassroomResponse;
use crate::models::members::entities::MemberRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::calendar::{CalendarClient, sync_classroom_for_user, sync_response};
use crate::services::{error_response, unauthorized_response};
use crate::storage::Storage;

/// 通过课堂码以学生身份加入课堂
///
/// 已是成员时返回 AlreadyMember，且不做任何写入。
pub async fn join_classroom(
    storage: &Arc<dyn Storage>,
    calendar: &dyn CalendarClient,
    calendar_config: &CalendarConfig,
    user_id: i64,
    code: &str,
) -> Result<JoinClassroomResponse> {
    let code = code.trim().to_ascii_uppercase();
    let classroom = storage
        .get_classroom_by_code(&code)
        .await?
        .ok_or_else(|| ClassroomError::not_found("Classroom not found"))?;

    if storage.is_member(user_id, classroom.id).await? {
        return Err(ClassroomError::already_member(
            "You are already a member of this classroom",
        ));
    }

    let (member, created) = storage
        .add_member_if_absent(classroom.id, user_id, MemberRole::Student)
        .await?;
    // 并发加入时另一请求先写入
    if !created {
        return Err(ClassroomError::already_member(
            "You are already a member of this classroom",
        ));
    }

    info!("User {} joined classroom {}", user_id, classroom.id);

    let calendar =
        sync_classroom_for_user(storage, calendar, calendar_config, &classroom, user_id).await;

    Ok(JoinClassroomResponse { member, calendar })
}

pub async fn handle_join_classroom(
    service: &MemberService,
    request: &HttpRequest,
    join_data: JoinClassroomRequest,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(unauthorized_response()),
    };

    let storage = service.get_storage(request);
    let calendar = service.get_calendar_client(request);

    match join_classroom(
        &storage,
        calendar.as_ref(),
        service.get_calendar_config(),
        user_id,
        &join_data.code,
    )
    .await
    {
        Ok(response) => {
            let report = response.calendar.clone();
            Ok(sync_response(&report, response, "Joined classroom"))
        }
        Err(ClassroomError::NotFound(msg)) => Ok(HttpResponse::NotFound()
            .json(ApiResponse::error_empty(ErrorCode::ClassroomCodeInvalid, msg))),
        Err(e) => Ok(error_response(&e, "Failed to join classroom")),
    }
}
