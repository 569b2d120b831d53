use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::MemberService;
use crate::middlewares::RequireClassRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_member_response};

/// 成员可以退出课堂，教师可以移除其他成员，创建者不能被移除
pub async fn remove_member(
    service: &MemberService,
    request: &HttpRequest,
    classroom_id: i64,
    user_id: i64,
) -> ActixResult<HttpResponse> {
    let actor = match RequireClassRole::extract_member(request) {
        Some(member) => member,
        None => return Ok(not_member_response()),
    };

    if actor.user_id != user_id && !actor.role.is_teacher() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ClassroomPermissionDenied,
            "Only teachers can remove other members",
        )));
    }

    let storage = service.get_storage(request);

    match storage.get_classroom_by_id(classroom_id).await {
        Ok(Some(classroom)) if classroom.owner_id == user_id => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::ClassroomPermissionDenied,
                "The classroom owner cannot be removed",
            )));
        }
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassroomNotFound,
                "Classroom not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, "Failed to remove member")),
    }

    match storage.remove_member(classroom_id, user_id).await {
        Ok(true) => {
            info!(
                "User {} removed from classroom {} by {}",
                user_id, classroom_id, actor.user_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Member removed successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MemberNotFound,
            "Member not found",
        ))),
        Err(e) => Ok(error_response(&e, "Failed to remove member")),
    }
}
