use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::MemberService;
use crate::models::members::requests::UpdateMemberRoleRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn update_member_role(
    service: &MemberService,
    request: &HttpRequest,
    classroom_id: i64,
    user_id: i64,
    update_data: UpdateMemberRoleRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let classroom = match storage.get_classroom_by_id(classroom_id).await {
        Ok(Some(classroom)) => classroom,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassroomNotFound,
                "Classroom not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, "Failed to update member role")),
    };

    // 创建者的角色不可修改
    if classroom.owner_id == user_id {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ClassroomPermissionDenied,
            "The owner's role cannot be changed",
        )));
    }

    match storage
        .update_member_role(classroom_id, user_id, update_data.role)
        .await
    {
        Ok(Some(member)) => {
            info!(
                "Member {} of classroom {} is now {}",
                user_id, classroom_id, member.role
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                member,
                "Member role updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::MemberNotFound,
            "Member not found",
        ))),
        Err(e) => Ok(error_response(&e, "Failed to update member role")),
    }
}
