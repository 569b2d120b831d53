use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::InvitationService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, unauthorized_response};

/// 发送者或课堂教师可以撤回待处理邀请
pub async fn revoke_invitation(
    service: &InvitationService,
    request: &HttpRequest,
    invitation_id: i64,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(unauthorized_response()),
    };

    let storage = service.get_storage(request);

    let invitation = match storage.get_invitation_by_id(invitation_id).await {
        Ok(Some(invitation)) => invitation,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::InvitationNotFound,
                "Invitation not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, "Failed to revoke invitation")),
    };

    if invitation.sender_id != user_id {
        let is_teacher = match storage.get_member(invitation.classroom_id, user_id).await {
            Ok(member) => member.is_some_and(|m| m.role.is_teacher()),
            Err(e) => return Ok(error_response(&e, "Failed to revoke invitation")),
        };
        if !is_teacher {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::ClassroomPermissionDenied,
                "You do not have permission to revoke this invitation",
            )));
        }
    }

    match storage.delete_invitation(invitation_id).await {
        Ok(_) => {
            info!("Invitation {} revoked by user {}", invitation_id, user_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success_empty("Invitation revoked successfully")))
        }
        Err(e) => Ok(error_response(&e, "Failed to revoke invitation")),
    }
}
