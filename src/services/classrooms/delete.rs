use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::ClassroomService;
use crate::middlewares::RequireJWT;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, unauthorized_response};

/// 只有创建者可以删除课堂，关联数据级联删除
pub async fn delete_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    classroom_id: i64,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(unauthorized_response()),
    };

    let storage = service.get_storage(request);

    match storage.get_classroom_by_id(classroom_id).await {
        Ok(Some(classroom)) if classroom.owner_id != user_id => {
            return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
                ErrorCode::ClassroomPermissionDenied,
                "Only the owner can delete this classroom",
            )));
        }
        Ok(Some(_)) => {}
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassroomNotFound,
                "Classroom not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, "Failed to delete classroom")),
    }

    match storage.delete_classroom(classroom_id).await {
        Ok(true) => {
            info!("Classroom {} deleted by user {}", classroom_id, user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Classroom deleted successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassroomNotFound,
            "Classroom not found",
        ))),
        Err(e) => {
            tracing::error!("Classroom deletion failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassroomDeleteFailed,
                    "Classroom deletion failed",
                )),
            )
        }
    }
}
