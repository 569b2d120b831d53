use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::middlewares::RequireJWT;
use crate::models::classrooms::responses::ClassroomPreview;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, unauthorized_response};

pub async fn get_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    classroom_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_classroom_by_id(classroom_id).await {
        Ok(Some(classroom)) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            classroom,
            "Classroom retrieved successfully",
        ))),
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassroomNotFound,
            "Classroom not found",
        ))),
        Err(e) => Ok(error_response(&e, "Failed to get classroom")),
    }
}

/// 加入前的预览，只暴露公开信息
pub async fn preview_by_code(
    service: &ClassroomService,
    request: &HttpRequest,
    code: String,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(unauthorized_response()),
    };

    let storage = service.get_storage(request);
    let code = code.trim().to_ascii_uppercase();

    let classroom = match storage.get_classroom_by_code(&code).await {
        Ok(Some(classroom)) => classroom,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::ClassroomCodeInvalid,
                "Classroom not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, "Failed to get classroom")),
    };

    let member_count = match storage.count_members(classroom.id).await {
        Ok(count) => count,
        Err(e) => return Ok(error_response(&e, "Failed to get classroom")),
    };

    let is_member = match storage.is_member(user_id, classroom.id).await {
        Ok(is_member) => is_member,
        Err(e) => return Ok(error_response(&e, "Failed to get classroom")),
    };

    Ok(HttpResponse::Ok().json(ApiResponse::success(
        ClassroomPreview {
            id: classroom.id,
            name: classroom.name,
            description: classroom.description,
            image: classroom.image,
            owner_id: classroom.owner_id,
            member_count,
            is_member,
        },
        "Classroom retrieved successfully",
    )))
}
