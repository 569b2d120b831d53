use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ClassroomService, validate_classroom_name, validate_time_slots};
use crate::errors::{ClassroomError, Result};
use crate::middlewares::RequireJWT;
use crate::models::classrooms::requests::CreateClassroomRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, unauthorized_response};
use crate::storage::Storage;
use crate::utils::generate_random_code;

const CODE_LENGTH: usize = 8;
const CODE_ATTEMPTS: usize = 5;

/// 生成一个尚未被使用的课堂码
pub(crate) async fn generate_unique_code(storage: &Arc<dyn Storage>) -> Result<String> {
    for _ in 0..CODE_ATTEMPTS {
        let code = generate_random_code(CODE_LENGTH);
        if !storage.classroom_code_exists(&code).await? {
            return Ok(code);
        }
    }
    Err(ClassroomError::database_operation(
        "Failed to generate a unique classroom code",
    ))
}

pub async fn create_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    classroom_data: CreateClassroomRequest,
) -> ActixResult<HttpResponse> {
    let owner_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(unauthorized_response()),
    };

    if let Err(msg) = validate_classroom_name(&classroom_data.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    if classroom_data.end_date < classroom_data.start_date {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "end_date must not be earlier than start_date",
        )));
    }

    if let Err(msg) = validate_time_slots(&classroom_data.time_slots) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    let storage = service.get_storage(request);

    let code = match generate_unique_code(&storage).await {
        Ok(code) => code,
        Err(e) => return Ok(error_response(&e, "Classroom creation failed")),
    };

    // 课堂、时间段和创建者的教师成员关系在同一事务中写入
    match storage.create_classroom(owner_id, &code, classroom_data).await {
        Ok(classroom) => {
            info!(
                "Classroom {} ({}) created by user {}",
                classroom.id, classroom.name, owner_id
            );
            Ok(HttpResponse::Created()
                .json(ApiResponse::success(classroom, "Classroom created successfully")))
        }
        Err(e) => {
            tracing::error!("Classroom creation failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassroomCreationFailed,
                    "Classroom creation failed",
                )),
            )
        }
    }
}
