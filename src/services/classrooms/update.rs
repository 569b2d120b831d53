use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{ClassroomService, validate_classroom_name, validate_time_slots};
use crate::models::classrooms::requests::UpdateClassroomRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn update_classroom(
    service: &ClassroomService,
    request: &HttpRequest,
    classroom_id: i64,
    update_data: UpdateClassroomRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Some(ref name) = update_data.name
        && let Err(msg) = validate_classroom_name(name)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    if let Some(ref slots) = update_data.time_slots
        && let Err(msg) = validate_time_slots(slots)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::BadRequest, msg)));
    }

    // 日期只改一端时与现有的另一端比较
    if update_data.start_date.is_some() || update_data.end_date.is_some() {
        let existing = match storage.get_classroom_by_id(classroom_id).await {
            Ok(Some(classroom)) => classroom,
            Ok(None) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::ClassroomNotFound,
                    "Classroom not found",
                )));
            }
            Err(e) => return Ok(error_response(&e, "Failed to update classroom")),
        };
        let start = update_data.start_date.unwrap_or(existing.start_date);
        let end = update_data.end_date.unwrap_or(existing.end_date);
        if end < start {
            return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
                ErrorCode::BadRequest,
                "end_date must not be earlier than start_date",
            )));
        }
    }

    match storage.update_classroom(classroom_id, update_data).await {
        Ok(Some(classroom)) => {
            info!("Classroom {} updated", classroom_id);
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(classroom, "Classroom updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::ClassroomNotFound,
            "Classroom not found",
        ))),
        Err(e) => {
            tracing::error!("Classroom update failed: {}", e);
            Ok(
                HttpResponse::InternalServerError().json(ApiResponse::error_empty(
                    ErrorCode::ClassroomUpdateFailed,
                    "Classroom update failed",
                )),
            )
        }
    }
}
