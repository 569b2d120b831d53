use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::FileService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn get_file(
    service: &FileService,
    request: &HttpRequest,
    classroom_id: i64,
    file_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_file_by_id(file_id).await {
        Ok(Some(file)) if file.classroom_id == classroom_id => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(file, "File retrieved successfully")))
        }
        Ok(_) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::FileNotFound,
            "File not found",
        ))),
        Err(e) => Ok(error_response(&e, "Failed to get file")),
    }
}
