use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use uuid::Uuid;

use super::{FileService, classroom_key_prefix, sanitize_file_name};
use crate::config::AppConfig;
use crate::models::files::requests::UploadUrlRequest;
use crate::models::files::responses::UploadUrlResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn create_upload_url(
    service: &FileService,
    request: &HttpRequest,
    classroom_id: i64,
    upload_data: UploadUrlRequest,
) -> ActixResult<HttpResponse> {
    let max_size = AppConfig::get().object_storage.max_size;

    if upload_data.size <= 0 || upload_data.size > max_size {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileSizeExceeded,
            format!("File size must be between 1 and {max_size} bytes"),
        )));
    }

    if upload_data.content_type.trim().is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "content_type must not be empty",
        )));
    }

    let object_key = format!(
        "{}{}/{}",
        classroom_key_prefix(classroom_id),
        Uuid::new_v4(),
        sanitize_file_name(&upload_data.file_name)
    );

    let object_store = service.get_object_store(request);
    match object_store.presign_put(&object_key, upload_data.content_type.trim()) {
        Ok(presigned) => {
            let response = UploadUrlResponse {
                public_url: object_store.public_url(&object_key),
                object_key,
                upload_url: presigned.url,
                expires_at: presigned.expires_at,
            };
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(response, "Upload URL created successfully")))
        }
        Err(e) => Ok(error_response(&e, "Failed to create upload URL")),
    }
}
