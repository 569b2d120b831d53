use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{FileService, classroom_key_prefix};
use crate::config::AppConfig;
use crate::middlewares::RequireJWT;
use crate::models::files::requests::{CreateFileRequest, RegisterFileRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::posts::load_post_in_classroom;
use crate::services::{error_response, unauthorized_response};

pub async fn register_file(
    service: &FileService,
    request: &HttpRequest,
    classroom_id: i64,
    file_data: RegisterFileRequest,
) -> ActixResult<HttpResponse> {
    let uploader_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(unauthorized_response()),
    };

    // 只能登记本课堂前缀下的对象
    if !file_data
        .object_key
        .starts_with(&classroom_key_prefix(classroom_id))
        || file_data.object_key.contains("..")
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Object key does not belong to this classroom",
        )));
    }

    let max_size = AppConfig::get().object_storage.max_size;
    if file_data.size <= 0 || file_data.size > max_size {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::FileSizeExceeded,
            format!("File size must be between 1 and {max_size} bytes"),
        )));
    }

    let storage = service.get_storage(request);

    if let Some(post_id) = file_data.post_id
        && let Err(resp) = load_post_in_classroom(&storage, classroom_id, post_id).await
    {
        return Ok(resp);
    }

    if let Some(submission_id) = file_data.submission_id {
        let submission = match storage.get_submission_by_id(submission_id).await {
            Ok(Some(submission)) if submission.user_id == uploader_id => submission,
            Ok(_) => {
                return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                    ErrorCode::SubmissionNotFound,
                    "Submission not found",
                )));
            }
            Err(e) => return Ok(error_response(&e, "Failed to register file")),
        };
        if let Err(resp) = load_post_in_classroom(&storage, classroom_id, submission.post_id).await
        {
            return Ok(resp);
        }
    }

    let url = service.get_object_store(request).public_url(&file_data.object_key);
    let create_request = CreateFileRequest {
        object_key: file_data.object_key,
        name: file_data.name.trim().to_string(),
        size: file_data.size,
        content_type: file_data.content_type,
        url,
        uploader_id,
        classroom_id,
        post_id: file_data.post_id,
        submission_id: file_data.submission_id,
    };

    match storage.create_file(create_request).await {
        Ok(file) => {
            info!(
                "User {} registered file {} in classroom {}",
                uploader_id, file.id, classroom_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(file, "File registered successfully")))
        }
        Err(e) if e.message().contains("UNIQUE") || e.message().contains("duplicate") => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::FileUploadFailed,
                "File already registered",
            )))
        }
        Err(e) => Ok(error_response(&e, "Failed to register file")),
    }
}
