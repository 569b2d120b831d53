use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{PostService, check_section_in_classroom, validate_max_score};
use crate::middlewares::RequireJWT;
use crate::models::posts::entities::PostKind;
use crate::models::posts::requests::CreatePostRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, unauthorized_response};

pub async fn create_post(
    service: &PostService,
    request: &HttpRequest,
    classroom_id: i64,
    mut post_data: CreatePostRequest,
) -> ActixResult<HttpResponse> {
    let author_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(unauthorized_response()),
    };

    post_data.title = post_data.title.trim().to_string();
    if post_data.title.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Post title must not be empty",
        )));
    }

    // 只有作业带截止时间与满分
    if post_data.kind != PostKind::Assignment {
        post_data.due_date = None;
        post_data.max_score = None;
    }
    if let Err(msg) = validate_max_score(post_data.max_score) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeScoreInvalid, msg)));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = check_section_in_classroom(&storage, classroom_id, post_data.section_id).await
    {
        return Ok(resp);
    }

    match storage.create_post(classroom_id, author_id, post_data).await {
        Ok(post) => {
            info!(
                "User {} created {} {} in classroom {}",
                author_id, post.kind, post.id, classroom_id
            );
            Ok(HttpResponse::Created().json(ApiResponse::success(post, "Post created successfully")))
        }
        Err(e) => Ok(error_response(&e, "Failed to create post")),
    }
}
