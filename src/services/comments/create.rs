use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CommentService;
use crate::middlewares::RequireJWT;
use crate::models::comments::requests::CreateCommentRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::posts::load_post_in_classroom;
use crate::services::{error_response, unauthorized_response};

pub async fn create_comment(
    service: &CommentService,
    request: &HttpRequest,
    classroom_id: i64,
    post_id: i64,
    comment_data: CreateCommentRequest,
) -> ActixResult<HttpResponse> {
    let author_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(unauthorized_response()),
    };

    let content = comment_data.content.trim();
    if content.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Comment must not be empty",
        )));
    }

    let storage = service.get_storage(request);

    if let Err(resp) = load_post_in_classroom(&storage, classroom_id, post_id).await {
        return Ok(resp);
    }

    match storage.create_comment(post_id, author_id, content).await {
        Ok(comment) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(comment, "Comment created successfully"))),
        Err(e) => Ok(error_response(&e, "Failed to create comment")),
    }
}
