use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::CommentService;
use crate::models::ApiResponse;
use crate::services::error_response;
use crate::services::posts::load_post_in_classroom;

pub async fn list_comments(
    service: &CommentService,
    request: &HttpRequest,
    classroom_id: i64,
    post_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    if let Err(resp) = load_post_in_classroom(&storage, classroom_id, post_id).await {
        return Ok(resp);
    }

    match storage.list_comments(post_id).await {
        Ok(comments) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(comments, "Comments retrieved successfully"))),
        Err(e) => Ok(error_response(&e, "Failed to list comments")),
    }
}
