use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PostService, check_section_in_classroom, load_post_in_classroom, validate_max_score};
use crate::middlewares::RequireClassRole;
use crate::models::posts::requests::UpdatePostRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_member_response};

/// 作者或课堂教师可以修改帖子
pub async fn update_post(
    service: &PostService,
    request: &HttpRequest,
    classroom_id: i64,
    post_id: i64,
    update_data: UpdatePostRequest,
) -> ActixResult<HttpResponse> {
    let member = match RequireClassRole::extract_member(request) {
        Some(member) => member,
        None => return Ok(not_member_response()),
    };

    let storage = service.get_storage(request);

    let post = match load_post_in_classroom(&storage, classroom_id, post_id).await {
        Ok(post) => post,
        Err(resp) => return Ok(resp),
    };

    if post.author_id != member.user_id && !member.role.is_teacher() {
        return Ok(HttpResponse::Forbidden().json(ApiResponse::error_empty(
            ErrorCode::ClassroomPermissionDenied,
            "You do not have permission to modify this post",
        )));
    }

    if let Some(ref title) = update_data.title
        && title.trim().is_empty()
    {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Post title must not be empty",
        )));
    }

    if let Err(msg) = validate_max_score(update_data.max_score) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeScoreInvalid, msg)));
    }

    if let Err(resp) =
        check_section_in_classroom(&storage, classroom_id, update_data.section_id).await
    {
        return Ok(resp);
    }

    match storage.update_post(post_id, update_data).await {
        Ok(Some(post)) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(post, "Post updated successfully")))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PostNotFound,
            "Post not found",
        ))),
        Err(e) => Ok(error_response(&e, "Failed to update post")),
    }
}
