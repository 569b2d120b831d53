use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{PostService, load_post_in_classroom};
use crate::middlewares::RequireClassRole;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, not_member_response};

/// 作者或课堂教师可以删除帖子，评论与提交级联删除
pub async fn delete_post(
    service: &PostService,
    request: &HttpRequest,
    classroom_id: i64,
    post_id: i64,
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
            "You do not have permission to delete this post",
        )));
    }

    match storage.delete_post(post_id).await {
        Ok(_) => {
            info!("Post {} deleted by user {}", post_id, member.user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Post deleted successfully")))
        }
        Err(e) => Ok(error_response(&e, "Failed to delete post")),
    }
}
