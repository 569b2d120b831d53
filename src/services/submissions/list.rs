use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SubmissionService;
use crate::middlewares::RequireClassRole;
use crate::models::ApiResponse;
use crate::services::posts::load_post_in_classroom;
use crate::services::{error_response, not_member_response};

pub async fn list_submissions(
    service: &SubmissionService,
    request: &HttpRequest,
    classroom_id: i64,
    post_id: i64,
) -> ActixResult<HttpResponse> {
    let member = match RequireClassRole::extract_member(request) {
        Some(member) => member,
        None => return Ok(not_member_response()),
    };

    let storage = service.get_storage(request);

    if let Err(resp) = load_post_in_classroom(&storage, classroom_id, post_id).await {
        return Ok(resp);
    }

    let only_user = (!member.role.is_teacher()).then_some(member.user_id);

    match storage.list_submissions(post_id, only_user).await {
        Ok(submissions) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            submissions,
            "Submissions retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, "Failed to list submissions")),
    }
}
