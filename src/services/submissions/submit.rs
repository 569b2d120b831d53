use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::SubmissionService;
use crate::middlewares::RequireClassRole;
use crate::models::posts::entities::PostKind;
use crate::models::submissions::requests::SubmitRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::posts::load_post_in_classroom;
use crate::services::{error_response, not_member_response};

pub async fn submit(
    service: &SubmissionService,
    request: &HttpRequest,
    classroom_id: i64,
    post_id: i64,
    submit_data: SubmitRequest,
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

    if post.kind != PostKind::Assignment {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SubmissionNotAllowed,
            "Submissions are only accepted for assignments",
        )));
    }

    match storage
        .upsert_submission(post_id, member.user_id, submit_data.content)
        .await
    {
        Ok(submission) => {
            info!(
                "User {} submitted assignment {} (submission {})",
                member.user_id, post_id, submission.id
            );
            Ok(HttpResponse::Ok()
                .json(ApiResponse::success(submission, "Submission saved successfully")))
        }
        Err(e) => Ok(error_response(&e, "Failed to save submission")),
    }
}
