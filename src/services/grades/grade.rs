use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::{GradeService, validate_score};
use crate::middlewares::RequireJWT;
use crate::models::grades::requests::GradeRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::posts::load_post_in_classroom;
use crate::services::{error_response, unauthorized_response};

pub async fn grade_submission(
    service: &GradeService,
    request: &HttpRequest,
    classroom_id: i64,
    submission_id: i64,
    grade_data: GradeRequest,
) -> ActixResult<HttpResponse> {
    let grader_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(unauthorized_response()),
    };

    let storage = service.get_storage(request);

    let submission = match storage.get_submission_by_id(submission_id).await {
        Ok(Some(submission)) => submission,
        Ok(None) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "Submission not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, "Failed to grade submission")),
    };

    // 提交所属作业必须在当前课堂
    let post = match load_post_in_classroom(&storage, classroom_id, submission.post_id).await {
        Ok(post) => post,
        Err(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SubmissionNotFound,
                "Submission not found",
            )));
        }
    };

    if let Err(msg) = validate_score(grade_data.score, post.max_score) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::GradeScoreInvalid, msg)));
    }

    match storage
        .upsert_grade(submission_id, grader_id, grade_data.score, grade_data.feedback)
        .await
    {
        Ok(grade) => {
            info!(
                "Submission {} graded {} by user {}",
                submission_id, grade.score, grader_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(grade, "Grade saved successfully")))
        }
        Err(e) => Ok(error_response(&e, "Failed to grade submission")),
    }
}
