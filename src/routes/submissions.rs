use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireClassRole;
use crate::models::members::entities::MemberRole;
use crate::models::submissions::requests::SubmitRequest;
use crate::services::SubmissionService;
use crate::utils::{SafeClassroomId, SafePostId};

static SUBMISSION_SERVICE: Lazy<SubmissionService> = Lazy::new(SubmissionService::new_lazy);

pub async fn submit(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    post_id: SafePostId,
    submit_data: web::Json<SubmitRequest>,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .submit(&req, classroom_id.0, post_id.0, submit_data.into_inner())
        .await
}

pub async fn list_submissions(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    post_id: SafePostId,
) -> ActixResult<HttpResponse> {
    SUBMISSION_SERVICE
        .list_submissions(&req, classroom_id.0, post_id.0)
        .await
}

pub fn configure_submission_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{classroom_id}/posts/{post_id}/submissions")
            .route(
                web::get()
                    .to(list_submissions)
                    .wrap(RequireClassRole::new_any(MemberRole::all_roles())),
            )
            .route(
                web::post()
                    .to(submit)
                    // 只有学生提交作业
                    .wrap(RequireClassRole::new(&MemberRole::Student)),
            ),
    );
}
