use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireClassRole;
use crate::models::grades::requests::GradeRequest;
use crate::models::members::entities::MemberRole;
use crate::services::GradeService;
use crate::utils::{SafeClassroomId, SafeSubmissionId};

static GRADE_SERVICE: Lazy<GradeService> = Lazy::new(GradeService::new_lazy);

pub async fn grade_submission(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    submission_id: SafeSubmissionId,
    grade_data: web::Json<GradeRequest>,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE
        .grade_submission(&req, classroom_id.0, submission_id.0, grade_data.into_inner())
        .await
}

pub async fn list_grades(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
) -> ActixResult<HttpResponse> {
    GRADE_SERVICE.list_grades(&req, classroom_id.0).await
}

pub fn configure_grade_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{classroom_id}/submissions/{submission_id}/grade").route(
            web::put()
                .to(grade_submission)
                .wrap(RequireClassRole::new_any(MemberRole::teacher_roles())),
        ),
    )
    .service(
        web::resource("/{classroom_id}/grades").route(
            web::get()
                .to(list_grades)
                .wrap(RequireClassRole::new_any(MemberRole::all_roles())),
        ),
    );
}
