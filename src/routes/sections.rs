use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireClassRole;
use crate::models::members::entities::MemberRole;
use crate::models::sections::requests::CreateSectionRequest;
use crate::services::SectionService;
use crate::utils::{SafeClassroomId, SafeSectionId};

static SECTION_SERVICE: Lazy<SectionService> = Lazy::new(SectionService::new_lazy);

pub async fn list_sections(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE.list_sections(&req, classroom_id.0).await
}

pub async fn create_section(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    section_data: web::Json<CreateSectionRequest>,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE
        .create_section(&req, classroom_id.0, section_data.into_inner())
        .await
}

pub async fn delete_section(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    section_id: SafeSectionId,
) -> ActixResult<HttpResponse> {
    SECTION_SERVICE
        .delete_section(&req, classroom_id.0, section_id.0)
        .await
}

pub fn configure_section_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{classroom_id}/sections")
            .route(
                web::get()
                    .to(list_sections)
                    .wrap(RequireClassRole::new_any(MemberRole::all_roles())),
            )
            .route(
                web::post()
                    .to(create_section)
                    .wrap(RequireClassRole::new_any(MemberRole::teacher_roles())),
            ),
    )
    .service(
        web::resource("/{classroom_id}/sections/{section_id}").route(
            web::delete()
                .to(delete_section)
                .wrap(RequireClassRole::new_any(MemberRole::teacher_roles())),
        ),
    );
}
