use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireClassRole};
use crate::models::invitations::requests::{RespondInvitationRequest, SendInvitationsRequest};
use crate::models::members::entities::MemberRole;
use crate::services::InvitationService;
use crate::utils::{SafeClassroomId, SafeInvitationId};

// 懒加载的全局 InvitationService 实例
static INVITATION_SERVICE: Lazy<InvitationService> = Lazy::new(InvitationService::new_lazy);

pub async fn send_invitations(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    send_data: web::Json<SendInvitationsRequest>,
) -> ActixResult<HttpResponse> {
    INVITATION_SERVICE
        .send_invitations(&req, classroom_id.0, send_data.into_inner())
        .await
}

pub async fn list_classroom_invitations(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
) -> ActixResult<HttpResponse> {
    INVITATION_SERVICE
        .list_classroom_invitations(&req, classroom_id.0)
        .await
}

pub async fn list_received(req: HttpRequest) -> ActixResult<HttpResponse> {
    INVITATION_SERVICE.list_received(&req).await
}

pub async fn respond_invitation(
    req: HttpRequest,
    invitation_id: SafeInvitationId,
    respond_data: web::Json<RespondInvitationRequest>,
) -> ActixResult<HttpResponse> {
    INVITATION_SERVICE
        .respond_invitation(&req, invitation_id.0, respond_data.into_inner())
        .await
}

pub async fn revoke_invitation(
    req: HttpRequest,
    invitation_id: SafeInvitationId,
) -> ActixResult<HttpResponse> {
    INVITATION_SERVICE
        .revoke_invitation(&req, invitation_id.0)
        .await
}

// 课堂内的邀请管理（挂在 /api/v1/classrooms 之下）
pub fn configure_classroom_invitation_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{classroom_id}/invitations")
            .route(
                web::get()
                    .to(list_classroom_invitations)
                    .wrap(RequireClassRole::new_any(MemberRole::teacher_roles())),
            )
            .route(
                web::post()
                    .to(send_invitations)
                    .wrap(RequireClassRole::new_any(MemberRole::teacher_roles())),
            ),
    );
}

// 收件人视角的邀请路由
pub fn configure_invitations_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/invitations")
            .wrap(middlewares::RequireJWT)
            .service(web::resource("").route(web::get().to(list_received)))
            .service(
                web::resource("/{invitation_id}").route(web::delete().to(revoke_invitation)),
            )
            .service(
                web::resource("/{invitation_id}/respond")
                    .route(web::post().to(respond_invitation)),
            ),
    );
}
