use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireClassRole;
use crate::models::members::entities::MemberRole;
use crate::models::members::requests::UpdateMemberRoleRequest;
use crate::services::MemberService;
use crate::utils::{SafeClassroomId, SafeUserId};

// 懒加载的全局 MemberService 实例
static MEMBER_SERVICE: Lazy<MemberService> = Lazy::new(MemberService::new_lazy);

pub async fn list_members(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
) -> ActixResult<HttpResponse> {
    MEMBER_SERVICE.list_members(&req, classroom_id.0).await
}

pub async fn update_member_role(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    user_id: SafeUserId,
    update_data: web::Json<UpdateMemberRoleRequest>,
) -> ActixResult<HttpResponse> {
    MEMBER_SERVICE
        .update_member_role(&req, classroom_id.0, user_id.0, update_data.into_inner())
        .await
}

pub async fn remove_member(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    user_id: SafeUserId,
) -> ActixResult<HttpResponse> {
    MEMBER_SERVICE
        .remove_member(&req, classroom_id.0, user_id.0)
        .await
}

// 配置路由（挂在 /api/v1/classrooms 之下）
pub fn configure_member_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{classroom_id}/members").route(
            web::get()
                .to(list_members)
                .wrap(RequireClassRole::new_any(MemberRole::all_roles())),
        ),
    )
    .service(
        web::resource("/{classroom_id}/members/{user_id}")
            .route(
                web::put()
                    .to(update_member_role)
                    .wrap(RequireClassRole::new_any(MemberRole::teacher_roles())),
            )
            .route(
                web::delete()
                    .to(remove_member)
                    // 成员可以退出，教师可以移除他人，在服务中区分
                    .wrap(RequireClassRole::new_any(MemberRole::all_roles())),
            ),
    );
}
