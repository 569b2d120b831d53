use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::{self, RequireClassRole};
use crate::models::classrooms::requests::{
    ClassroomListParams, CreateClassroomRequest, JoinClassroomRequest, UpdateClassroomRequest,
};
use crate::models::members::entities::MemberRole;
use crate::services::{ClassroomService, MemberService};
use crate::utils::SafeClassroomId;

use super::{comments, files, grades, invitations, members, posts, sections, submissions};

// 懒加载的全局 ClassroomService 实例
static CLASSROOM_SERVICE: Lazy<ClassroomService> = Lazy::new(ClassroomService::new_lazy);
static MEMBER_SERVICE: Lazy<MemberService> = Lazy::new(MemberService::new_lazy);

// HTTP处理程序
pub async fn list_classrooms(
    req: HttpRequest,
    query: web::Query<ClassroomListParams>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .list_classrooms(&req, query.into_inner())
        .await
}

pub async fn create_classroom(
    req: HttpRequest,
    classroom_data: web::Json<CreateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .create_classroom(&req, classroom_data.into_inner())
        .await
}

pub async fn join_classroom(
    req: HttpRequest,
    join_data: web::Json<JoinClassroomRequest>,
) -> ActixResult<HttpResponse> {
    MEMBER_SERVICE
        .join_classroom(&req, join_data.into_inner())
        .await
}

pub async fn preview_by_code(
    req: HttpRequest,
    code: web::Path<String>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .preview_by_code(&req, code.into_inner())
        .await
}

pub async fn get_classroom(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE.get_classroom(&req, classroom_id.0).await
}

pub async fn update_classroom(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    update_data: web::Json<UpdateClassroomRequest>,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .update_classroom(&req, classroom_id.0, update_data.into_inner())
        .await
}

pub async fn delete_classroom(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
) -> ActixResult<HttpResponse> {
    CLASSROOM_SERVICE
        .delete_classroom(&req, classroom_id.0)
        .await
}

// 配置路由
pub fn configure_classrooms_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/classrooms")
            .wrap(middlewares::RequireJWT)
            .service(
                // 列出自己所在的课堂；任何登录用户都可以创建课堂
                web::resource("")
                    .route(web::get().to(list_classrooms))
                    .route(web::post().to(create_classroom)),
            )
            // 通过课堂码加入
            .service(web::resource("/join").route(web::post().to(join_classroom)))
            // 加入前通过课堂码预览
            .service(web::resource("/code/{code}").route(web::get().to(preview_by_code)))
            .service(
                web::resource("/{classroom_id}")
                    .route(
                        web::get()
                            .to(get_classroom)
                            .wrap(RequireClassRole::new_any(MemberRole::all_roles())),
                    )
                    .route(
                        web::put()
                            .to(update_classroom)
                            .wrap(RequireClassRole::new_any(MemberRole::teacher_roles())),
                    )
                    .route(
                        web::delete()
                            .to(delete_classroom)
                            // 仅创建者可删除，在服务中校验
                            .wrap(RequireClassRole::new_any(MemberRole::teacher_roles())),
                    ),
            )
            .configure(members::configure_member_routes)
            .configure(invitations::configure_classroom_invitation_routes)
            .configure(sections::configure_section_routes)
            .configure(posts::configure_post_routes)
            .configure(comments::configure_comment_routes)
            .configure(submissions::configure_submission_routes)
            .configure(grades::configure_grade_routes)
            .configure(files::configure_file_routes),
    );
}
