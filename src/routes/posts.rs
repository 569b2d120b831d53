use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireClassRole;
use crate::models::members::entities::MemberRole;
use crate::models::posts::requests::{CreatePostRequest, PostListParams, UpdatePostRequest};
use crate::services::PostService;
use crate::utils::{SafeClassroomId, SafePostId};

static POST_SERVICE: Lazy<PostService> = Lazy::new(PostService::new_lazy);

pub async fn list_posts(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    query: web::Query<PostListParams>,
) -> ActixResult<HttpResponse> {
    POST_SERVICE
        .list_posts(&req, classroom_id.0, query.into_inner())
        .await
}

pub async fn create_post(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    post_data: web::Json<CreatePostRequest>,
) -> ActixResult<HttpResponse> {
    POST_SERVICE
        .create_post(&req, classroom_id.0, post_data.into_inner())
        .await
}

pub async fn get_post(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    post_id: SafePostId,
) -> ActixResult<HttpResponse> {
    POST_SERVICE.get_post(&req, classroom_id.0, post_id.0).await
}

pub async fn update_post(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    post_id: SafePostId,
    update_data: web::Json<UpdatePostRequest>,
) -> ActixResult<HttpResponse> {
    POST_SERVICE
        .update_post(&req, classroom_id.0, post_id.0, update_data.into_inner())
        .await
}

pub async fn delete_post(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    post_id: SafePostId,
) -> ActixResult<HttpResponse> {
    POST_SERVICE
        .delete_post(&req, classroom_id.0, post_id.0)
        .await
}

pub fn configure_post_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{classroom_id}/posts")
            .route(
                web::get()
                    .to(list_posts)
                    .wrap(RequireClassRole::new_any(MemberRole::all_roles())),
            )
            .route(
                web::post()
                    .to(create_post)
                    .wrap(RequireClassRole::new_any(MemberRole::teacher_roles())),
            ),
    )
    .service(
        web::resource("/{classroom_id}/posts/{post_id}")
            .route(
                web::get()
                    .to(get_post)
                    .wrap(RequireClassRole::new_any(MemberRole::all_roles())),
            )
            // 作者或教师，在服务中校验
            .route(
                web::put()
                    .to(update_post)
                    .wrap(RequireClassRole::new_any(MemberRole::all_roles())),
            )
            .route(
                web::delete()
                    .to(delete_post)
                    .wrap(RequireClassRole::new_any(MemberRole::all_roles())),
            ),
    );
}
