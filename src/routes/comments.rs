use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireClassRole;
use crate::models::comments::requests::CreateCommentRequest;
use crate::models::members::entities::MemberRole;
use crate::services::CommentService;
use crate::utils::{SafeClassroomId, SafePostId};

static COMMENT_SERVICE: Lazy<CommentService> = Lazy::new(CommentService::new_lazy);

pub async fn list_comments(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    post_id: SafePostId,
) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE
        .list_comments(&req, classroom_id.0, post_id.0)
        .await
}

pub async fn create_comment(
    req: HttpRequest,
    classroom_id: SafeClassroomId,
    post_id: SafePostId,
    comment_data: web::Json<CreateCommentRequest>,
) -> ActixResult<HttpResponse> {
    COMMENT_SERVICE
        .create_comment(&req, classroom_id.0, post_id.0, comment_data.into_inner())
        .await
}

pub fn configure_comment_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{classroom_id}/posts/{post_id}/comments")
            .route(
                web::get()
                    .to(list_comments)
                    .wrap(RequireClassRole::new_any(MemberRole::all_roles())),
            )
            .route(
                web::post()
                    .to(create_comment)
                    .wrap(RequireClassRole::new_any(MemberRole::all_roles())),
            ),
    );
}
