pub mod auth;
pub mod calendar;
pub mod classrooms;
pub mod comments;
pub mod files;
pub mod grades;
pub mod invitations;
pub mod members;
pub mod posts;
pub mod sections;
pub mod submissions;
pub mod users;

pub use auth::AuthService;
pub use classrooms::ClassroomService;
pub use comments::CommentService;
pub use files::FileService;
pub use grades::GradeService;
pub use invitations::InvitationService;
pub use members::MemberService;
pub use posts::PostService;
pub use sections::SectionService;
pub use submissions::SubmissionService;
pub use users::UserService;

use actix_web::HttpResponse;

use crate::errors::ClassroomError;
use crate::models::{ApiResponse, ErrorCode};

/// 把业务错误转换为统一响应
///
/// 5xx 错误记录详细日志，只向调用方返回 `context`。
pub(crate) fn error_response(err: &ClassroomError, context: &str) -> HttpResponse {
    let status = err.status_code();
    let code = ErrorCode::from(err);
    if err.is_unexpected() {
        tracing::error!("{}: {}", context, err);
        HttpResponse::build(status).json(ApiResponse::error_empty(code, context))
    } else {
        HttpResponse::build(status).json(ApiResponse::error_empty(code, err.message()))
    }
}

/// 请求中缺少当前用户时的 401 响应
pub(crate) fn unauthorized_response() -> HttpResponse {
    HttpResponse::Unauthorized().json(ApiResponse::error_empty(
        ErrorCode::Unauthorized,
        "Unauthorized: missing user",
    ))
}

/// 请求中缺少成员关系时的 403 响应
pub(crate) fn not_member_response() -> HttpResponse {
    HttpResponse::Forbidden().json(ApiResponse::error_empty(
        ErrorCode::ClassroomPermissionDenied,
        "You are not a member of this classroom",
    ))
}
