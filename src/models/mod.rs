pub mod auth;
pub mod calendar;
pub mod classrooms;
pub mod comments;
pub mod common;
pub mod files;
pub mod grades;
pub mod invitations;
pub mod members;
pub mod posts;
pub mod sections;
pub mod submissions;
pub mod users;

pub use common::{ApiResponse, PaginationInfo, PaginationQuery};

use crate::errors::ClassroomError;

// 应用启动时间，用于计算运行时长
#[derive(Debug, Clone)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

// 业务错误码（写入响应体的 code 字段）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ErrorCode {
    Success = 0,

    // 通用错误
    BadRequest = 1000,
    Unauthorized = 1001,
    Forbidden = 1003,
    NotFound = 1004,
    InternalServerError = 1005,
    ExternalServiceFailed = 1006,

    // 认证 / 用户
    AuthFailed = 2000,
    RegisterFailed = 2001,
    UserNotFound = 2002,
    UserEmailInvalid = 2003,
    UserEmailAlreadyExists = 2004,
    UserPasswordInvalid = 2005,
    UserNameInvalid = 2006,
    UserUpdateFailed = 2007,
    CalendarNotLinked = 2008,

    // 课堂
    ClassroomNotFound = 3000,
    ClassroomCodeInvalid = 3001,
    ClassroomAlreadyJoined = 3002,
    ClassroomPermissionDenied = 3003,
    ClassroomCreationFailed = 3004,
    ClassroomUpdateFailed = 3005,
    ClassroomDeleteFailed = 3006,
    MemberNotFound = 3007,
    CalendarSyncPartial = 3008,

    // 邀请
    InvitationNotFound = 4000,
    InvitationEmailMismatch = 4001,

    // 内容
    SectionNotFound = 5000,
    PostNotFound = 5001,
    CommentNotFound = 5002,
    SubmissionNotFound = 5003,
    SubmissionNotAllowed = 5004,
    GradeScoreInvalid = 5005,

    // 文件
    FileNotFound = 6000,
    FileSizeExceeded = 6001,
    FileUploadFailed = 6002,
}

impl From<&ClassroomError> for ErrorCode {
    fn from(err: &ClassroomError) -> Self {
        match err {
            ClassroomError::Validation(_) | ClassroomError::DateParse(_) => ErrorCode::BadRequest,
            ClassroomError::NotFound(_) => ErrorCode::NotFound,
            ClassroomError::Authentication(_) => ErrorCode::Unauthorized,
            ClassroomError::Authorization(_) => ErrorCode::Forbidden,
            ClassroomError::AlreadyMember(_) => ErrorCode::ClassroomAlreadyJoined,
            ClassroomError::ExternalService(_) => ErrorCode::ExternalServiceFailed,
            _ => ErrorCode::InternalServerError,
        }
    }
}
