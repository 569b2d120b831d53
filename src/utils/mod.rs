pub mod extractor;
pub mod jwt;
pub mod parameter_error_handler;
pub mod password;
pub mod random_code;
pub mod sql;
pub mod validate;

pub use extractor::{
    SafeClassroomId, SafeFileId, SafeInvitationId, SafePostId, SafeSectionId, SafeSubmissionId,
    SafeUserId, classroom_id_from_path,
};
pub use parameter_error_handler::json_error_handler;
pub use parameter_error_handler::query_error_handler;
pub use random_code::generate_random_code;
pub use sql::escape_like_pattern;
