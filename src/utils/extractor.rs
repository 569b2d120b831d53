//! 路径参数安全提取器
//!
//! 从路由的 match_info 中读取指定参数并解析为正整数 ID，
//! 解析失败时直接返回带统一响应体的 400，而不是 actix 默认的纯文本错误。

/// 定义一个从路径参数中提取正整数 ID 的提取器
#[macro_export]
macro_rules! define_safe_i64_extractor {
    ($name:ident, $param:literal) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq)]
        pub struct $name(pub i64);

        impl actix_web::FromRequest for $name {
            type Error = actix_web::Error;
            type Future = futures_util::future::Ready<Result<Self, Self::Error>>;

            fn from_request(
                req: &actix_web::HttpRequest,
                _payload: &mut actix_web::dev::Payload,
            ) -> Self::Future {
                let parsed = req
                    .match_info()
                    .get($param)
                    .and_then(|raw| raw.parse::<i64>().ok())
                    .filter(|id| *id > 0);

                futures_util::future::ready(match parsed {
                    Some(id) => Ok($name(id)),
                    None => {
                        let response = actix_web::HttpResponse::BadRequest().json(
                            $crate::models::ApiResponse::error_empty(
                                $crate::models::ErrorCode::BadRequest,
                                concat!("Invalid path parameter: ", $param),
                            ),
                        );
                        Err(actix_web::error::InternalError::from_response(
                            concat!("invalid ", $param),
                            response,
                        )
                        .into())
                    }
                })
            }
        }
    };
}

define_safe_i64_extractor!(SafeClassroomId, "classroom_id");
define_safe_i64_extractor!(SafeUserId, "user_id");
define_safe_i64_extractor!(SafeInvitationId, "invitation_id");
define_safe_i64_extractor!(SafeSectionId, "section_id");
define_safe_i64_extractor!(SafePostId, "post_id");
define_safe_i64_extractor!(SafeSubmissionId, "submission_id");
define_safe_i64_extractor!(SafeFileId, "file_id");

/// 从请求路径中读取课堂 ID（供中间件使用）
pub fn classroom_id_from_path(req: &actix_web::HttpRequest) -> Option<i64> {
    req.match_info()
        .get("classroom_id")
        .and_then(|raw| raw.parse::<i64>().ok())
        .filter(|id| *id > 0)
}
