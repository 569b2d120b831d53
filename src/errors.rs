//! 统一错误处理模块
//!
//! 使用宏自动生成错误类型，支持错误代码、类型名称以及对应的 HTTP 状态码。

use std::fmt;

use actix_web::http::StatusCode;

/// 定义错误类型的宏
///
/// 自动生成：
/// - enum 定义
/// - code() 方法 - 返回错误代码
/// - error_type() 方法 - 返回错误类型名称
/// - status_code() 方法 - 返回对应的 HTTP 状态码
/// - message() 方法 - 返回错误详情
/// - 便捷构造函数
macro_rules! define_classroom_errors {
    ($(
        $variant:ident($code:literal, $type_name:literal, $status:ident)
    ),* $(,)?) => {
        #[derive(Debug, Clone)]
        pub enum ClassroomError {
            $($variant(String),)*
        }

        impl ClassroomError {
            /// 获取错误代码
            pub fn code(&self) -> &'static str {
                match self {
                    $(ClassroomError::$variant(_) => $code,)*
                }
            }

            /// 获取错误类型名称
            pub fn error_type(&self) -> &'static str {
                match self {
                    $(ClassroomError::$variant(_) => $type_name,)*
                }
            }

            /// 获取对应的 HTTP 状态码
            pub fn status_code(&self) -> StatusCode {
                match self {
                    $(ClassroomError::$variant(_) => StatusCode::$status,)*
                }
            }

            /// 获取错误详情
            pub fn message(&self) -> &str {
                match self {
                    $(ClassroomError::$variant(msg) => msg,)*
                }
            }
        }

        // 生成便捷构造函数
        paste::paste! {
            impl ClassroomError {
                $(
                    pub fn [<$variant:snake>]<T: Into<String>>(msg: T) -> Self {
                        ClassroomError::$variant(msg.into())
                    }
                )*
            }
        }
    };
}

define_classroom_errors! {
    CacheConnection("E001", "Cache Connection Error", INTERNAL_SERVER_ERROR),
    CachePluginNotFound("E002", "Cache Plugin Not Found", INTERNAL_SERVER_ERROR),
    DatabaseConfig("E003", "Database Configuration Error", INTERNAL_SERVER_ERROR),
    DatabaseConnection("E004", "Database Connection Error", INTERNAL_SERVER_ERROR),
    DatabaseOperation("E005", "Database Operation Error", INTERNAL_SERVER_ERROR),
    Validation("E006", "Validation Error", BAD_REQUEST),
    NotFound("E007", "Resource Not Found", NOT_FOUND),
    Serialization("E008", "Serialization Error", INTERNAL_SERVER_ERROR),
    DateParse("E009", "Date Parse Error", BAD_REQUEST),
    Authentication("E010", "Authentication Error", UNAUTHORIZED),
    Authorization("E011", "Authorization Error", FORBIDDEN),
    AlreadyMember("E012", "Already A Member", BAD_REQUEST),
    ExternalService("E013", "External Service Error", BAD_GATEWAY),
}

impl ClassroomError {
    /// 是否属于需要记录详细日志并对调用方隐藏细节的内部错误
    pub fn is_unexpected(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for ClassroomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for ClassroomError {}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for ClassroomError {
    fn from(err: sea_orm::DbErr) -> Self {
        ClassroomError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for ClassroomError {
    fn from(err: serde_json::Error) -> Self {
        ClassroomError::Serialization(err.to_string())
    }
}

impl From<chrono::ParseError> for ClassroomError {
    fn from(err: chrono::ParseError) -> Self {
        ClassroomError::DateParse(err.to_string())
    }
}

impl From<reqwest::Error> for ClassroomError {
    fn from(err: reqwest::Error) -> Self {
        ClassroomError::ExternalService(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, ClassroomError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ClassroomError::cache_connection("test").code(), "E001");
        assert_eq!(ClassroomError::database_config("test").code(), "E003");
        assert_eq!(ClassroomError::validation("test").code(), "E006");
        assert_eq!(ClassroomError::authentication("test").code(), "E010");
    }

    #[test]
    fn test_error_types() {
        assert_eq!(
            ClassroomError::already_member("test").error_type(),
            "Already A Member"
        );
        assert_eq!(
            ClassroomError::validation("test").error_type(),
            "Validation Error"
        );
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ClassroomError::not_found("x").status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ClassroomError::authorization("x").status_code(),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            ClassroomError::already_member("x").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert!(ClassroomError::database_operation("x").is_unexpected());
        assert!(!ClassroomError::validation("x").is_unexpected());
    }

    #[test]
    fn test_format_simple() {
        let err = ClassroomError::validation("Invalid URL");
        let formatted = err.format_simple();
        assert!(formatted.contains("Validation Error"));
        assert!(formatted.contains("Invalid URL"));
    }
}
