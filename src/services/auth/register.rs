use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::models::{
    ApiResponse, ErrorCode, auth::requests::RegisterRequest, users::requests::CreateUserRequest,
};
use crate::services::error_response;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_display_name, validate_email, validate_password};

use super::AuthService;

pub async fn handle_register(
    service: &AuthService,
    register_request: RegisterRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    let email = register_request.email.trim().to_lowercase();

    // 1. 校验输入
    if let Err(msg) = validate_email(&email) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserEmailInvalid, msg)));
    }

    if let Err(msg) = validate_display_name(&register_request.name) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    if let Err(msg) = validate_password(&register_request.password) {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
    }

    // 2. 检查邮箱是否已存在
    match storage.get_user_by_email(&email).await {
        Ok(Some(_)) => {
            return Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserEmailAlreadyExists,
                "Email already exists",
            )));
        }
        Ok(None) => {}
        Err(e) => return Ok(error_response(&e, "Register failed")),
    }

    // 3. 哈希密码
    let password_hash = match hash_password(&register_request.password) {
        Ok(hash) => hash,
        Err(e) => return Ok(error_response(&e, "Register failed")),
    };

    // 4. 创建用户
    let create_request = CreateUserRequest {
        email,
        name: register_request.name.trim().to_string(),
        image: register_request.image,
        password_hash,
    };

    match storage.create_user(create_request).await {
        Ok(user) => {
            tracing::info!("User {} registered", user.email);
            Ok(HttpResponse::Created().json(ApiResponse::success(user, "Register successful")))
        }
        // 并发注册同一邮箱时由唯一索引拦截
        Err(e) if e.message().contains("UNIQUE") || e.message().contains("duplicate") => {
            Ok(HttpResponse::Conflict().json(ApiResponse::error_empty(
                ErrorCode::UserEmailAlreadyExists,
                "Email already exists",
            )))
        }
        Err(e) => Ok(error_response(&e, "Register failed")),
    }
}
