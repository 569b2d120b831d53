use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use crate::middlewares::RequireJWT;
use crate::middlewares::require_jwt::{bearer_token, user_cache_key};
use crate::models::auth::responses::UserInfoResponse;
use crate::models::users::requests::{UpdateProfileRequest, UpdateUserRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;
use crate::utils::password::hash_password;
use crate::utils::validate::{validate_display_name, validate_password};

use super::AuthService;

pub async fn handle_update_profile(
    service: &AuthService,
    update_data: UpdateProfileRequest,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let current_user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => {
            return Ok(HttpResponse::Unauthorized().json(ApiResponse::error_empty(
                ErrorCode::Unauthorized,
                "Unauthorized access, please login",
            )));
        }
    };

    if let Some(ref name) = update_data.name
        && let Err(msg) = validate_display_name(name)
    {
        return Ok(HttpResponse::BadRequest()
            .json(ApiResponse::error_empty(ErrorCode::UserNameInvalid, msg)));
    }

    // 处理密码（如果提供了新密码）
    let password_hash = if let Some(ref password) = update_data.password {
        if let Err(msg) = validate_password(password) {
            return Ok(HttpResponse::BadRequest()
                .json(ApiResponse::error_empty(ErrorCode::UserPasswordInvalid, msg)));
        }

        match hash_password(password) {
            Ok(hash) => Some(hash),
            Err(e) => return Ok(error_response(&e, "Failed to update profile")),
        }
    } else {
        None
    };

    let storage_update = UpdateUserRequest {
        name: update_data.name.map(|n| n.trim().to_string()),
        image: update_data.image,
        password_hash,
    };

    match storage.update_user(current_user.id, storage_update).await {
        Ok(Some(user)) => {
            // 缓存的用户信息已过期
            if let (Some(cache), Some(token)) = (service.get_cache(request), bearer_token(request))
            {
                cache.remove(&user_cache_key(&token)).await;
            }

            Ok(HttpResponse::Ok().json(ApiResponse::success(
                UserInfoResponse { user },
                "Profile updated successfully",
            )))
        }
        Ok(None) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::UserNotFound,
            "User not found",
        ))),
        Err(e) => Ok(error_response(&e, "Failed to update profile")),
    }
}
