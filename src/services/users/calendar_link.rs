use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::UserService;
use crate::middlewares::RequireJWT;
use crate::models::calendar::entities::CalendarCredential;
use crate::models::calendar::requests::LinkCalendarRequest;
use crate::models::calendar::responses::CalendarLinkStatus;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::{error_response, unauthorized_response};

const DEFAULT_PROVIDER: &str = "google";

fn link_status(credential: Option<&CalendarCredential>) -> CalendarLinkStatus {
    match credential {
        Some(credential) => CalendarLinkStatus {
            linked: true,
            provider: Some(credential.provider.clone()),
            expires_at: credential.expires_at,
            expired: !credential.is_valid_at(chrono::Utc::now()),
        },
        None => CalendarLinkStatus {
            linked: false,
            provider: None,
            expires_at: None,
            expired: false,
        },
    }
}

pub async fn link_calendar(
    service: &UserService,
    request: &HttpRequest,
    link_data: LinkCalendarRequest,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(unauthorized_response()),
    };

    let access_token = link_data.access_token.trim();
    if access_token.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "access_token must not be empty",
        )));
    }

    let provider = link_data
        .provider
        .as_deref()
        .map(str::trim)
        .filter(|p| !p.is_empty())
        .unwrap_or(DEFAULT_PROVIDER);

    let storage = service.get_storage(request);
    match storage
        .upsert_calendar_credential(user_id, provider, access_token, link_data.expires_at)
        .await
    {
        Ok(credential) => {
            info!("User {} linked {} calendar", user_id, credential.provider);
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                link_status(Some(&credential)),
                "Calendar linked successfully",
            )))
        }
        Err(e) => Ok(error_response(&e, "Failed to link calendar")),
    }
}

pub async fn get_calendar_link(
    service: &UserService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(unauthorized_response()),
    };

    let storage = service.get_storage(request);
    match storage.get_calendar_credential(user_id).await {
        Ok(credential) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            link_status(credential.as_ref()),
            "Calendar link status retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, "Failed to get calendar link")),
    }
}

pub async fn unlink_calendar(
    service: &UserService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(unauthorized_response()),
    };

    let storage = service.get_storage(request);
    match storage.delete_calendar_credential(user_id).await {
        Ok(true) => {
            info!("User {} unlinked calendar", user_id);
            Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Calendar unlinked successfully")))
        }
        Ok(false) => Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::CalendarNotLinked,
            "No calendar linked",
        ))),
        Err(e) => Ok(error_response(&e, "Failed to unlink calendar")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_status_marks_expired_credentials() {
        let credential = CalendarCredential {
            user_id: 1,
            provider: "google".to_string(),
            access_token: "token".to_string(),
            expires_at: Some(chrono::Utc::now() - chrono::Duration::hours(1)),
            updated_at: chrono::Utc::now(),
        };

        let status = link_status(Some(&credential));
        assert!(status.linked);
        assert!(status.expired);

        let none = link_status(None);
        assert!(!none.linked);
        assert!(!none.expired);
    }
}
