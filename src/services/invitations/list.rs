use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::InvitationService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::invitations::responses::InvitationListResponse;
use crate::services::{error_response, unauthorized_response};

pub async fn list_received(
    service: &InvitationService,
    request: &HttpRequest,
) -> ActixResult<HttpResponse> {
    let user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => return Ok(unauthorized_response()),
    };

    let storage = service.get_storage(request);

    match storage.list_invitations_by_receiver(&user.email).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            InvitationListResponse { items },
            "Invitations retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, "Failed to list invitations")),
    }
}

pub async fn list_classroom_invitations(
    service: &InvitationService,
    request: &HttpRequest,
    classroom_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_classroom_invitations(classroom_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            InvitationListResponse { items },
            "Invitations retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, "Failed to list invitations")),
    }
}
