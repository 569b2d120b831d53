use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::MemberService;
use crate::models::ApiResponse;
use crate::models::members::responses::MemberListResponse;
use crate::services::error_response;

pub async fn list_members(
    service: &MemberService,
    request: &HttpRequest,
    classroom_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.list_members(classroom_id).await {
        Ok(items) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            MemberListResponse { items },
            "Members retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, "Failed to list members")),
    }
}
