use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::models::ApiResponse;
use crate::services::error_response;

pub async fn list_sections(
    service: &SectionService,
    request: &HttpRequest,
    classroom_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);
    match storage.list_sections(classroom_id).await {
        Ok(sections) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(sections, "Sections retrieved successfully"))),
        Err(e) => Ok(error_response(&e, "Failed to list sections")),
    }
}
