use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::models::sections::requests::CreateSectionRequest;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

pub async fn create_section(
    service: &SectionService,
    request: &HttpRequest,
    classroom_id: i64,
    mut section_data: CreateSectionRequest,
) -> ActixResult<HttpResponse> {
    section_data.name = section_data.name.trim().to_string();
    if section_data.name.is_empty() {
        return Ok(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::BadRequest,
            "Section name must not be empty",
        )));
    }

    let storage = service.get_storage(request);
    match storage.create_section(classroom_id, section_data).await {
        Ok(section) => Ok(HttpResponse::Created()
            .json(ApiResponse::success(section, "Section created successfully"))),
        Err(e) => Ok(error_response(&e, "Failed to create section")),
    }
}
