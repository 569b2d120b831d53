use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::SectionService;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;

/// 删除分区，分区下的帖子保留并变为未分区
pub async fn delete_section(
    service: &SectionService,
    request: &HttpRequest,
    classroom_id: i64,
    section_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match storage.get_section_by_id(section_id).await {
        Ok(Some(section)) if section.classroom_id == classroom_id => {}
        Ok(_) => {
            return Ok(HttpResponse::NotFound().json(ApiResponse::error_empty(
                ErrorCode::SectionNotFound,
                "Section not found",
            )));
        }
        Err(e) => return Ok(error_response(&e, "Failed to delete section")),
    }

    match storage.delete_section(section_id).await {
        Ok(_) => Ok(HttpResponse::Ok().json(ApiResponse::success_empty("Section deleted successfully"))),
        Err(e) => Ok(error_response(&e, "Failed to delete section")),
    }
}
