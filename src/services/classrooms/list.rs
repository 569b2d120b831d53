use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::ClassroomService;
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::classrooms::requests::{ClassroomListParams, ClassroomListQuery};
use crate::services::{error_response, unauthorized_response};

pub async fn list_classrooms(
    service: &ClassroomService,
    request: &HttpRequest,
    query: ClassroomListParams,
) -> ActixResult<HttpResponse> {
    let user_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(unauthorized_response()),
    };

    let storage = service.get_storage(request);

    let list_query = ClassroomListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        search: query.search,
    };

    match storage
        .list_user_classrooms_with_pagination(user_id, list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok().json(ApiResponse::success(
            response,
            "Classrooms retrieved successfully",
        ))),
        Err(e) => Ok(error_response(&e, "Failed to list classrooms")),
    }
}
