use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::{PostService, load_post_in_classroom};
use crate::models::ApiResponse;
use crate::models::posts::requests::{PostListParams, PostListQuery};
use crate::services::error_response;

pub async fn list_posts(
    service: &PostService,
    request: &HttpRequest,
    classroom_id: i64,
    query: PostListParams,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    let list_query = PostListQuery {
        page: Some(query.pagination.page),
        size: Some(query.pagination.size),
        kind: query.kind,
        section_id: query.section_id,
    };

    match storage
        .list_posts_with_pagination(classroom_id, list_query)
        .await
    {
        Ok(response) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(response, "Posts retrieved successfully"))),
        Err(e) => Ok(error_response(&e, "Failed to list posts")),
    }
}

pub async fn get_post(
    service: &PostService,
    request: &HttpRequest,
    classroom_id: i64,
    post_id: i64,
) -> ActixResult<HttpResponse> {
    let storage = service.get_storage(request);

    match load_post_in_classroom(&storage, classroom_id, post_id).await {
        Ok(post) => {
            Ok(HttpResponse::Ok().json(ApiResponse::success(post, "Post retrieved successfully")))
        }
        Err(resp) => Ok(resp),
    }
}
