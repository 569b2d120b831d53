pub mod create;
pub mod delete;
pub mod get;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::posts::entities::Post;
use crate::models::posts::requests::{CreatePostRequest, PostListParams, UpdatePostRequest};
use crate::models::{ApiResponse, ErrorCode};
use crate::services::error_response;
use crate::storage::Storage;

pub struct PostService {
    storage: Option<Arc<dyn Storage>>,
}

impl PostService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    pub async fn create_post(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        post_data: CreatePostRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_post(self, request, classroom_id, post_data).await
    }

    pub async fn list_posts(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        query: PostListParams,
    ) -> ActixResult<HttpResponse> {
        get::list_posts(self, request, classroom_id, query).await
    }

    pub async fn get_post(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        post_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_post(self, request, classroom_id, post_id).await
    }

    pub async fn update_post(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        post_id: i64,
        update_data: UpdatePostRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_post(self, request, classroom_id, post_id, update_data).await
    }

    pub async fn delete_post(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        post_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_post(self, request, classroom_id, post_id).await
    }
}

/// 读取属于该课堂的帖子，不属于时按不存在处理
pub(crate) async fn load_post_in_classroom(
    storage: &Arc<dyn Storage>,
    classroom_id: i64,
    post_id: i64,
) -> Result<Post, HttpResponse> {
    match storage.get_post_by_id(post_id).await {
        Ok(Some(post)) if post.classroom_id == classroom_id => Ok(post),
        Ok(_) => Err(HttpResponse::NotFound().json(ApiResponse::error_empty(
            ErrorCode::PostNotFound,
            "Post not found",
        ))),
        Err(e) => Err(error_response(&e, "Failed to load post")),
    }
}

/// 分区必须属于同一课堂
pub(crate) async fn check_section_in_classroom(
    storage: &Arc<dyn Storage>,
    classroom_id: i64,
    section_id: Option<i64>,
) -> Result<(), HttpResponse> {
    let Some(section_id) = section_id else {
        return Ok(());
    };
    match storage.get_section_by_id(section_id).await {
        Ok(Some(section)) if section.classroom_id == classroom_id => Ok(()),
        Ok(_) => Err(HttpResponse::BadRequest().json(ApiResponse::error_empty(
            ErrorCode::SectionNotFound,
            "Section not found in this classroom",
        ))),
        Err(e) => Err(error_response(&e, "Failed to load section")),
    }
}

/// 满分不能为负数
pub(crate) fn validate_max_score(max_score: Option<f64>) -> Result<(), &'static str> {
    match max_score {
        Some(score) if !score.is_finite() || score < 0.0 => {
            Err("max_score must be a non-negative number")
        }
        _ => Ok(()),
    }
}
