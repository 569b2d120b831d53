pub mod create;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::comments::requests::CreateCommentRequest;
use crate::storage::Storage;

pub struct CommentService {
    storage: Option<Arc<dyn Storage>>,
}

impl CommentService {
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

    pub async fn create_comment(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        post_id: i64,
        comment_data: CreateCommentRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_comment(self, request, classroom_id, post_id, comment_data).await
    }

    pub async fn list_comments(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        post_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_comments(self, request, classroom_id, post_id).await
    }
}
