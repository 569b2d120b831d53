pub mod list;
pub mod submit;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::submissions::requests::SubmitRequest;
use crate::storage::Storage;

pub struct SubmissionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SubmissionService {
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

    // 学生提交或覆盖作业
    pub async fn submit(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        post_id: i64,
        submit_data: SubmitRequest,
    ) -> ActixResult<HttpResponse> {
        submit::submit(self, request, classroom_id, post_id, submit_data).await
    }

    // 教师查看全部提交，学生只看到自己的
    pub async fn list_submissions(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        post_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_submissions(self, request, classroom_id, post_id).await
    }
}
