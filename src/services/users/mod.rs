pub mod calendar_link;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::calendar::requests::LinkCalendarRequest;
use crate::storage::Storage;

pub struct UserService {
    storage: Option<Arc<dyn Storage>>,
}

impl UserService {
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

    // 绑定或替换外部日历凭据
    pub async fn link_calendar(
        &self,
        request: &HttpRequest,
        link_data: LinkCalendarRequest,
    ) -> ActixResult<HttpResponse> {
        calendar_link::link_calendar(self, request, link_data).await
    }

    // 查询日历绑定状态
    pub async fn get_calendar_link(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        calendar_link::get_calendar_link(self, request).await
    }

    // 解除日历绑定
    pub async fn unlink_calendar(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        calendar_link::unlink_calendar(self, request).await
    }
}
