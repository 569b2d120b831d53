pub mod create;
pub mod delete;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::sections::requests::CreateSectionRequest;
use crate::storage::Storage;

pub struct SectionService {
    storage: Option<Arc<dyn Storage>>,
}

impl SectionService {
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

    pub async fn create_section(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        section_data: CreateSectionRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_section(self, request, classroom_id, section_data).await
    }

    pub async fn list_sections(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_sections(self, request, classroom_id).await
    }

    pub async fn delete_section(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        section_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_section(self, request, classroom_id, section_id).await
    }
}
