pub mod get;
pub mod object_store;
pub mod register;
pub mod upload_url;

pub use object_store::{ObjectStore, PresignedUrl, SignedUrlObjectStore};

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::files::requests::{RegisterFileRequest, UploadUrlRequest};
use crate::storage::Storage;

pub struct FileService {
    storage: Option<Arc<dyn Storage>>,
}

impl FileService {
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

    pub(crate) fn get_object_store(&self, request: &HttpRequest) -> Arc<dyn ObjectStore> {
        request
            .app_data::<actix_web::web::Data<Arc<dyn ObjectStore>>>()
            .expect("Object store not found in app data")
            .get_ref()
            .clone()
    }

    // 申请上传地址
    pub async fn create_upload_url(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        upload_data: UploadUrlRequest,
    ) -> ActixResult<HttpResponse> {
        upload_url::create_upload_url(self, request, classroom_id, upload_data).await
    }

    // 上传完成后登记文件元数据
    pub async fn register_file(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        file_data: RegisterFileRequest,
    ) -> ActixResult<HttpResponse> {
        register::register_file(self, request, classroom_id, file_data).await
    }

    // 获取文件元数据
    pub async fn get_file(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        file_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_file(self, request, classroom_id, file_id).await
    }
}

/// 课堂内文件的对象键前缀
pub(crate) fn classroom_key_prefix(classroom_id: i64) -> String {
    format!("classrooms/{classroom_id}/")
}

/// 文件名只保留字母、数字和 `.-_`，其余替换为 `_`
pub(crate) fn sanitize_file_name(name: &str) -> String {
    let base = name.rsplit(['/', '\\']).next().unwrap_or_default();
    let cleaned: String = base
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .take(100)
        .collect();
    let cleaned = cleaned.trim_matches('.').to_string();
    if cleaned.is_empty() {
        "file".to_string()
    } else {
        cleaned
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_file_name() {
        assert_eq!(sanitize_file_name("report.pdf"), "report.pdf");
        assert_eq!(sanitize_file_name("my report (1).pdf"), "my_report__1_.pdf");
        assert_eq!(sanitize_file_name("../../etc/passwd"), "passwd");
        assert_eq!(sanitize_file_name("C:\\tmp\\a b.txt"), "a_b.txt");
        assert_eq!(sanitize_file_name(".."), "file");
        assert_eq!(sanitize_file_name(""), "file");
    }
}
