use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares::RequireClassRole;
use crate::models::files::requests::{RegisterFileRequest, UploadUrlRequest};
use crate::models::members::entities::MemberRole;
use crate::services::FileService;
use crate::utils::{SafeClassroomId, SafeFileId};

// 懒加载的全局 FileService 实例
static FILE_SERVICE: Lazy<FileService> = Lazy::new(FileService::new_lazy);

pub async fn create_upload_url(
    request: HttpRequest,
    classroom_id: SafeClassroomId,
    upload_data: web::Json<UploadUrlRequest>,
) -> ActixResult<HttpResponse> {
    FILE_SERVICE
        .create_upload_url(&request, classroom_id.0, upload_data.into_inner())
        .await
}

pub async fn register_file(
    request: HttpRequest,
    classroom_id: SafeClassroomId,
    file_data: web::Json<RegisterFileRequest>,
) -> ActixResult<HttpResponse> {
    FILE_SERVICE
        .register_file(&request, classroom_id.0, file_data.into_inner())
        .await
}

pub async fn get_file(
    request: HttpRequest,
    classroom_id: SafeClassroomId,
    file_id: SafeFileId,
) -> ActixResult<HttpResponse> {
    FILE_SERVICE
        .get_file(&request, classroom_id.0, file_id.0)
        .await
}

// 配置路由（挂在 /api/v1/classrooms 之下）
pub fn configure_file_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/{classroom_id}/files/upload-url").route(
            web::post()
                .to(create_upload_url)
                .wrap(RequireClassRole::new_any(MemberRole::all_roles())),
        ),
    )
    .service(
        web::resource("/{classroom_id}/files").route(
            web::post()
                .to(register_file)
                .wrap(RequireClassRole::new_any(MemberRole::all_roles())),
        ),
    )
    .service(
        web::resource("/{classroom_id}/files/{file_id}").route(
            web::get()
                .to(get_file)
                .wrap(RequireClassRole::new_any(MemberRole::all_roles())),
        ),
    );
}
