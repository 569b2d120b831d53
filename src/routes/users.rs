use actix_web::{HttpRequest, HttpResponse, Result as ActixResult, web};
use once_cell::sync::Lazy;

use crate::middlewares;
use crate::models::calendar::requests::LinkCalendarRequest;
use crate::services::UserService;

// 懒加载的全局 UserService 实例
static USER_SERVICE: Lazy<UserService> = Lazy::new(UserService::new_lazy);

pub async fn link_calendar(
    req: HttpRequest,
    link_data: web::Json<LinkCalendarRequest>,
) -> ActixResult<HttpResponse> {
    USER_SERVICE
        .link_calendar(&req, link_data.into_inner())
        .await
}

pub async fn get_calendar_link(req: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.get_calendar_link(&req).await
}

pub async fn unlink_calendar(req: HttpRequest) -> ActixResult<HttpResponse> {
    USER_SERVICE.unlink_calendar(&req).await
}

// 配置路由
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1/users")
            .wrap(middlewares::RequireJWT)
            .service(
                web::resource("/me/calendar")
                    .route(web::get().to(get_calendar_link))
                    .route(web::put().to(link_calendar))
                    .route(web::delete().to(unlink_calendar)),
            ),
    );
}
