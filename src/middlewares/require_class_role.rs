/*!
 * 课堂成员与角色访问控制中间件
 *
 * 必须在 RequireJWT 之后使用，从路径参数 `classroom_id` 读取课堂。
 * 非成员一律返回 403；成员角色不在允许列表中同样返回 403。
 *
 * ```rust,ignore
 * web::resource("/{classroom_id}/posts")
 *     .route(web::get().to(list_posts).wrap(RequireClassRole::new_any(MemberRole::all_roles())))
 *     .route(web::post().to(create_post).wrap(RequireClassRole::new_any(MemberRole::teacher_roles())))
 * ```
 *
 * 通过校验后，当前用户在该课堂中的成员关系会放入请求扩展，
 * 处理程序用 `RequireClassRole::extract_member` 读取。
 */

use actix_service::{Service, Transform};
use actix_web::{
    Error, HttpMessage,
    body::EitherBody,
    dev::{ServiceRequest, ServiceResponse},
    http::StatusCode,
};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use std::{rc::Rc, sync::Arc};

use crate::{
    models::{
        ErrorCode,
        members::entities::{ClassroomMember, MemberRole},
        users::entities::User,
    },
    storage::Storage,
    utils::classroom_id_from_path,
};

use super::create_error_response;

#[derive(Clone)]
pub struct RequireClassRole {
    required_roles: Vec<MemberRole>,
    require_all: bool, // true表示需要所有班级角色，false表示任一班级角色即可
}

impl RequireClassRole {
    /// 创建需要特定班级角色的中间件
    pub fn new(role: &MemberRole) -> Self {
        Self {
            required_roles: vec![*role],
            require_all: true,
        }
    }

    /// 创建需要任一班级角色的中间件
    pub fn new_any(roles: &[&MemberRole]) -> Self {
        Self {
            required_roles: roles.iter().map(|r| **r).collect(),
            require_all: false,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for RequireClassRole
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireClassRoleMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireClassRoleMiddleware {
            service: Rc::new(service),
            required_roles: self.required_roles.clone(),
            require_all: self.require_all,
        }))
    }
}

pub struct RequireClassRoleMiddleware<S> {
    service: Rc<S>,
    required_roles: Vec<MemberRole>,
    require_all: bool,
}

impl<S, B> Service<ServiceRequest> for RequireClassRoleMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(
        &self,
        ctx: &mut std::task::Context<'_>,
    ) -> std::task::Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let srv = self.service.clone();
        let required_roles = self.required_roles.clone();
        let require_all = self.require_all;

        Box::pin(async move {
            // 1. 校验用户信息
            let user_id_opt = req.extensions().get::<User>().map(|u| u.id);
            let user_id = match user_id_opt {
                Some(id) => id,
                None => {
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::UNAUTHORIZED,
                            ErrorCode::Unauthorized,
                            "Unauthorized: missing user",
                        )
                        .map_into_right_body(),
                    ));
                }
            };

            // 2. 校验 classroom_id
            let classroom_id = match classroom_id_from_path(req.request()) {
                Some(cid) => cid,
                None => {
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::BAD_REQUEST,
                            ErrorCode::BadRequest,
                            "Missing or invalid classroom_id",
                        )
                        .map_into_right_body(),
                    ));
                }
            };

            // 3. 查询成员关系，非成员直接拒绝
            let member_result = find_member(&req, classroom_id, user_id).await;
            let member = match member_result {
                Ok(Some(member)) => member,
                Ok(None) => {
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::FORBIDDEN,
                            ErrorCode::ClassroomPermissionDenied,
                            "You are not a member of this classroom",
                        )
                        .map_into_right_body(),
                    ));
                }
                Err(message) => {
                    return Ok(req.into_response(
                        create_error_response(
                            StatusCode::INTERNAL_SERVER_ERROR,
                            ErrorCode::InternalServerError,
                            &message,
                        )
                        .map_into_right_body(),
                    ));
                }
            };

            // 4. 判断是否拥有所需角色
            let has_permission = if require_all {
                required_roles.iter().all(|role| &member.role == role)
            } else {
                required_roles.iter().any(|role| &member.role == role)
            };

            if has_permission {
                tracing::debug!(
                    "User {} passed role check in classroom {}",
                    member.user_id,
                    classroom_id
                );
                req.extensions_mut().insert(member);
                Ok(srv.call(req).await?.map_into_left_body())
            } else {
                Ok(req.into_response(
                    create_error_response(
                        StatusCode::FORBIDDEN,
                        ErrorCode::ClassroomPermissionDenied,
                        "Access denied for this classroom role",
                    )
                    .map_into_right_body(),
                ))
            }
        })
    }
}

// 辅助函数：从请求中提取成员信息
impl RequireClassRole {
    /// 从请求扩展中提取当前用户在课堂中的成员关系
    /// 此函数应该在应用了RequireClassRole中间件的路由处理程序中使用
    pub fn extract_member(req: &actix_web::HttpRequest) -> Option<ClassroomMember> {
        req.extensions().get::<ClassroomMember>().cloned()
    }
}

async fn find_member(
    req: &ServiceRequest,
    classroom_id: i64,
    user_id: i64,
) -> Result<Option<ClassroomMember>, String> {
    let storage = req
        .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
        .map(|data| data.get_ref().clone())
        .ok_or_else(|| "Storage not found in app data".to_string())?;

    storage
        .get_member(classroom_id, user_id)
        .await
        .map_err(|e| {
            tracing::error!(
                "Failed to load membership of user {} in classroom {}: {}",
                user_id,
                classroom_id,
                e
            );
            "Failed to check classroom membership".to_string()
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, HttpResponse, test, web};
    use sea_orm::{ConnectOptions, Database};

    use crate::models::classrooms::requests::CreateClassroomRequest;
    use crate::models::users::requests::CreateUserRequest;
    use crate::storage::SeaOrmStorage;

    async fn memory_storage() -> Arc<dyn Storage> {
        let mut opt = ConnectOptions::new("sqlite::memory:");
        opt.max_connections(1).min_connections(1).sqlx_logging(false);
        let db = Database::connect(opt).await.unwrap();
        Arc::new(SeaOrmStorage::from_connection(db).await.unwrap())
    }

    async fn seed_user(storage: &Arc<dyn Storage>, email: &str) -> User {
        storage
            .create_user(CreateUserRequest {
                email: email.to_string(),
                name: email.to_string(),
                image: None,
                password_hash: "hash".to_string(),
            })
            .await
            .unwrap()
    }

    async fn seed_classroom(storage: &Arc<dyn Storage>, owner_id: i64) -> i64 {
        storage
            .create_classroom(
                owner_id,
                "GATE0001",
                CreateClassroomRequest {
                    name: "Gate".to_string(),
                    description: None,
                    image: None,
                    start_date: chrono::NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    end_date: chrono::NaiveDate::from_ymd_opt(2024, 3, 1).unwrap(),
                    time_slots: vec![],
                },
            )
            .await
            .unwrap()
            .id
    }

    /// 以 `user` 身份请求一个只允许教师访问的课堂路由，返回状态码
    async fn request_as(
        storage: Arc<dyn Storage>,
        user: Option<User>,
        classroom_id: i64,
    ) -> StatusCode {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(storage))
                .wrap_fn(move |req, srv| {
                    if let Some(user) = &user {
                        req.extensions_mut().insert(user.clone());
                    }
                    srv.call(req)
                })
                .service(
                    web::resource("/classrooms/{classroom_id}").route(
                        web::get()
                            .to(|| async { HttpResponse::Ok().finish() })
                            .wrap(RequireClassRole::new_any(MemberRole::teacher_roles())),
                    ),
                ),
        )
        .await;

        let req = test::TestRequest::get()
            .uri(&format!("/classrooms/{classroom_id}"))
            .to_request();
        test::call_service(&app, req).await.status()
    }

    #[actix_web::test]
    async fn test_missing_user_is_unauthorized() {
        let storage = memory_storage().await;
        let status = request_as(storage, None, 1).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn test_non_member_is_forbidden() {
        let storage = memory_storage().await;
        let owner = seed_user(&storage, "owner@example.com").await;
        let outsider = seed_user(&storage, "outsider@example.com").await;
        let classroom_id = seed_classroom(&storage, owner.id).await;

        let status = request_as(storage, Some(outsider), classroom_id).await;
        assert_eq!(status, StatusCode::FORBIDDEN);
    }

    #[actix_web::test]
    async fn test_role_gate() {
        let storage = memory_storage().await;
        let owner = seed_user(&storage, "owner@example.com").await;
        let student = seed_user(&storage, "student@example.com").await;
        let classroom_id = seed_classroom(&storage, owner.id).await;
        storage
            .add_member_if_absent(classroom_id, student.id, MemberRole::Student)
            .await
            .unwrap();

        let status = request_as(storage.clone(), Some(student), classroom_id).await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let status = request_as(storage, Some(owner), classroom_id).await;
        assert_eq!(status, StatusCode::OK);
    }
}
