pub mod delete;
pub mod join;
pub mod list;
pub mod update;

pub use join::join_classroom;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::{AppConfig, CalendarConfig};
use crate::models::classrooms::requests::JoinClassroomRequest;
use crate::models::members::requests::UpdateMemberRoleRequest;
use crate::services::calendar::{CalendarClient, calendar_client_from_request};
use crate::storage::Storage;

pub struct MemberService {
    storage: Option<Arc<dyn Storage>>,
}

impl MemberService {
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

    pub(crate) fn get_calendar_client(&self, request: &HttpRequest) -> Arc<dyn CalendarClient> {
        calendar_client_from_request(request)
    }

    pub(crate) fn get_calendar_config(&self) -> &CalendarConfig {
        &AppConfig::get().calendar
    }

    // 通过课堂码加入课堂
    pub async fn join_classroom(
        &self,
        request: &HttpRequest,
        join_data: JoinClassroomRequest,
    ) -> ActixResult<HttpResponse> {
        join::handle_join_classroom(self, request, join_data).await
    }

    // 列出课堂成员
    pub async fn list_members(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_members(self, request, classroom_id).await
    }

    // 修改成员角色
    pub async fn update_member_role(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        user_id: i64,
        update_data: UpdateMemberRoleRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_member_role(self, request, classroom_id, user_id, update_data).await
    }

    // 移除成员或退出课堂
    pub async fn remove_member(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        user_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::remove_member(self, request, classroom_id, user_id).await
    }
}
