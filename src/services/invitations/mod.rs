pub mod list;
pub mod respond;
pub mod revoke;
pub mod send;

pub use respond::respond_invitation;
pub use send::send_invitations;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::config::{AppConfig, CalendarConfig};
use crate::models::invitations::requests::{RespondInvitationRequest, SendInvitationsRequest};
use crate::services::calendar::{CalendarClient, calendar_client_from_request};
use crate::storage::Storage;

pub struct InvitationService {
    storage: Option<Arc<dyn Storage>>,
}

impl InvitationService {
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

    // 批量发送邀请
    pub async fn send_invitations(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        send_data: SendInvitationsRequest,
    ) -> ActixResult<HttpResponse> {
        send::handle_send_invitations(self, request, classroom_id, send_data).await
    }

    // 接受或拒绝邀请
    pub async fn respond_invitation(
        &self,
        request: &HttpRequest,
        invitation_id: i64,
        respond_data: RespondInvitationRequest,
    ) -> ActixResult<HttpResponse> {
        respond::handle_respond_invitation(self, request, invitation_id, respond_data).await
    }

    // 当前用户收到的邀请
    pub async fn list_received(&self, request: &HttpRequest) -> ActixResult<HttpResponse> {
        list::list_received(self, request).await
    }

    // 课堂已发出的待处理邀请
    pub async fn list_classroom_invitations(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_classroom_invitations(self, request, classroom_id).await
    }

    // 撤回邀请
    pub async fn revoke_invitation(
        &self,
        request: &HttpRequest,
        invitation_id: i64,
    ) -> ActixResult<HttpResponse> {
        revoke::revoke_invitation(self, request, invitation_id).await
    }
}
