use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::info;

use super::InvitationService;
use crate::config::CalendarConfig;
use crate::errors::{ClassroomError, Result};
use crate::middlewares::RequireJWT;
use crate::models::invitations::entities::InvitationAction;
use crate::models::invitations::requests::RespondInvitationRequest;
use crate::models::invitations::responses::RespondInvitationResponse;
use crate::models::{ApiResponse, ErrorCode};
use crate::services::calendar::{CalendarClient, sync_classroom_for_user, sync_response};
use crate::services::{error_response, unauthorized_response};
use crate::storage::Storage;

/// 接受或拒绝一条邀请
///
/// 拒绝只删除邀请。接受依次写入成员关系、同步日历、最后删除邀请；
/// 每一步都可重复执行，中途失败后重试是安全的。
pub async fn respond_invitation(
    storage: &Arc<dyn Storage>,
    calendar: &dyn CalendarClient,
    calendar_config: &CalendarConfig,
    invitation_id: i64,
    actor_email: &str,
    action: InvitationAction,
) -> Result<RespondInvitationResponse> {
    let invitation = storage
        .get_invitation_by_id(invitation_id)
        .await?
        .ok_or_else(|| ClassroomError::not_found("Invitation not found"))?;

    if !invitation
        .receiver_email
        .eq_ignore_ascii_case(actor_email.trim())
    {
        return Err(ClassroomError::authorization(
            "This invitation was sent to another email",
        ));
    }

    let user = storage
        .get_user_by_email(actor_email)
        .await?
        .ok_or_else(|| ClassroomError::not_found("User not found"))?;

    match action {
        InvitationAction::Decline => {
            storage.delete_invitation(invitation.id).await?;
            info!("User {} declined invitation {}", user.id, invitation.id);
            Ok(RespondInvitationResponse {
                action,
                member: None,
                calendar: None,
            })
        }
        InvitationAction::Accept => {
            let classroom = storage
                .get_classroom_by_id(invitation.classroom_id)
                .await?
                .ok_or_else(|| ClassroomError::not_found("Classroom not found"))?;

            let (member, created) = storage
                .add_member_if_absent(classroom.id, user.id, invitation.role)
                .await?;

            let report =
                sync_classroom_for_user(storage, calendar, calendar_config, &classroom, user.id)
                    .await;

            storage.delete_invitation(invitation.id).await?;

            info!(
                "User {} accepted invitation {} (new membership: {})",
                user.id, invitation.id, created
            );
            Ok(RespondInvitationResponse {
                action,
                member: Some(member),
                calendar: Some(report),
            })
        }
    }
}

pub async fn handle_respond_invitation(
    service: &InvitationService,
    request: &HttpRequest,
    invitation_id: i64,
    respond_data: RespondInvitationRequest,
) -> ActixResult<HttpResponse> {
    let user = match RequireJWT::extract_user(request) {
        Some(user) => user,
        None => return Ok(unauthorized_response()),
    };

    let storage = service.get_storage(request);
    let calendar = service.get_calendar_client(request);

    let result = respond_invitation(
        &storage,
        calendar.as_ref(),
        service.get_calendar_config(),
        invitation_id,
        &user.email,
        respond_data.action,
    )
    .await;

    match result {
        Ok(response) => match response.calendar.clone() {
            Some(report) => Ok(sync_response(&report, response, "Invitation accepted")),
            None => Ok(HttpResponse::Ok()
                .json(ApiResponse::success(response, "Invitation declined"))),
        },
        Err(ClassroomError::NotFound(msg)) if msg.starts_with("Invitation") => {
            Ok(HttpResponse::NotFound()
                .json(ApiResponse::error_empty(ErrorCode::InvitationNotFound, msg)))
        }
        Err(ClassroomError::Authorization(msg)) => Ok(HttpResponse::Forbidden()
            .json(ApiResponse::error_empty(ErrorCode::InvitationEmailMismatch, msg))),
        Err(e) => Ok(error_response(&e, "Failed to respond to invitation")),
    }
}
