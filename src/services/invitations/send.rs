use std::sync::Arc;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use tracing::{info, warn};

use super::InvitationService;
use crate::errors::{ClassroomError, Result};
use crate::middlewares::RequireJWT;
use crate::models::ApiResponse;
use crate::models::invitations::requests::{InvitationEntry, SendInvitationsRequest};
use crate::models::invitations::responses::{SendInvitationsResponse, SendOutcome, SendResult};
use crate::services::{error_response, unauthorized_response};
use crate::storage::Storage;
use crate::utils::validate::validate_email;

/// 依次处理每个邀请，单个失败不影响其余条目
///
/// 只有课堂的教师或协作教师可以发送。
pub async fn send_invitations(
    storage: &Arc<dyn Storage>,
    sender_id: i64,
    classroom_id: i64,
    entries: &[InvitationEntry],
) -> Result<Vec<SendResult>> {
    match storage.get_member(classroom_id, sender_id).await? {
        Some(member) if member.role.is_teacher() => {}
        _ => {
            return Err(ClassroomError::authorization(
                "Only teachers can send invitations",
            ));
        }
    }

    let mut results = Vec::with_capacity(entries.len());
    for entry in entries {
        let email = entry.email.trim().to_lowercase();
        let outcome = send_one(storage, sender_id, classroom_id, &email, entry).await;
        results.push(SendResult { email, outcome });
    }

    Ok(results)
}

async fn send_one(
    storage: &Arc<dyn Storage>,
    sender_id: i64,
    classroom_id: i64,
    email: &str,
    entry: &InvitationEntry,
) -> SendOutcome {
    if validate_email(email).is_err() {
        return SendOutcome::InvalidEmail;
    }

    let attempt = async {
        if let Some(user) = storage.get_user_by_email(email).await? {
            if storage.is_member(user.id, classroom_id).await? {
                return Ok(SendOutcome::AlreadyMember);
            }
        }

        let created = storage
            .create_invitation_if_absent(sender_id, email, classroom_id, entry.role)
            .await?;
        Ok::<_, ClassroomError>(match created {
            Some(_) => SendOutcome::Sent,
            None => SendOutcome::AlreadyInvited,
        })
    };

    attempt.await.unwrap_or_else(|e| {
        warn!(
            "Failed to invite {} to classroom {}: {}",
            email, classroom_id, e
        );
        SendOutcome::Failed
    })
}

pub async fn handle_send_invitations(
    service: &InvitationService,
    request: &HttpRequest,
    classroom_id: i64,
    send_data: SendInvitationsRequest,
) -> ActixResult<HttpResponse> {
    let sender_id = match RequireJWT::extract_user_id(request) {
        Some(id) => id,
        None => return Ok(unauthorized_response()),
    };

    let storage = service.get_storage(request);

    match send_invitations(&storage, sender_id, classroom_id, &send_data.invitations).await {
        Ok(results) => {
            let sent = results
                .iter()
                .filter(|r| r.outcome == SendOutcome::Sent)
                .count();
            info!(
                "User {} sent {} of {} invitations for classroom {}",
                sender_id,
                sent,
                results.len(),
                classroom_id
            );
            Ok(HttpResponse::Ok().json(ApiResponse::success(
                SendInvitationsResponse { results },
                "Invitations processed",
            )))
        }
        Err(e) => Ok(error_response(&e, "Failed to send invitations")),
    }
}
