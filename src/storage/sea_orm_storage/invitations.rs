//! 邀请存储操作

use super::SeaOrmStorage;
use crate::entity::invitations::{ActiveModel, Column, Entity as Invitations};
use crate::errors::{ClassroomError, Result};
use crate::models::{invitations::entities::Invitation, members::entities::MemberRole};
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 原子地创建邀请；(发送者, 邮箱, 课堂) 已存在时返回 None
    pub async fn create_invitation_if_absent_impl(
        &self,
        sender_id: i64,
        receiver_email: &str,
        classroom_id: i64,
        role: MemberRole,
    ) -> Result<Option<Invitation>> {
        let email = receiver_email.trim().to_lowercase();

        let model = ActiveModel {
            sender_id: Set(sender_id),
            receiver_email: Set(email.clone()),
            classroom_id: Set(classroom_id),
            role: Set(role.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let inserted = Invitations::insert(model)
            .on_conflict(
                OnConflict::columns([Column::SenderId, Column::ReceiverEmail, Column::ClassroomId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("创建邀请失败: {e}")))?;

        if inserted == 0 {
            return Ok(None);
        }

        let result = Invitations::find()
            .filter(
                Condition::all()
                    .add(Column::SenderId.eq(sender_id))
                    .add(Column::ReceiverEmail.eq(email))
                    .add(Column::ClassroomId.eq(classroom_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询邀请失败: {e}")))?;

        Ok(result.map(|m| m.into_invitation()))
    }

    pub async fn get_invitation_by_id_impl(&self, invitation_id: i64) -> Result<Option<Invitation>> {
        let result = Invitations::find_by_id(invitation_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询邀请失败: {e}")))?;

        Ok(result.map(|m| m.into_invitation()))
    }

    pub async fn delete_invitation_impl(&self, invitation_id: i64) -> Result<bool> {
        let result = Invitations::delete_by_id(invitation_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("删除邀请失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }

    /// 列出某邮箱收到的邀请
    pub async fn list_invitations_by_receiver_impl(&self, email: &str) -> Result<Vec<Invitation>> {
        let result = Invitations::find()
            .filter(Column::ReceiverEmail.eq(email.trim().to_lowercase()))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询邀请列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_invitation()).collect())
    }

    pub async fn list_classroom_invitations_impl(
        &self,
        classroom_id: i64,
    ) -> Result<Vec<Invitation>> {
        let result = Invitations::find()
            .filter(Column::ClassroomId.eq(classroom_id))
            .order_by_desc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询邀请列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_invitation()).collect())
    }
}
