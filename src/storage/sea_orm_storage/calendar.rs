//! 外部日历凭据存储操作

use super::SeaOrmStorage;
use crate::entity::calendar_credentials::{ActiveModel, Column, Entity as CalendarCredentials};
use crate::errors::{ClassroomError, Result};
use crate::models::calendar::entities::CalendarCredential;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, Set};

impl SeaOrmStorage {
    /// 绑定或替换用户的日历凭据（每个用户一条）
    pub async fn upsert_calendar_credential_impl(
        &self,
        user_id: i64,
        provider: &str,
        access_token: &str,
        expires_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<CalendarCredential> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            user_id: Set(user_id),
            provider: Set(provider.to_string()),
            access_token: Set(access_token.to_string()),
            expires_at: Set(expires_at.map(|t| t.timestamp())),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        CalendarCredentials::insert(model)
            .on_conflict(
                OnConflict::column(Column::UserId)
                    .update_columns([
                        Column::Provider,
                        Column::AccessToken,
                        Column::ExpiresAt,
                        Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("保存日历凭据失败: {e}")))?;

        self.get_calendar_credential_impl(user_id)
            .await?
            .ok_or_else(|| ClassroomError::database_operation("保存日历凭据后未能读取"))
    }

    pub async fn get_calendar_credential_impl(
        &self,
        user_id: i64,
    ) -> Result<Option<CalendarCredential>> {
        let result = CalendarCredentials::find()
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询日历凭据失败: {e}")))?;

        Ok(result.map(|m| m.into_credential()))
    }

    pub async fn delete_calendar_credential_impl(&self, user_id: i64) -> Result<bool> {
        let result = CalendarCredentials::delete_many()
            .filter(Column::UserId.eq(user_id))
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("删除日历凭据失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
