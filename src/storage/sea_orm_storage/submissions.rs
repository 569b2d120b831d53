//! 提交存储操作

use super::SeaOrmStorage;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::{ClassroomError, Result};
use crate::models::submissions::entities::Submission;
use sea_orm::sea_query::OnConflict;
use sea_orm::{ColumnTrait, Condition, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 提交作业；同一学生再次提交时覆盖内容并刷新更新时间
    pub async fn upsert_submission_impl(
        &self,
        post_id: i64,
        user_id: i64,
        content: Option<String>,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            post_id: Set(post_id),
            user_id: Set(user_id),
            content: Set(content),
            submitted_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        Submissions::insert(model)
            .on_conflict(
                OnConflict::columns([Column::PostId, Column::UserId])
                    .update_columns([Column::Content, Column::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("保存提交失败: {e}")))?;

        let result = Submissions::find()
            .filter(
                Condition::all()
                    .add(Column::PostId.eq(post_id))
                    .add(Column::UserId.eq(user_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询提交失败: {e}")))?;

        result
            .map(|m| m.into_submission())
            .ok_or_else(|| ClassroomError::database_operation("保存提交后未能读取"))
    }

    pub async fn get_submission_by_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询提交失败: {e}")))?;

        Ok(result.map(|m| m.into_submission()))
    }

    pub async fn list_submissions_impl(
        &self,
        post_id: i64,
        user_id: Option<i64>,
    ) -> Result<Vec<Submission>> {
        let mut select = Submissions::find().filter(Column::PostId.eq(post_id));

        if let Some(user_id) = user_id {
            select = select.filter(Column::UserId.eq(user_id));
        }

        let result = select
            .order_by_desc(Column::UpdatedAt)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询提交列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_submission()).collect())
    }
}
