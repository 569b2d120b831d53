use super::SeaOrmStorage;
use crate::entity::comments::{ActiveModel, Column, Entity as Comments};
use crate::errors::{ClassroomError, Result};
use crate::models::comments::entities::Comment;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    pub async fn create_comment_impl(
        &self,
        post_id: i64,
        author_id: i64,
        content: &str,
    ) -> Result<Comment> {
        let result = ActiveModel {
            post_id: Set(post_id),
            author_id: Set(author_id),
            content: Set(content.to_string()),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| ClassroomError::database_operation(format!("创建评论失败: {e}")))?;

        Ok(result.into_comment())
    }

    pub async fn list_comments_impl(&self, post_id: i64) -> Result<Vec<Comment>> {
        let result = Comments::find()
            .filter(Column::PostId.eq(post_id))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询评论列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_comment()).collect())
    }
}
