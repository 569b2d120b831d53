//! 帖子存储操作

use super::SeaOrmStorage;
use crate::entity::posts::{ActiveModel, Column, Entity as Posts};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PaginationInfo,
    posts::{
        entities::Post,
        requests::{CreatePostRequest, PostListQuery, UpdatePostRequest},
        responses::PostListResponse,
    },
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set,
};

impl SeaOrmStorage {
    pub async fn create_post_impl(
        &self,
        classroom_id: i64,
        author_id: i64,
        req: CreatePostRequest,
    ) -> Result<Post> {
        let now = chrono::Utc::now().timestamp();

        let result = ActiveModel {
            classroom_id: Set(classroom_id),
            section_id: Set(req.section_id),
            author_id: Set(author_id),
            kind: Set(req.kind.to_string()),
            title: Set(req.title),
            content: Set(req.content),
            due_date: Set(req.due_date.map(|d| d.timestamp())),
            max_score: Set(req.max_score),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| ClassroomError::database_operation(format!("创建帖子失败: {e}")))?;

        Ok(result.into_post())
    }

    pub async fn get_post_by_id_impl(&self, post_id: i64) -> Result<Option<Post>> {
        let result = Posts::find_by_id(post_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询帖子失败: {e}")))?;

        Ok(result.map(|m| m.into_post()))
    }

    /// 分页列出课堂帖子
    pub async fn list_posts_with_pagination_impl(
        &self,
        classroom_id: i64,
        query: PostListQuery,
    ) -> Result<PostListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Posts::find().filter(Column::ClassroomId.eq(classroom_id));

        if let Some(kind) = query.kind {
            select = select.filter(Column::Kind.eq(kind.to_string()));
        }
        if let Some(section_id) = query.section_id {
            select = select.filter(Column::SectionId.eq(section_id));
        }

        select = select
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id);

        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询帖子总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询帖子页数失败: {e}")))?;

        let posts = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询帖子列表失败: {e}")))?;

        Ok(PostListResponse {
            items: posts.into_iter().map(|m| m.into_post()).collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    pub async fn update_post_impl(
        &self,
        post_id: i64,
        update: UpdatePostRequest,
    ) -> Result<Option<Post>> {
        let existing = Posts::find_by_id(post_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询帖子失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        if let Some(title) = update.title {
            model.title = Set(title);
        }
        if let Some(content) = update.content {
            model.content = Set(Some(content));
        }
        if let Some(section_id) = update.section_id {
            model.section_id = Set(Some(section_id));
        }
        if let Some(due_date) = update.due_date {
            model.due_date = Set(Some(due_date.timestamp()));
        }
        if let Some(max_score) = update.max_score {
            model.max_score = Set(Some(max_score));
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("更新帖子失败: {e}")))?;

        Ok(Some(result.into_post()))
    }

    pub async fn delete_post_impl(&self, post_id: i64) -> Result<bool> {
        let result = Posts::delete_by_id(post_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("删除帖子失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
