//! 课堂成员关系存储操作

use super::SeaOrmStorage;
use crate::entity::classroom_members::{ActiveModel, Column, Entity as ClassroomMembers};
use crate::entity::users::Entity as Users;
use crate::errors::{ClassroomError, Result};
use crate::models::members::{
    entities::{ClassroomMember, MemberRole},
    responses::MemberDetail,
};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter,
    QueryOrder, Set,
};

impl SeaOrmStorage {
    /// 用户是否为课堂成员
    pub async fn is_member_impl(&self, user_id: i64, classroom_id: i64) -> Result<bool> {
        let count = ClassroomMembers::find()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::ClassroomId.eq(classroom_id)),
            )
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询成员关系失败: {e}")))?;

        Ok(count > 0)
    }

    pub async fn get_member_impl(
        &self,
        classroom_id: i64,
        user_id: i64,
    ) -> Result<Option<ClassroomMember>> {
        let result = ClassroomMembers::find()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::ClassroomId.eq(classroom_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询成员关系失败: {e}")))?;

        Ok(result.map(|m| m.into_member()))
    }

    /// 原子地插入成员关系；已存在时保持原记录不变
    ///
    /// 依赖 (classroom_id, user_id) 唯一索引，并发调用也只会留下一条记录。
    pub async fn add_member_if_absent_impl(
        &self,
        classroom_id: i64,
        user_id: i64,
        role: MemberRole,
    ) -> Result<(ClassroomMember, bool)> {
        let model = ActiveModel {
            classroom_id: Set(classroom_id),
            user_id: Set(user_id),
            role: Set(role.to_string()),
            joined_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        let inserted = ClassroomMembers::insert(model)
            .on_conflict(
                OnConflict::columns([Column::ClassroomId, Column::UserId])
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("加入课堂失败: {e}")))?;

        let member = self
            .get_member_impl(classroom_id, user_id)
            .await?
            .ok_or_else(|| ClassroomError::database_operation("写入成员关系后未能读取"))?;

        Ok((member, inserted > 0))
    }

    /// 列出课堂成员（附带用户资料）
    pub async fn list_members_impl(&self, classroom_id: i64) -> Result<Vec<MemberDetail>> {
        let rows = ClassroomMembers::find()
            .filter(Column::ClassroomId.eq(classroom_id))
            .find_also_related(Users)
            .order_by_asc(Column::JoinedAt)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂成员失败: {e}")))?;

        Ok(rows
            .into_iter()
            .filter_map(|(member, user)| {
                let user = user?;
                Some(MemberDetail {
                    member: member.into_member(),
                    name: user.name,
                    email: user.email,
                    image: user.image,
                })
            })
            .collect())
    }

    pub async fn count_members_impl(&self, classroom_id: i64) -> Result<i64> {
        let count = ClassroomMembers::find()
            .filter(Column::ClassroomId.eq(classroom_id))
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂成员数量失败: {e}")))?;

        Ok(count as i64)
    }

    /// 更新成员角色
    pub async fn update_member_role_impl(
        &self,
        classroom_id: i64,
        user_id: i64,
        role: MemberRole,
    ) -> Result<Option<ClassroomMember>> {
        let existing = ClassroomMembers::find()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::ClassroomId.eq(classroom_id)),
            )
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询成员关系失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let mut model: ActiveModel = existing.into();
        model.role = Set(role.to_string());

        let result = model
            .update(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("更新成员角色失败: {e}")))?;

        Ok(Some(result.into_member()))
    }

    /// 移除成员
    pub async fn remove_member_impl(&self, classroom_id: i64, user_id: i64) -> Result<bool> {
        let result = ClassroomMembers::delete_many()
            .filter(
                Condition::all()
                    .add(Column::UserId.eq(user_id))
                    .add(Column::ClassroomId.eq(classroom_id)),
            )
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("移除成员失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
