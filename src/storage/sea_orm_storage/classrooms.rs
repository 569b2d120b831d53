//! 课堂存储操作

use std::collections::HashMap;

use super::SeaOrmStorage;
use crate::entity::classroom_members::{
    ActiveModel as MemberActiveModel, Column as MemberColumn,
};
use crate::entity::classroom_time_slots::{
    ActiveModel as TimeSlotActiveModel, Column as TimeSlotColumn, Entity as ClassroomTimeSlots,
};
use crate::entity::classrooms::{ActiveModel, Column, Entity as Classrooms, Relation};
use crate::errors::{ClassroomError, Result};
use crate::models::{
    PaginationInfo,
    classrooms::{
        entities::{Classroom, TimeSlot},
        requests::{
            ClassroomListQuery, CreateClassroomRequest, TimeSlotInput, UpdateClassroomRequest,
        },
        responses::ClassroomListResponse,
    },
    members::entities::MemberRole,
};
use crate::utils::escape_like_pattern;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, JoinType, PaginatorTrait,
    QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建课堂：课堂、时间段与创建者成员关系在同一事务中写入
    pub async fn create_classroom_impl(
        &self,
        owner_id: i64,
        code: &str,
        req: CreateClassroomRequest,
    ) -> Result<Classroom> {
        let now = chrono::Utc::now().timestamp();

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("开启事务失败: {e}")))?;

        let classroom = ActiveModel {
            owner_id: Set(owner_id),
            name: Set(req.name),
            description: Set(req.description),
            image: Set(req.image),
            code: Set(code.to_string()),
            start_date: Set(req.start_date),
            end_date: Set(req.end_date),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| ClassroomError::database_operation(format!("创建课堂失败: {e}")))?;

        Self::insert_time_slots(&txn, classroom.id, &req.time_slots).await?;

        MemberActiveModel {
            classroom_id: Set(classroom.id),
            user_id: Set(owner_id),
            role: Set(MemberRole::Teacher.to_string()),
            joined_at: Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await
        .map_err(|e| ClassroomError::database_operation(format!("写入课堂创建者失败: {e}")))?;

        txn.commit()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("提交事务失败: {e}")))?;

        let time_slots = self.load_time_slots(classroom.id).await?;
        Ok(classroom.into_classroom(time_slots))
    }

    /// 按顺序写入时间段
    async fn insert_time_slots<C: ConnectionTrait>(
        conn: &C,
        classroom_id: i64,
        slots: &[TimeSlotInput],
    ) -> Result<()> {
        for (position, slot) in slots.iter().enumerate() {
            TimeSlotActiveModel {
                classroom_id: Set(classroom_id),
                day: Set(slot.day.trim().to_string()),
                start_time: Set(slot.start_time.trim().to_string()),
                end_time: Set(slot.end_time.trim().to_string()),
                position: Set(position as i32),
                ..Default::default()
            }
            .insert(conn)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("写入课堂时间段失败: {e}")))?;
        }
        Ok(())
    }

    /// 读取课堂时间段
    async fn load_time_slots(&self, classroom_id: i64) -> Result<Vec<TimeSlot>> {
        let slots = ClassroomTimeSlots::find()
            .filter(TimeSlotColumn::ClassroomId.eq(classroom_id))
            .order_by_asc(TimeSlotColumn::Position)
            .order_by_asc(TimeSlotColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂时间段失败: {e}")))?;

        Ok(slots.into_iter().map(|m| m.into_time_slot()).collect())
    }

    /// 批量读取多个课堂的时间段
    async fn load_time_slots_for(&self, classroom_ids: &[i64]) -> Result<HashMap<i64, Vec<TimeSlot>>> {
        let mut grouped: HashMap<i64, Vec<TimeSlot>> = HashMap::new();
        if classroom_ids.is_empty() {
            return Ok(grouped);
        }

        let slots = ClassroomTimeSlots::find()
            .filter(TimeSlotColumn::ClassroomId.is_in(classroom_ids.to_vec()))
            .order_by_asc(TimeSlotColumn::Position)
            .order_by_asc(TimeSlotColumn::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂时间段失败: {e}")))?;

        for slot in slots {
            grouped
                .entry(slot.classroom_id)
                .or_default()
                .push(slot.into_time_slot());
        }
        Ok(grouped)
    }

    /// 通过 ID 获取课堂
    pub async fn get_classroom_by_id_impl(&self, classroom_id: i64) -> Result<Option<Classroom>> {
        let result = Classrooms::find_by_id(classroom_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂失败: {e}")))?;

        match result {
            Some(model) => {
                let time_slots = self.load_time_slots(model.id).await?;
                Ok(Some(model.into_classroom(time_slots)))
            }
            None => Ok(None),
        }
    }

    /// 通过课堂码获取课堂
    pub async fn get_classroom_by_code_impl(&self, code: &str) -> Result<Option<Classroom>> {
        let result = Classrooms::find()
            .filter(Column::Code.eq(code))
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂失败: {e}")))?;

        match result {
            Some(model) => {
                let time_slots = self.load_time_slots(model.id).await?;
                Ok(Some(model.into_classroom(time_slots)))
            }
            None => Ok(None),
        }
    }

    pub async fn classroom_code_exists_impl(&self, code: &str) -> Result<bool> {
        let count = Classrooms::find()
            .filter(Column::Code.eq(code))
            .count(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂码失败: {e}")))?;

        Ok(count > 0)
    }

    /// 分页列出用户所在的课堂
    pub async fn list_user_classrooms_with_pagination_impl(
        &self,
        user_id: i64,
        query: ClassroomListQuery,
    ) -> Result<ClassroomListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Classrooms::find()
            .join(JoinType::InnerJoin, Relation::Members.def())
            .filter(MemberColumn::UserId.eq(user_id));

        // 搜索条件
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(Column::Name.contains(&escaped));
        }

        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator
            .num_items()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂总数失败: {e}")))?;

        let pages = paginator
            .num_pages()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂页数失败: {e}")))?;

        let classrooms = paginator
            .fetch_page(page - 1)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂列表失败: {e}")))?;

        let ids: Vec<i64> = classrooms.iter().map(|c| c.id).collect();
        let mut slots = self.load_time_slots_for(&ids).await?;

        Ok(ClassroomListResponse {
            items: classrooms
                .into_iter()
                .map(|m| {
                    let time_slots = slots.remove(&m.id).unwrap_or_default();
                    m.into_classroom(time_slots)
                })
                .collect(),
            pagination: PaginationInfo::new(page, size, total, pages),
        })
    }

    /// 更新课堂；提供 time_slots 时在事务中整体替换
    pub async fn update_classroom_impl(
        &self,
        classroom_id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>> {
        let existing = Classrooms::find_by_id(classroom_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询课堂失败: {e}")))?;

        let Some(existing) = existing else {
            return Ok(None);
        };

        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("开启事务失败: {e}")))?;

        let mut model: ActiveModel = existing.into();
        if let Some(name) = update.name {
            model.name = Set(name);
        }
        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }
        if let Some(image) = update.image {
            model.image = Set(Some(image));
        }
        if let Some(start_date) = update.start_date {
            model.start_date = Set(start_date);
        }
        if let Some(end_date) = update.end_date {
            model.end_date = Set(end_date);
        }
        model.updated_at = Set(chrono::Utc::now().timestamp());

        let updated = model
            .update(&txn)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("更新课堂失败: {e}")))?;

        if let Some(time_slots) = update.time_slots {
            ClassroomTimeSlots::delete_many()
                .filter(TimeSlotColumn::ClassroomId.eq(classroom_id))
                .exec(&txn)
                .await
                .map_err(|e| {
                    ClassroomError::database_operation(format!("删除课堂时间段失败: {e}"))
                })?;
            Self::insert_time_slots(&txn, classroom_id, &time_slots).await?;
        }

        txn.commit()
            .await
            .map_err(|e| ClassroomError::database_operation(format!("提交事务失败: {e}")))?;

        let time_slots = self.load_time_slots(classroom_id).await?;
        Ok(Some(updated.into_classroom(time_slots)))
    }

    /// 删除课堂（成员、邀请、内容由外键级联删除）
    pub async fn delete_classroom_impl(&self, classroom_id: i64) -> Result<bool> {
        let result = Classrooms::delete_by_id(classroom_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("删除课堂失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
