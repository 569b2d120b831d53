use super::SeaOrmStorage;
use crate::entity::sections::{ActiveModel, Column, Entity as Sections};
use crate::errors::{ClassroomError, Result};
use crate::models::sections::{entities::Section, requests::CreateSectionRequest};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建分区，未指定位置时追加到末尾
    pub async fn create_section_impl(
        &self,
        classroom_id: i64,
        req: CreateSectionRequest,
    ) -> Result<Section> {
        let position = match req.position {
            Some(position) => position,
            None => Sections::find()
                .filter(Column::ClassroomId.eq(classroom_id))
                .count(&self.db)
                .await
                .map_err(|e| ClassroomError::database_operation(format!("查询分区数量失败: {e}")))?
                as i32,
        };

        let result = ActiveModel {
            classroom_id: Set(classroom_id),
            name: Set(req.name.trim().to_string()),
            position: Set(position),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| ClassroomError::database_operation(format!("创建分区失败: {e}")))?;

        Ok(result.into_section())
    }

    pub async fn get_section_by_id_impl(&self, section_id: i64) -> Result<Option<Section>> {
        let result = Sections::find_by_id(section_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询分区失败: {e}")))?;

        Ok(result.map(|m| m.into_section()))
    }

    pub async fn list_sections_impl(&self, classroom_id: i64) -> Result<Vec<Section>> {
        let result = Sections::find()
            .filter(Column::ClassroomId.eq(classroom_id))
            .order_by_asc(Column::Position)
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询分区列表失败: {e}")))?;

        Ok(result.into_iter().map(|m| m.into_section()).collect())
    }

    pub async fn delete_section_impl(&self, section_id: i64) -> Result<bool> {
        let result = Sections::delete_by_id(section_id)
            .exec(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("删除分区失败: {e}")))?;

        Ok(result.rows_affected > 0)
    }
}
