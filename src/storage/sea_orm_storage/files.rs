//! 文件元数据存储操作

use super::SeaOrmStorage;
use crate::entity::files::{ActiveModel, Entity as Files};
use crate::errors::{ClassroomError, Result};
use crate::models::files::{entities::File, requests::CreateFileRequest};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

impl SeaOrmStorage {
    /// 记录已上传到对象存储的文件
    pub async fn create_file_impl(&self, req: CreateFileRequest) -> Result<File> {
        let result = ActiveModel {
            object_key: Set(req.object_key),
            name: Set(req.name),
            size: Set(req.size),
            content_type: Set(req.content_type),
            url: Set(req.url),
            uploader_id: Set(req.uploader_id),
            classroom_id: Set(req.classroom_id),
            post_id: Set(req.post_id),
            submission_id: Set(req.submission_id),
            created_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        }
        .insert(&self.db)
        .await
        .map_err(|e| ClassroomError::database_operation(format!("保存文件信息失败: {e}")))?;

        Ok(result.into_file())
    }

    pub async fn get_file_by_id_impl(&self, file_id: i64) -> Result<Option<File>> {
        let result = Files::find_by_id(file_id)
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询文件失败: {e}")))?;

        Ok(result.map(|m| m.into_file()))
    }
}
