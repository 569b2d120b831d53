pub mod create;
pub mod delete;
pub mod get;
pub mod list;
pub mod update;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::classrooms::requests::{
    ClassroomListParams, CreateClassroomRequest, TimeSlotInput, UpdateClassroomRequest,
};
use crate::storage::Storage;
use crate::utils::validate::validate_time_range;

pub struct ClassroomService {
    storage: Option<Arc<dyn Storage>>,
}

impl ClassroomService {
    pub fn new_lazy() -> Self {
        Self { storage: None }
    }

    pub(crate) fn get_storage(&self, request: &HttpRequest) -> Arc<dyn Storage> {
        if let Some(storage) = &self.storage {
            storage.clone()
        } else {
            request
                .app_data::<actix_web::web::Data<Arc<dyn Storage>>>()
                .expect("Storage not found in app data")
                .get_ref()
                .clone()
        }
    }

    // 获取当前用户所在的课堂列表
    pub async fn list_classrooms(
        &self,
        request: &HttpRequest,
        query: ClassroomListParams,
    ) -> ActixResult<HttpResponse> {
        list::list_classrooms(self, request, query).await
    }

    pub async fn create_classroom(
        &self,
        request: &HttpRequest,
        classroom_data: CreateClassroomRequest,
    ) -> ActixResult<HttpResponse> {
        create::create_classroom(self, request, classroom_data).await
    }

    // 根据课堂 ID 获取课堂详情
    pub async fn get_classroom(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
    ) -> ActixResult<HttpResponse> {
        get::get_classroom(self, request, classroom_id).await
    }

    // 根据课堂码预览课堂
    pub async fn preview_by_code(
        &self,
        request: &HttpRequest,
        code: String,
    ) -> ActixResult<HttpResponse> {
        get::preview_by_code(self, request, code).await
    }

    // 更新课堂信息
    pub async fn update_classroom(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        update_data: UpdateClassroomRequest,
    ) -> ActixResult<HttpResponse> {
        update::update_classroom(self, request, classroom_id, update_data).await
    }

    // 删除课堂
    pub async fn delete_classroom(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
    ) -> ActixResult<HttpResponse> {
        delete::delete_classroom(self, request, classroom_id).await
    }
}

/// 校验课堂名称
pub(crate) fn validate_classroom_name(name: &str) -> Result<(), &'static str> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err("Classroom name must not be empty");
    }
    if trimmed.chars().count() > 128 {
        return Err("Classroom name must be at most 128 characters");
    }
    Ok(())
}

/// 校验时间段：时间为 HH:MM 且开始早于结束
///
/// 星期名称不做限制，无法识别的名称在日历同步时跳过。
pub(crate) fn validate_time_slots(slots: &[TimeSlotInput]) -> Result<(), String> {
    for (index, slot) in slots.iter().enumerate() {
        if slot.day.trim().is_empty() {
            return Err(format!("Time slot {index}: day must not be empty"));
        }
        validate_time_range(&slot.start_time, &slot.end_time)
            .map_err(|msg| format!("Time slot {index}: {msg}"))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slot(day: &str, start: &str, end: &str) -> TimeSlotInput {
        TimeSlotInput {
            day: day.to_string(),
            start_time: start.to_string(),
            end_time: end.to_string(),
        }
    }

    #[test]
    fn test_validate_classroom_name() {
        assert!(validate_classroom_name("Physics 101").is_ok());
        assert!(validate_classroom_name("   ").is_err());
        assert!(validate_classroom_name(&"x".repeat(129)).is_err());
    }

    #[test]
    fn test_validate_time_slots() {
        assert!(validate_time_slots(&[slot("Monday", "09:00", "10:30")]).is_ok());
        // 无法识别的星期名称允许保存
        assert!(validate_time_slots(&[slot("Someday", "09:00", "10:30")]).is_ok());
        assert!(validate_time_slots(&[slot("Monday", "10:30", "09:00")]).is_err());
        assert!(validate_time_slots(&[slot("Monday", "9:00", "10:00")]).is_err());
        assert!(validate_time_slots(&[slot("", "09:00", "10:00")]).is_err());
    }
}
