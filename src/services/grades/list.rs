use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};

use super::GradeService;
use crate::middlewares::RequireClassRole;
use crate::models::ApiResponse;
use crate::services::{error_response, not_member_response};

/// 教师看到全部成绩，学生只看到自己的
pub async fn list_grades(
    service: &GradeService,
    request: &HttpRequest,
    classroom_id: i64,
) -> ActixResult<HttpResponse> {
    let member = match RequireClassRole::extract_member(request) {
        Some(member) => member,
        None => return Ok(not_member_response()),
    };

    let storage = service.get_storage(request);
    let only_user = (!member.role.is_teacher()).then_some(member.user_id);

    match storage.list_classroom_grades(classroom_id, only_user).await {
        Ok(grades) => Ok(HttpResponse::Ok()
            .json(ApiResponse::success(grades, "Grades retrieved successfully"))),
        Err(e) => Ok(error_response(&e, "Failed to list grades")),
    }
}
