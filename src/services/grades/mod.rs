pub mod grade;
pub mod list;

use actix_web::{HttpRequest, HttpResponse, Result as ActixResult};
use std::sync::Arc;

use crate::models::grades::requests::GradeRequest;
use crate::storage::Storage;

pub struct GradeService {
    storage: Option<Arc<dyn Storage>>,
}

impl GradeService {
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

    // 为提交评分
    pub async fn grade_submission(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
        submission_id: i64,
        grade_data: GradeRequest,
    ) -> ActixResult<HttpResponse> {
        grade::grade_submission(self, request, classroom_id, submission_id, grade_data).await
    }

    // 课堂成绩列表
    pub async fn list_grades(
        &self,
        request: &HttpRequest,
        classroom_id: i64,
    ) -> ActixResult<HttpResponse> {
        list::list_grades(self, request, classroom_id).await
    }
}

/// 分数必须在 [0, max_score] 内；作业未设满分时只要求非负
pub(crate) fn validate_score(score: f64, max_score: Option<f64>) -> Result<(), String> {
    if !score.is_finite() || score < 0.0 {
        return Err("Score must be a non-negative number".to_string());
    }
    if let Some(max) = max_score
        && score > max
    {
        return Err(format!("Score must not exceed {max}"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_score() {
        assert!(validate_score(0.0, Some(100.0)).is_ok());
        assert!(validate_score(100.0, Some(100.0)).is_ok());
        assert!(validate_score(100.5, Some(100.0)).is_err());
        assert!(validate_score(-1.0, None).is_err());
        assert!(validate_score(250.0, None).is_ok());
        assert!(validate_score(f64::NAN, None).is_err());
    }
}
