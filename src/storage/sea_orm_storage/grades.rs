//! 评分存储操作

use super::SeaOrmStorage;
use crate::entity::grades::{ActiveModel, Column, Entity as Grades};
use crate::entity::posts::Column as PostColumn;
use crate::entity::submissions::{
    Column as SubmissionColumn, Entity as Submissions, Relation as SubmissionRelation,
};
use crate::errors::{ClassroomError, Result};
use crate::models::grades::entities::{Grade, GradeDetail};
use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ColumnTrait, EntityTrait, JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};

impl SeaOrmStorage {
    /// 评分；重复评分时覆盖
    pub async fn upsert_grade_impl(
        &self,
        submission_id: i64,
        grader_id: i64,
        score: f64,
        feedback: Option<String>,
    ) -> Result<Grade> {
        let model = ActiveModel {
            submission_id: Set(submission_id),
            grader_id: Set(grader_id),
            score: Set(score),
            feedback: Set(feedback),
            graded_at: Set(chrono::Utc::now().timestamp()),
            ..Default::default()
        };

        Grades::insert(model)
            .on_conflict(
                OnConflict::column(Column::SubmissionId)
                    .update_columns([
                        Column::GraderId,
                        Column::Score,
                        Column::Feedback,
                        Column::GradedAt,
                    ])
                    .to_owned(),
            )
            .exec_without_returning(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("保存评分失败: {e}")))?;

        let result = Grades::find()
            .filter(Column::SubmissionId.eq(submission_id))
            .one(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询评分失败: {e}")))?;

        result
            .map(|m| m.into_grade())
            .ok_or_else(|| ClassroomError::database_operation("保存评分后未能读取"))
    }

    /// 列出课堂成绩；指定 user_id 时只返回该学生的成绩
    pub async fn list_classroom_grades_impl(
        &self,
        classroom_id: i64,
        user_id: Option<i64>,
    ) -> Result<Vec<GradeDetail>> {
        let mut select = Submissions::find()
            .join(JoinType::InnerJoin, SubmissionRelation::Post.def())
            .filter(PostColumn::ClassroomId.eq(classroom_id));

        if let Some(user_id) = user_id {
            select = select.filter(SubmissionColumn::UserId.eq(user_id));
        }

        let rows = select
            .order_by_desc(SubmissionColumn::UpdatedAt)
            .find_also_related(Grades)
            .all(&self.db)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("查询成绩列表失败: {e}")))?;

        // 只返回已评分的提交
        Ok(rows
            .into_iter()
            .filter_map(|(submission, grade)| {
                let grade = grade?;
                Some(GradeDetail {
                    grade: grade.into_grade(),
                    post_id: submission.post_id,
                    user_id: submission.user_id,
                })
            })
            .collect())
    }
}
