use std::sync::Arc;

use crate::models::{
    calendar::entities::CalendarCredential,
    classrooms::{
        entities::Classroom,
        requests::{ClassroomListQuery, CreateClassroomRequest, UpdateClassroomRequest},
        responses::ClassroomListResponse,
    },
    comments::entities::Comment,
    files::{entities::File, requests::CreateFileRequest},
    grades::entities::{Grade, GradeDetail},
    invitations::entities::Invitation,
    members::{
        entities::{ClassroomMember, MemberRole},
        responses::MemberDetail,
    },
    posts::{
        entities::Post,
        requests::{CreatePostRequest, PostListQuery, UpdatePostRequest},
        responses::PostListResponse,
    },
    sections::{entities::Section, requests::CreateSectionRequest},
    submissions::entities::Submission,
    users::{
        entities::User,
        requests::{CreateUserRequest, UpdateUserRequest},
    },
};

use crate::errors::Result;

pub mod sea_orm_storage;

pub use sea_orm_storage::SeaOrmStorage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 用户管理方法
    // 创建用户
    async fn create_user(&self, user: CreateUserRequest) -> Result<User>;
    // 通过ID获取用户信息
    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>>;
    // 通过邮箱获取用户信息（不区分大小写）
    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>>;
    // 更新用户资料
    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>>;

    /// 外部日历凭据
    // 绑定或替换凭据
    async fn upsert_calendar_credential(
        &self,
        user_id: i64,
        provider: &str,
        access_token: &str,
        expires_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<CalendarCredential>;
    async fn get_calendar_credential(&self, user_id: i64) -> Result<Option<CalendarCredential>>;
    async fn delete_calendar_credential(&self, user_id: i64) -> Result<bool>;

    /// 课堂管理方法
    // 创建课堂（含时间段与创建者的教师成员关系，单事务）
    async fn create_classroom(
        &self,
        owner_id: i64,
        code: &str,
        classroom: CreateClassroomRequest,
    ) -> Result<Classroom>;
    async fn get_classroom_by_id(&self, classroom_id: i64) -> Result<Option<Classroom>>;
    async fn get_classroom_by_code(&self, code: &str) -> Result<Option<Classroom>>;
    async fn classroom_code_exists(&self, code: &str) -> Result<bool>;
    // 列出用户所在的课堂
    async fn list_user_classrooms_with_pagination(
        &self,
        user_id: i64,
        query: ClassroomListQuery,
    ) -> Result<ClassroomListResponse>;
    async fn update_classroom(
        &self,
        classroom_id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>>;
    async fn delete_classroom(&self, classroom_id: i64) -> Result<bool>;

    /// 成员关系
    async fn is_member(&self, user_id: i64, classroom_id: i64) -> Result<bool>;
    async fn get_member(&self, classroom_id: i64, user_id: i64)
    -> Result<Option<ClassroomMember>>;
    // 不存在时插入；返回成员关系以及本次是否新建
    async fn add_member_if_absent(
        &self,
        classroom_id: i64,
        user_id: i64,
        role: MemberRole,
    ) -> Result<(ClassroomMember, bool)>;
    async fn list_members(&self, classroom_id: i64) -> Result<Vec<MemberDetail>>;
    async fn count_members(&self, classroom_id: i64) -> Result<i64>;
    async fn update_member_role(
        &self,
        classroom_id: i64,
        user_id: i64,
        role: MemberRole,
    ) -> Result<Option<ClassroomMember>>;
    async fn remove_member(&self, classroom_id: i64, user_id: i64) -> Result<bool>;

    /// 邀请
    // 不存在时插入；已有相同 (发送者, 邮箱, 课堂) 的邀请时返回 None
    async fn create_invitation_if_absent(
        &self,
        sender_id: i64,
        receiver_email: &str,
        classroom_id: i64,
        role: MemberRole,
    ) -> Result<Option<Invitation>>;
    async fn get_invitation_by_id(&self, invitation_id: i64) -> Result<Option<Invitation>>;
    async fn delete_invitation(&self, invitation_id: i64) -> Result<bool>;
    async fn list_invitations_by_receiver(&self, email: &str) -> Result<Vec<Invitation>>;
    async fn list_classroom_invitations(&self, classroom_id: i64) -> Result<Vec<Invitation>>;

    /// 分区
    async fn create_section(
        &self,
        classroom_id: i64,
        section: CreateSectionRequest,
    ) -> Result<Section>;
    async fn get_section_by_id(&self, section_id: i64) -> Result<Option<Section>>;
    async fn list_sections(&self, classroom_id: i64) -> Result<Vec<Section>>;
    async fn delete_section(&self, section_id: i64) -> Result<bool>;

    /// 帖子
    async fn create_post(
        &self,
        classroom_id: i64,
        author_id: i64,
        post: CreatePostRequest,
    ) -> Result<Post>;
    async fn get_post_by_id(&self, post_id: i64) -> Result<Option<Post>>;
    async fn list_posts_with_pagination(
        &self,
        classroom_id: i64,
        query: PostListQuery,
    ) -> Result<PostListResponse>;
    async fn update_post(&self, post_id: i64, update: UpdatePostRequest) -> Result<Option<Post>>;
    async fn delete_post(&self, post_id: i64) -> Result<bool>;

    /// 评论
    async fn create_comment(&self, post_id: i64, author_id: i64, content: &str)
    -> Result<Comment>;
    async fn list_comments(&self, post_id: i64) -> Result<Vec<Comment>>;

    /// 提交
    // 同一学生重复提交时覆盖内容
    async fn upsert_submission(
        &self,
        post_id: i64,
        user_id: i64,
        content: Option<String>,
    ) -> Result<Submission>;
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // user_id 为 Some 时只返回该学生的提交
    async fn list_submissions(&self, post_id: i64, user_id: Option<i64>)
    -> Result<Vec<Submission>>;

    /// 评分
    async fn upsert_grade(
        &self,
        submission_id: i64,
        grader_id: i64,
        score: f64,
        feedback: Option<String>,
    ) -> Result<Grade>;
    async fn list_classroom_grades(
        &self,
        classroom_id: i64,
        user_id: Option<i64>,
    ) -> Result<Vec<GradeDetail>>;

    /// 文件元数据
    async fn create_file(&self, file: CreateFileRequest) -> Result<File>;
    async fn get_file_by_id(&self, file_id: i64) -> Result<Option<File>>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
