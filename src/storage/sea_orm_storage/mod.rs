//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod calendar;
mod classrooms;
mod comments;
mod files;
mod grades;
mod invitations;
mod members;
mod posts;
mod sections;
mod submissions;
mod users;

use crate::config::AppConfig;
use crate::errors::{ClassroomError, Result};
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use std::time::Duration;
use tracing::info;

/// SeaORM 存储实现
#[derive(Clone)]
pub struct SeaOrmStorage {
    pub(crate) db: DatabaseConnection,
}

impl SeaOrmStorage {
    /// 创建新的 SeaORM 存储实例
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        let db_url = Self::build_database_url(&config.database.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 基于已有连接创建存储实例并执行迁移（用于内存数据库等场景）
    pub async fn from_connection(db: DatabaseConnection) -> Result<Self> {
        Migrator::up(&db, None)
            .await
            .map_err(|e| ClassroomError::database_operation(format!("数据库迁移失败: {e}")))?;

        Ok(Self { db })
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| ClassroomError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory")
            .pragma("mmap_size", "536870912")
            .pragma("wal_autocheckpoint", "1000");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.database.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| ClassroomError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &AppConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.database.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.database.timeout))
            .acquire_timeout(Duration::from_secs(config.database.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| ClassroomError::database_connection(format!("无法连接到数据库: {e}")))
    }

    /// 从 URL 自动推断数据库类型并构建连接 URL
    fn build_database_url(url: &str) -> Result<String> {
        if url.starts_with("sqlite://") {
            Ok(url.to_string())
        } else if url.ends_with(".db") || url.ends_with(".sqlite") || url == ":memory:" {
            Ok(format!("sqlite://{}?mode=rwc", url))
        } else if url.starts_with("postgres://")
            || url.starts_with("postgresql://")
            || url.starts_with("mysql://")
            || url.starts_with("mariadb://")
        {
            Ok(url.to_string())
        } else {
            Err(ClassroomError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
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
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 用户模块
    async fn create_user(&self, user: CreateUserRequest) -> Result<User> {
        self.create_user_impl(user).await
    }

    async fn get_user_by_id(&self, id: i64) -> Result<Option<User>> {
        self.get_user_by_id_impl(id).await
    }

    async fn get_user_by_email(&self, email: &str) -> Result<Option<User>> {
        self.get_user_by_email_impl(email).await
    }

    async fn update_user(&self, id: i64, update: UpdateUserRequest) -> Result<Option<User>> {
        self.update_user_impl(id, update).await
    }

    // 日历凭据模块
    async fn upsert_calendar_credential(
        &self,
        user_id: i64,
        provider: &str,
        access_token: &str,
        expires_at: Option<chrono::DateTime<chrono::Utc>>,
    ) -> Result<CalendarCredential> {
        self.upsert_calendar_credential_impl(user_id, provider, access_token, expires_at)
            .await
    }

    async fn get_calendar_credential(&self, user_id: i64) -> Result<Option<CalendarCredential>> {
        self.get_calendar_credential_impl(user_id).await
    }

    async fn delete_calendar_credential(&self, user_id: i64) -> Result<bool> {
        self.delete_calendar_credential_impl(user_id).await
    }

    // 课堂模块
    async fn create_classroom(
        &self,
        owner_id: i64,
        code: &str,
        classroom: CreateClassroomRequest,
    ) -> Result<Classroom> {
        self.create_classroom_impl(owner_id, code, classroom).await
    }

    async fn get_classroom_by_id(&self, classroom_id: i64) -> Result<Option<Classroom>> {
        self.get_classroom_by_id_impl(classroom_id).await
    }

    async fn get_classroom_by_code(&self, code: &str) -> Result<Option<Classroom>> {
        self.get_classroom_by_code_impl(code).await
    }

    async fn classroom_code_exists(&self, code: &str) -> Result<bool> {
        self.classroom_code_exists_impl(code).await
    }

    async fn list_user_classrooms_with_pagination(
        &self,
        user_id: i64,
        query: ClassroomListQuery,
    ) -> Result<ClassroomListResponse> {
        self.list_user_classrooms_with_pagination_impl(user_id, query)
            .await
    }

    async fn update_classroom(
        &self,
        classroom_id: i64,
        update: UpdateClassroomRequest,
    ) -> Result<Option<Classroom>> {
        self.update_classroom_impl(classroom_id, update).await
    }

    async fn delete_classroom(&self, classroom_id: i64) -> Result<bool> {
        self.delete_classroom_impl(classroom_id).await
    }

    // 成员模块
    async fn is_member(&self, user_id: i64, classroom_id: i64) -> Result<bool> {
        self.is_member_impl(user_id, classroom_id).await
    }

    async fn get_member(
        &self,
        classroom_id: i64,
        user_id: i64,
    ) -> Result<Option<ClassroomMember>> {
        self.get_member_impl(classroom_id, user_id).await
    }

    async fn add_member_if_absent(
        &self,
        classroom_id: i64,
        user_id: i64,
        role: MemberRole,
    ) -> Result<(ClassroomMember, bool)> {
        self.add_member_if_absent_impl(classroom_id, user_id, role)
            .await
    }

    async fn list_members(&self, classroom_id: i64) -> Result<Vec<MemberDetail>> {
        self.list_members_impl(classroom_id).await
    }

    async fn count_members(&self, classroom_id: i64) -> Result<i64> {
        self.count_members_impl(classroom_id).await
    }

    async fn update_member_role(
        &self,
        classroom_id: i64,
        user_id: i64,
        role: MemberRole,
    ) -> Result<Option<ClassroomMember>> {
        self.update_member_role_impl(classroom_id, user_id, role)
            .await
    }

    async fn remove_member(&self, classroom_id: i64, user_id: i64) -> Result<bool> {
        self.remove_member_impl(classroom_id, user_id).await
    }

    // 邀请模块
    async fn create_invitation_if_absent(
        &self,
        sender_id: i64,
        receiver_email: &str,
        classroom_id: i64,
        role: MemberRole,
    ) -> Result<Option<Invitation>> {
        self.create_invitation_if_absent_impl(sender_id, receiver_email, classroom_id, role)
            .await
    }

    async fn get_invitation_by_id(&self, invitation_id: i64) -> Result<Option<Invitation>> {
        self.get_invitation_by_id_impl(invitation_id).await
    }

    async fn delete_invitation(&self, invitation_id: i64) -> Result<bool> {
        self.delete_invitation_impl(invitation_id).await
    }

    async fn list_invitations_by_receiver(&self, email: &str) -> Result<Vec<Invitation>> {
        self.list_invitations_by_receiver_impl(email).await
    }

    async fn list_classroom_invitations(&self, classroom_id: i64) -> Result<Vec<Invitation>> {
        self.list_classroom_invitations_impl(classroom_id).await
    }

    // 分区模块
    async fn create_section(
        &self,
        classroom_id: i64,
        section: CreateSectionRequest,
    ) -> Result<Section> {
        self.create_section_impl(classroom_id, section).await
    }

    async fn get_section_by_id(&self, section_id: i64) -> Result<Option<Section>> {
        self.get_section_by_id_impl(section_id).await
    }

    async fn list_sections(&self, classroom_id: i64) -> Result<Vec<Section>> {
        self.list_sections_impl(classroom_id).await
    }

    async fn delete_section(&self, section_id: i64) -> Result<bool> {
        self.delete_section_impl(section_id).await
    }

    // 帖子模块
    async fn create_post(
        &self,
        classroom_id: i64,
        author_id: i64,
        post: CreatePostRequest,
    ) -> Result<Post> {
        self.create_post_impl(classroom_id, author_id, post).await
    }

    async fn get_post_by_id(&self, post_id: i64) -> Result<Option<Post>> {
        self.get_post_by_id_impl(post_id).await
    }

    async fn list_posts_with_pagination(
        &self,
        classroom_id: i64,
        query: PostListQuery,
    ) -> Result<PostListResponse> {
        self.list_posts_with_pagination_impl(classroom_id, query)
            .await
    }

    async fn update_post(&self, post_id: i64, update: UpdatePostRequest) -> Result<Option<Post>> {
        self.update_post_impl(post_id, update).await
    }

    async fn delete_post(&self, post_id: i64) -> Result<bool> {
        self.delete_post_impl(post_id).await
    }

    // 评论模块
    async fn create_comment(
        &self,
        post_id: i64,
        author_id: i64,
        content: &str,
    ) -> Result<Comment> {
        self.create_comment_impl(post_id, author_id, content).await
    }

    async fn list_comments(&self, post_id: i64) -> Result<Vec<Comment>> {
        self.list_comments_impl(post_id).await
    }

    // 提交模块
    async fn upsert_submission(
        &self,
        post_id: i64,
        user_id: i64,
        content: Option<String>,
    ) -> Result<Submission> {
        self.upsert_submission_impl(post_id, user_id, content).await
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn list_submissions(
        &self,
        post_id: i64,
        user_id: Option<i64>,
    ) -> Result<Vec<Submission>> {
        self.list_submissions_impl(post_id, user_id).await
    }

    // 评分模块
    async fn upsert_grade(
        &self,
        submission_id: i64,
        grader_id: i64,
        score: f64,
        feedback: Option<String>,
    ) -> Result<Grade> {
        self.upsert_grade_impl(submission_id, grader_id, score, feedback)
            .await
    }

    async fn list_classroom_grades(
        &self,
        classroom_id: i64,
        user_id: Option<i64>,
    ) -> Result<Vec<GradeDetail>> {
        self.list_classroom_grades_impl(classroom_id, user_id).await
    }

    // 文件模块
    async fn create_file(&self, file: CreateFileRequest) -> Result<File> {
        self.create_file_impl(file).await
    }

    async fn get_file_by_id(&self, file_id: i64) -> Result<Option<File>> {
        self.get_file_by_id_impl(file_id).await
    }
}
