//! SeaORM 存储实现
//!
//! 统一的数据库存储层，支持 SQLite、PostgreSQL 和 MySQL。

mod assessments;
mod assignments;
mod attachments;
mod categories;
mod submissions;

use crate::config::{AppConfig, DatabaseConfig};
use crate::errors::{Result, SchoolSystemError};
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
    /// 创建新的 SeaORM 存储实例（使用全局配置）
    pub async fn new_async() -> Result<Self> {
        let config = AppConfig::get();
        Self::from_database_config(&config.database).await
    }

    /// 从给定数据库配置创建存储实例（测试与嵌入场景使用）
    pub async fn from_database_config(config: &DatabaseConfig) -> Result<Self> {
        let db_url = Self::build_database_url(&config.url)?;

        // 根据数据库类型选择连接方式
        let db = if db_url.starts_with("sqlite://") {
            Self::connect_sqlite(&db_url, config).await?
        } else {
            Self::connect_generic(&db_url, config).await?
        };

        // 运行迁移
        Migrator::up(&db, None)
            .await
            .map_err(|e| SchoolSystemError::database_operation(format!("数据库迁移失败: {e}")))?;

        info!("SeaORM 存储初始化完成，数据库: {}", db_url);

        Ok(Self { db })
    }

    /// 获取底层数据库连接（测试与嵌入场景使用）
    pub fn connection(&self) -> &DatabaseConnection {
        &self.db
    }

    /// SQLite 专用连接（WAL + pragma 优化）
    async fn connect_sqlite(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        use sea_orm::SqlxSqliteConnector;
        use sea_orm::sqlx::sqlite::{
            SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions, SqliteSynchronous,
        };
        use std::str::FromStr;

        let opt = SqliteConnectOptions::from_str(url)
            .map_err(|e| SchoolSystemError::database_config(format!("SQLite URL 解析失败: {e}")))?
            .create_if_missing(true)
            .journal_mode(SqliteJournalMode::Wal)
            .synchronous(SqliteSynchronous::Normal)
            .busy_timeout(Duration::from_secs(5))
            .pragma("cache_size", "-64000")
            .pragma("temp_store", "memory");

        let pool = SqlitePoolOptions::new()
            .max_connections(config.pool_size)
            .min_connections(1)
            .test_before_acquire(true)
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(300))
            .connect_with(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("SQLite 连接失败: {e}")))?;

        Ok(SqlxSqliteConnector::from_sqlx_sqlite_pool(pool))
    }

    /// 通用连接（PostgreSQL、MySQL 等）
    async fn connect_generic(url: &str, config: &DatabaseConfig) -> Result<DatabaseConnection> {
        let mut opt = ConnectOptions::new(url);
        opt.max_connections(config.pool_size)
            .min_connections(5)
            .connect_timeout(Duration::from_secs(config.timeout))
            .acquire_timeout(Duration::from_secs(config.timeout))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .sqlx_logging(false)
            .sqlx_logging_level(tracing::log::LevelFilter::Debug);

        Database::connect(opt)
            .await
            .map_err(|e| SchoolSystemError::database_connection(format!("无法连接到数据库: {e}")))
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
            Err(SchoolSystemError::database_config(format!(
                "无法从 URL 推断数据库类型: {url}. 支持: sqlite://, postgres://, mysql://, 或 .db/.sqlite 文件路径"
            )))
        }
    }
}

// Storage trait 实现
use crate::models::{
    assessments::{
        entities::{Assessment, AssessmentWeight},
        requests::{AssessRequest, SetWeightRequest, UpdateAssessmentRequest},
    },
    assignments::{
        entities::{Assignment, AssignmentCategory},
        requests::{
            AssignmentListQuery, CreateAssignmentRequest, CreateCategoryRequest,
            UpdateAssignmentRequest,
        },
        responses::AssignmentListResponse,
    },
    attachments::entities::{Attachment, SourceType},
    submissions::{
        entities::Submission,
        requests::SubmitRequest,
    },
};
use crate::storage::Storage;
use async_trait::async_trait;

#[async_trait]
impl Storage for SeaOrmStorage {
    // 作业分类模块
    async fn create_category(&self, req: CreateCategoryRequest) -> Result<AssignmentCategory> {
        self.create_category_impl(req).await
    }

    async fn list_categories_by_school(&self, school_id: i64) -> Result<Vec<AssignmentCategory>> {
        self.list_categories_by_school_impl(school_id).await
    }

    // 作业模块
    async fn create_assignment(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        self.create_assignment_impl(created_by, req).await
    }

    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        self.get_assignment_by_id_impl(assignment_id).await
    }

    async fn get_assignment_with_submissions(
        &self,
        assignment_id: i64,
    ) -> Result<Option<Assignment>> {
        self.get_assignment_with_submissions_impl(assignment_id)
            .await
    }

    async fn list_assignments_by_subject_class(
        &self,
        subject_class_id: i64,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        self.list_assignments_by_subject_class_impl(subject_class_id, query)
            .await
    }

    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        self.update_assignment_impl(assignment_id, update).await
    }

    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool> {
        self.delete_assignment_impl(assignment_id).await
    }

    // 提交模块
    async fn upsert_submission(&self, user_id: i64, req: SubmitRequest) -> Result<Submission> {
        self.upsert_submission_impl(user_id, req).await
    }

    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>> {
        self.get_submission_by_id_impl(submission_id).await
    }

    async fn list_submissions_by_assignment(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        self.list_submissions_by_assignment_impl(assignment_id)
            .await
    }

    async fn update_submission(
        &self,
        submission_id: i64,
        attachments: Option<Vec<i64>>,
    ) -> Result<Option<Submission>> {
        self.update_submission_impl(submission_id, attachments)
            .await
    }

    async fn delete_submission(&self, submission_id: i64) -> Result<bool> {
        self.delete_submission_impl(submission_id).await
    }

    // 评分模块
    async fn upsert_assessment(&self, assessed_by: i64, req: AssessRequest) -> Result<Assessment> {
        self.upsert_assessment_impl(assessed_by, req).await
    }

    async fn get_assessment_by_submission(
        &self,
        submission_id: i64,
    ) -> Result<Option<Assessment>> {
        self.get_assessment_by_submission_impl(submission_id).await
    }

    async fn update_assessment(
        &self,
        submission_id: i64,
        update: UpdateAssessmentRequest,
    ) -> Result<Option<Assessment>> {
        self.update_assessment_impl(submission_id, update).await
    }

    async fn delete_assessment(&self, submission_id: i64) -> Result<bool> {
        self.delete_assessment_impl(submission_id).await
    }

    // 评分权重模块
    async fn set_assessment_weight(&self, req: SetWeightRequest) -> Result<AssessmentWeight> {
        self.set_assessment_weight_impl(req).await
    }

    async fn list_weights_by_subject(&self, subject_id: i64) -> Result<Vec<AssessmentWeight>> {
        self.list_weights_by_subject_impl(subject_id).await
    }

    // 附件模块
    async fn link_attachment(
        &self,
        school_id: i64,
        source_type: SourceType,
        source_id: i64,
        media_id: i64,
    ) -> Result<Attachment> {
        self.link_attachment_impl(school_id, source_type, source_id, media_id)
            .await
    }

    async fn get_attachments_by_source(
        &self,
        source_type: SourceType,
        source_id: i64,
    ) -> Result<Vec<Attachment>> {
        self.get_attachments_by_source_impl(source_type, source_id)
            .await
    }

    async fn unlink_attachments_by_source(
        &self,
        source_type: SourceType,
        source_id: i64,
    ) -> Result<u64> {
        self.unlink_attachments_by_source_impl(source_type, source_id)
            .await
    }
}
