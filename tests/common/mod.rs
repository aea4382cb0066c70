#![allow(dead_code)]

use std::sync::Arc;

use rust_schoolsystem_next::config::DatabaseConfig;
use rust_schoolsystem_next::models::assignments::requests::{
    CreateAssignmentRequest, CreateCategoryRequest,
};
use rust_schoolsystem_next::services::{
    AssessmentService, AssignmentService, AttachmentService, StaticDirectory, SubmissionService,
};
use rust_schoolsystem_next::storage::Storage;
use rust_schoolsystem_next::storage::sea_orm_storage::SeaOrmStorage;
use sea_orm::{ActiveModelTrait, Set};

pub struct TestContext {
    pub storage: SeaOrmStorage,
    pub assignments: AssignmentService,
    pub submissions: SubmissionService,
    pub assessments: AssessmentService,
    pub attachments: AttachmentService,
}

/// 建立内存数据库上的完整服务栈
///
/// 连接池固定为单连接：每个 SQLite 内存连接都是独立的数据库。
pub async fn setup() -> TestContext {
    setup_with_directory(StaticDirectory::new()).await
}

pub async fn setup_with_directory(directory: StaticDirectory) -> TestContext {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let config = DatabaseConfig {
        url: ":memory:".to_string(),
        pool_size: 1,
        timeout: 5,
    };

    let storage = SeaOrmStorage::from_database_config(&config)
        .await
        .expect("初始化内存数据库失败");

    let shared: Arc<dyn Storage> = Arc::new(storage.clone());

    TestContext {
        assignments: AssignmentService::new(shared.clone(), Arc::new(directory)),
        submissions: SubmissionService::new(shared.clone()),
        assessments: AssessmentService::new(shared.clone()),
        attachments: AttachmentService::new(shared),
        storage,
    }
}

/// 直接向媒体表播种一条元数据（媒体本体由外部服务管理）
pub async fn seed_media(ctx: &TestContext, school_id: i64, name: &str) -> i64 {
    use rust_schoolsystem_next::entity::media;

    let model = media::ActiveModel {
        school_id: Set(school_id),
        name: Set(name.to_string()),
        file_size: Set(2048),
        mime_type: Set("application/pdf".to_string()),
        file_url: Set(format!("https://files.example.com/{name}")),
        owner_type: Set("user".to_string()),
        owner_id: Set(1),
        created_at: Set(chrono::Utc::now().timestamp()),
        ..Default::default()
    };

    model
        .insert(ctx.storage.connection())
        .await
        .expect("播种媒体文件失败")
        .id
}

pub async fn seed_category(ctx: &TestContext, school_id: i64, name: &str) -> i64 {
    ctx.assignments
        .create_category(CreateCategoryRequest {
            school_id,
            name: name.to_string(),
        })
        .await
        .expect("创建作业分类失败")
        .id
}

pub fn assignment_request(
    school_id: i64,
    subject_class_id: i64,
    category_id: i64,
    title: &str,
) -> CreateAssignmentRequest {
    CreateAssignmentRequest {
        school_id,
        subject_class_id,
        category_id,
        title: title.to_string(),
        description: None,
        deadline: None,
        allow_late_submission: None,
        attachments: None,
    }
}
