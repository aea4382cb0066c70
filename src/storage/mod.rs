use std::sync::Arc;

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
    submissions::{entities::Submission, requests::SubmitRequest},
};

use crate::errors::Result;

pub mod sea_orm_storage;

#[async_trait::async_trait]
pub trait Storage: Send + Sync {
    /// 作业分类管理方法
    // 创建分类（不做重名检查，与历史行为一致）
    async fn create_category(&self, req: CreateCategoryRequest) -> Result<AssignmentCategory>;
    // 列出学校下的分类
    async fn list_categories_by_school(&self, school_id: i64) -> Result<Vec<AssignmentCategory>>;

    /// 作业管理方法
    // 创建作业（作业行与附件链接在同一事务内写入）
    async fn create_assignment(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment>;
    // 通过ID获取作业（软删除的行不可见）
    async fn get_assignment_by_id(&self, assignment_id: i64) -> Result<Option<Assignment>>;
    // 通过ID获取作业及其在读提交（含评分）
    async fn get_assignment_with_submissions(
        &self,
        assignment_id: i64,
    ) -> Result<Option<Assignment>>;
    // 列出科目班级下的作业
    async fn list_assignments_by_subject_class(
        &self,
        subject_class_id: i64,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse>;
    // 更新作业（部分字段；附件出现则整组替换）
    async fn update_assignment(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>>;
    // 软删除作业（不级联提交与附件）
    async fn delete_assignment(&self, assignment_id: i64) -> Result<bool>;

    /// 提交管理方法
    // 按 (assignment_id, user_id) upsert：已撤回的行复活并保留原 ID
    async fn upsert_submission(&self, user_id: i64, req: SubmitRequest) -> Result<Submission>;
    // 通过ID获取在读提交（含评分，is_late 按当前截止时间推导）
    async fn get_submission_by_id(&self, submission_id: i64) -> Result<Option<Submission>>;
    // 列出作业下的在读提交
    async fn list_submissions_by_assignment(&self, assignment_id: i64)
    -> Result<Vec<Submission>>;
    // 更新提交（重置提交时间并整组替换附件）
    async fn update_submission(
        &self,
        submission_id: i64,
        attachments: Option<Vec<i64>>,
    ) -> Result<Option<Submission>>;
    // 撤回提交（解除附件链接并标记 withdrawn）
    async fn delete_submission(&self, submission_id: i64) -> Result<bool>;

    /// 评分管理方法
    // 按 submission_id upsert：重复评分原地覆盖
    async fn upsert_assessment(&self, assessed_by: i64, req: AssessRequest) -> Result<Assessment>;
    // 获取提交的评分
    async fn get_assessment_by_submission(&self, submission_id: i64)
    -> Result<Option<Assessment>>;
    // 更新评分（零行命中返回 None）
    async fn update_assessment(
        &self,
        submission_id: i64,
        update: UpdateAssessmentRequest,
    ) -> Result<Option<Assessment>>;
    // 删除评分
    async fn delete_assessment(&self, submission_id: i64) -> Result<bool>;

    /// 评分权重管理方法
    // 按 (subject_id, category_id) upsert
    async fn set_assessment_weight(&self, req: SetWeightRequest) -> Result<AssessmentWeight>;
    // 列出科目下的权重（含分类）
    async fn list_weights_by_subject(&self, subject_id: i64) -> Result<Vec<AssessmentWeight>>;

    /// 附件管理方法
    // 链接媒体文件到来源实体（允许重复链接）
    async fn link_attachment(
        &self,
        school_id: i64,
        source_type: SourceType,
        source_id: i64,
        media_id: i64,
    ) -> Result<Attachment>;
    // 获取来源实体的全部附件（含媒体元数据）
    async fn get_attachments_by_source(
        &self,
        source_type: SourceType,
        source_id: i64,
    ) -> Result<Vec<Attachment>>;
    // 解除来源实体的全部附件链接（硬删除），返回删除行数
    async fn unlink_attachments_by_source(
        &self,
        source_type: SourceType,
        source_id: i64,
    ) -> Result<u64>;
}

pub async fn create_storage() -> Result<Arc<dyn Storage>> {
    let storage = sea_orm_storage::SeaOrmStorage::new_async().await?;
    Ok(Arc::new(storage))
}
