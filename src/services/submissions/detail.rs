use super::SubmissionService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::attachments::entities::SourceType;
use crate::models::submissions::entities::Submission;

/// 获取提交详情（含附件与评分）。已撤回的提交视同不存在
pub async fn get_submission(
    service: &SubmissionService,
    submission_id: i64,
) -> Result<Submission> {
    let mut submission = service
        .storage
        .get_submission_by_id(submission_id)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("提交不存在: {submission_id}")))?;

    submission.attachments = service
        .storage
        .get_attachments_by_source(SourceType::Submission, submission.id)
        .await?;

    Ok(submission)
}
