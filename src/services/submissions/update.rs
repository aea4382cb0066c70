use super::SubmissionService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::attachments::entities::SourceType;
use crate::models::submissions::{entities::Submission, requests::UpdateSubmissionRequest};

/// 更新提交
///
/// 重置提交时间并整组替换附件。这里不做截止时间门禁，
/// 已入库的提交允许在截止后继续修订，is_late 随新提交时间重新推导。
pub async fn update_submission(
    service: &SubmissionService,
    submission_id: i64,
    req: UpdateSubmissionRequest,
) -> Result<Submission> {
    let mut submission = service
        .storage
        .update_submission(submission_id, req.attachments)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("提交不存在: {submission_id}")))?;

    submission.attachments = service
        .storage
        .get_attachments_by_source(SourceType::Submission, submission.id)
        .await?;

    Ok(submission)
}
