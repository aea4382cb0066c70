use chrono::Utc;
use tracing::warn;

use super::SubmissionService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::attachments::entities::SourceType;
use crate::models::submissions::{entities::Submission, requests::SubmitRequest};

/// 提交作业
///
/// 截止时间门禁只在这里执行：作业不允许迟交且已过截止时间的，
/// 整个提交被拒绝，不落任何数据。允许迟交的照常入库，
/// 读取时按当前截止时间推导 is_late。
pub async fn submit(
    service: &SubmissionService,
    user_id: i64,
    req: SubmitRequest,
) -> Result<Submission> {
    let assignment = service
        .storage
        .get_assignment_by_id(req.assignment_id)
        .await?
        .ok_or_else(|| {
            SchoolSystemError::not_found(format!("作业不存在: {}", req.assignment_id))
        })?;

    if !assignment.allow_late_submission
        && let Some(deadline) = assignment.deadline
        && Utc::now() > deadline
    {
        warn!(
            "用户 {} 对作业 {} 的提交已过截止时间，被拒绝",
            user_id, assignment.id
        );
        return Err(SchoolSystemError::submission_past_due(format!(
            "作业已过截止时间，不接受提交: {}",
            assignment.title
        )));
    }

    let mut submission = service.storage.upsert_submission(user_id, req).await?;

    submission.attachments = service
        .storage
        .get_attachments_by_source(SourceType::Submission, submission.id)
        .await?;

    Ok(submission)
}
