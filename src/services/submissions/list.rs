use super::SubmissionService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::attachments::entities::SourceType;
use crate::models::submissions::entities::Submission;

/// 列出作业的全部在册提交（按提交时间升序）
pub async fn list_by_assignment(
    service: &SubmissionService,
    assignment_id: i64,
) -> Result<Vec<Submission>> {
    // 区分"作业不存在"与"作业没有提交"
    service
        .storage
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("作业不存在: {assignment_id}")))?;

    let mut submissions = service
        .storage
        .list_submissions_by_assignment(assignment_id)
        .await?;

    for submission in &mut submissions {
        submission.attachments = service
            .storage
            .get_attachments_by_source(SourceType::Submission, submission.id)
            .await?;
    }

    Ok(submissions)
}
