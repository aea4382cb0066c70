use super::AssignmentService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::assignments::entities::Assignment;
use crate::models::attachments::entities::SourceType;

/// 获取作业详情（含分类、附件与科目班级头信息）
pub async fn get_assignment(
    service: &AssignmentService,
    assignment_id: i64,
) -> Result<Assignment> {
    let assignment = service
        .storage
        .get_assignment_by_id(assignment_id)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("作业不存在: {assignment_id}")))?;

    attach_metadata(service, assignment).await
}

/// 获取作业详情及其全部在册提交（每条提交含附件与评分）
pub async fn get_assignment_with_submissions(
    service: &AssignmentService,
    assignment_id: i64,
) -> Result<Assignment> {
    let assignment = service
        .storage
        .get_assignment_with_submissions(assignment_id)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("作业不存在: {assignment_id}")))?;

    let mut assignment = attach_metadata(service, assignment).await?;

    // 逐条补充提交附件
    for submission in &mut assignment.submissions {
        submission.attachments = service
            .storage
            .get_attachments_by_source(SourceType::Submission, submission.id)
            .await?;
    }

    Ok(assignment)
}

// 补充作业的附件与科目班级头信息
pub(crate) async fn attach_metadata(
    service: &AssignmentService,
    mut assignment: Assignment,
) -> Result<Assignment> {
    assignment.attachments = service
        .storage
        .get_attachments_by_source(SourceType::Assignment, assignment.id)
        .await?;

    assignment.subject_class = service
        .directory
        .get_subject_class(assignment.subject_class_id)
        .await?;

    Ok(assignment)
}
