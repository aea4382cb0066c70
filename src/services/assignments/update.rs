use super::{AssignmentService, detail};
use crate::errors::{Result, SchoolSystemError};
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::UpdateAssignmentRequest;

/// 更新作业
///
/// 字段为局部补丁；attachments 一旦出现则整组替换。
pub async fn update_assignment(
    service: &AssignmentService,
    assignment_id: i64,
    req: UpdateAssignmentRequest,
) -> Result<Assignment> {
    if let Some(ref title) = req.title
        && title.trim().is_empty()
    {
        return Err(SchoolSystemError::validation("作业标题不能为空"));
    }

    let result = service.storage.update_assignment(assignment_id, req).await;

    let assignment = match result {
        Err(SchoolSystemError::ForeignKeyViolation(_)) => {
            return Err(SchoolSystemError::not_found("作业分类不存在"));
        }
        other => other?,
    };

    let assignment = assignment
        .ok_or_else(|| SchoolSystemError::not_found(format!("作业不存在: {assignment_id}")))?;

    detail::attach_metadata(service, assignment).await
}
