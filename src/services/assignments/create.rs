use tracing::info;

use super::{AssignmentService, detail};
use crate::errors::{Result, SchoolSystemError};
use crate::models::assignments::entities::Assignment;
use crate::models::assignments::requests::CreateAssignmentRequest;

/// 创建作业
pub async fn create_assignment(
    service: &AssignmentService,
    created_by: i64,
    req: CreateAssignmentRequest,
) -> Result<Assignment> {
    if req.title.trim().is_empty() {
        return Err(SchoolSystemError::validation("作业标题不能为空"));
    }

    let result = service.storage.create_assignment(created_by, req).await;

    // 分类外键失败时给出可读的业务错误
    let assignment = match result {
        Err(SchoolSystemError::ForeignKeyViolation(_)) => {
            return Err(SchoolSystemError::not_found("作业分类不存在"));
        }
        other => other?,
    };

    info!(
        "作业已创建: id={}, 科目班级={}, 创建者={}",
        assignment.id, assignment.subject_class_id, created_by
    );

    detail::attach_metadata(service, assignment).await
}
