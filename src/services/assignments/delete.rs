use tracing::info;

use super::AssignmentService;
use crate::errors::{Result, SchoolSystemError};

/// 软删除作业
///
/// 提交与评分原样保留；作业附件链接也保留，随作业一起"归档"。
pub async fn delete_assignment(service: &AssignmentService, assignment_id: i64) -> Result<()> {
    let deleted = service.storage.delete_assignment(assignment_id).await?;

    if !deleted {
        return Err(SchoolSystemError::not_found(format!(
            "作业不存在: {assignment_id}"
        )));
    }

    info!("作业已下架: id={}", assignment_id);
    Ok(())
}
