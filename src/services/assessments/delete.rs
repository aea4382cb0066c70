use super::AssessmentService;
use crate::errors::{Result, SchoolSystemError};

/// 删除评分
pub async fn delete_assessment(service: &AssessmentService, submission_id: i64) -> Result<()> {
    let deleted = service.storage.delete_assessment(submission_id).await?;

    if !deleted {
        return Err(SchoolSystemError::not_found(format!(
            "提交尚未评分: {submission_id}"
        )));
    }

    Ok(())
}
