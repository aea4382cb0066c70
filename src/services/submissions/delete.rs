use super::SubmissionService;
use crate::errors::{Result, SchoolSystemError};

/// 撤回提交
///
/// 行保留为 withdrawn 状态，附件链接被清理，评分保留。
/// 同一用户随后重新提交会复活这一行。
pub async fn delete_submission(service: &SubmissionService, submission_id: i64) -> Result<()> {
    let deleted = service.storage.delete_submission(submission_id).await?;

    if !deleted {
        return Err(SchoolSystemError::not_found(format!(
            "提交不存在: {submission_id}"
        )));
    }

    Ok(())
}
