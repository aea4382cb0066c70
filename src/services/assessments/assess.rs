use super::AssessmentService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::assessments::{entities::Assessment, requests::AssessRequest};

/// 评分（按 submission_id upsert）
///
/// 已撤回的提交同样可以评分，撤回只是把提交移出在册名单。
pub async fn assess(
    service: &AssessmentService,
    assessed_by: i64,
    req: AssessRequest,
) -> Result<Assessment> {
    if !req.score.is_finite() || req.score < 0.0 {
        return Err(SchoolSystemError::validation(format!(
            "无效的分数: {}",
            req.score
        )));
    }

    let submission_id = req.submission_id;
    let result = service.storage.upsert_assessment(assessed_by, req).await;

    // 提交外键失败时给出可读的业务错误
    match result {
        Err(SchoolSystemError::ForeignKeyViolation(_)) => Err(SchoolSystemError::not_found(
            format!("提交不存在: {submission_id}"),
        )),
        other => other,
    }
}
