use super::AssessmentService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::assessments::{entities::Assessment, requests::UpdateAssessmentRequest};

/// 局部更新评分
///
/// 与 assess 不同，这里要求评分已经存在，且不改动评分人与评分时间。
pub async fn update_assessment(
    service: &AssessmentService,
    submission_id: i64,
    req: UpdateAssessmentRequest,
) -> Result<Assessment> {
    if let Some(score) = req.score
        && (!score.is_finite() || score < 0.0)
    {
        return Err(SchoolSystemError::validation(format!(
            "无效的分数: {score}"
        )));
    }

    service
        .storage
        .update_assessment(submission_id, req)
        .await?
        .ok_or_else(|| SchoolSystemError::not_found(format!("提交尚未评分: {submission_id}")))
}
