use super::AssessmentService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::assessments::{entities::AssessmentWeight, requests::SetWeightRequest};

/// 设置评分权重（按 (subject_id, category_id) upsert）
///
/// 只校验单个权重的取值，科目内权重之和不强制为 1，
/// 综合成绩的聚合口径由上游自行决定。
pub async fn set_weight(
    service: &AssessmentService,
    req: SetWeightRequest,
) -> Result<AssessmentWeight> {
    if !req.weight.is_finite() || req.weight < 0.0 {
        return Err(SchoolSystemError::validation(format!(
            "无效的权重: {}",
            req.weight
        )));
    }

    let category_id = req.category_id;
    let result = service.storage.set_assessment_weight(req).await;

    match result {
        Err(SchoolSystemError::ForeignKeyViolation(_)) => Err(SchoolSystemError::not_found(
            format!("作业分类不存在: {category_id}"),
        )),
        other => other,
    }
}

/// 列出科目下的全部评分权重
pub async fn list_weights(
    service: &AssessmentService,
    subject_id: i64,
) -> Result<Vec<AssessmentWeight>> {
    service.storage.list_weights_by_subject(subject_id).await
}
