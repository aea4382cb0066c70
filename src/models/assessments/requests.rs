use serde::Deserialize;
use ts_rs::TS;

/// 评分请求（按 submission_id upsert）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct AssessRequest {
    pub submission_id: i64,
    pub score: f64,
    pub feedback: Option<String>,
}

/// 更新评分请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct UpdateAssessmentRequest {
    pub score: Option<f64>,
    pub feedback: Option<String>,
}

/// 设置评分权重请求（按 (subject_id, category_id) upsert）
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct SetWeightRequest {
    pub subject_id: i64,
    pub category_id: i64,
    pub weight: f64,
}
