use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assignments::entities::AssignmentCategory;

// 评分
//
// 每个提交至多一条，重复评分为原地覆盖（按 submission_id 定位）。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct Assessment {
    // 唯一 ID
    pub id: i64,
    // 所属提交 ID
    pub submission_id: i64,
    // 分数
    pub score: f64,
    // 评语
    pub feedback: Option<String>,
    // 评分人 ID
    pub assessed_by: i64,
    // 评分时间
    pub assessed_at: chrono::DateTime<chrono::Utc>,
}

// 评分权重
//
// 声明某分类在科目综合成绩中的占比。综合成绩本身不在本系统计算，
// 这里只是配置表，聚合留作扩展点。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assessment.ts")]
pub struct AssessmentWeight {
    // 唯一 ID
    pub id: i64,
    // 科目 ID
    pub subject_id: i64,
    // 作业分类 ID
    pub category_id: i64,
    // 权重
    pub weight: f64,
    // 作业分类（读取时加载）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<AssignmentCategory>,
}
