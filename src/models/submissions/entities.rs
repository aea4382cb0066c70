use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::assessments::entities::Assessment;
use crate::models::attachments::entities::Attachment;

// 提交生命周期状态
//
// 显式状态取代可空删除时间戳：active 为在读提交，withdrawn 为已撤回。
// 重新提交时撤回的行会被复活（状态翻回 active），行 ID 不变。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub enum SubmissionStatus {
    Active,    // 在读
    Withdrawn, // 已撤回
}

impl SubmissionStatus {
    pub const ACTIVE: &'static str = "active";
    pub const WITHDRAWN: &'static str = "withdrawn";
}

impl<'de> Deserialize<'de> for SubmissionStatus {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SubmissionStatus::ACTIVE => Ok(SubmissionStatus::Active),
            SubmissionStatus::WITHDRAWN => Ok(SubmissionStatus::Withdrawn),
            _ => Err(serde::de::Error::custom(format!(
                "无效的提交状态: '{s}'. 支持的状态: active, withdrawn"
            ))),
        }
    }
}

impl std::fmt::Display for SubmissionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmissionStatus::Active => write!(f, "{}", SubmissionStatus::ACTIVE),
            SubmissionStatus::Withdrawn => write!(f, "{}", SubmissionStatus::WITHDRAWN),
        }
    }
}

impl std::str::FromStr for SubmissionStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "active" => Ok(SubmissionStatus::Active),
            "withdrawn" => Ok(SubmissionStatus::Withdrawn),
            _ => Err(format!("Invalid submission status: {s}")),
        }
    }
}

// 提交
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct Submission {
    // 唯一 ID
    pub id: i64,
    // 所属学校 ID
    pub school_id: i64,
    // 所属作业 ID
    pub assignment_id: i64,
    // 提交者 ID
    pub user_id: i64,
    // 生命周期状态
    pub status: SubmissionStatus,
    // 提交时间
    pub submitted_at: chrono::DateTime<chrono::Utc>,
    // 是否迟交（每次读取按作业当前截止时间推导，不落库）
    pub is_late: bool,
    // 附件（服务层组装）
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attachments: Vec<Attachment>,
    // 评分（读取时加载）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assessment: Option<Assessment>,
}
