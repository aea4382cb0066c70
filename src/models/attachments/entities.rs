use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::media::entities::Media;

// 附件来源类型
//
// 封闭标签，标识附件挂载在哪类实体上。附件表不存父表外键，
// 归属由 (source_type, source_id) 显式解析。
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export, export_to = "../frontend/src/types/generated/attachment.ts")]
pub enum SourceType {
    Material,   // 课程资料
    Assignment, // 作业
    Feed,       // 动态
    Submission, // 提交
    Comment,    // 评论
}

impl SourceType {
    pub const MATERIAL: &'static str = "material";
    pub const ASSIGNMENT: &'static str = "assignment";
    pub const FEED: &'static str = "feed";
    pub const SUBMISSION: &'static str = "submission";
    pub const COMMENT: &'static str = "comment";
}

impl<'de> Deserialize<'de> for SourceType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        match s.as_str() {
            SourceType::MATERIAL => Ok(SourceType::Material),
            SourceType::ASSIGNMENT => Ok(SourceType::Assignment),
            SourceType::FEED => Ok(SourceType::Feed),
            SourceType::SUBMISSION => Ok(SourceType::Submission),
            SourceType::COMMENT => Ok(SourceType::Comment),
            _ => Err(serde::de::Error::custom(format!(
                "无效的附件来源类型: '{s}'. 支持的类型: material, assignment, feed, submission, comment"
            ))),
        }
    }
}

impl std::fmt::Display for SourceType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SourceType::Material => write!(f, "{}", SourceType::MATERIAL),
            SourceType::Assignment => write!(f, "{}", SourceType::ASSIGNMENT),
            SourceType::Feed => write!(f, "{}", SourceType::FEED),
            SourceType::Submission => write!(f, "{}", SourceType::SUBMISSION),
            SourceType::Comment => write!(f, "{}", SourceType::COMMENT),
        }
    }
}

impl std::str::FromStr for SourceType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "material" => Ok(SourceType::Material),
            "assignment" => Ok(SourceType::Assignment),
            "feed" => Ok(SourceType::Feed),
            "submission" => Ok(SourceType::Submission),
            "comment" => Ok(SourceType::Comment),
            _ => Err(format!("Invalid source type: {s}")),
        }
    }
}

// 附件
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/attachment.ts")]
pub struct Attachment {
    // 唯一 ID
    pub id: i64,
    // 所属学校 ID
    pub school_id: i64,
    // 来源类型
    pub source_type: SourceType,
    // 来源实体 ID
    pub source_id: i64,
    // 关联的媒体文件 ID
    pub media_id: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 媒体文件元数据（读取时组装）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
}
