use serde::Deserialize;
use ts_rs::TS;

/// 提交作业请求
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct SubmitRequest {
    pub school_id: i64,
    pub assignment_id: i64,
    pub attachments: Option<Vec<i64>>, // 媒体文件 ID 列表
}

/// 更新提交请求
///
/// 只替换附件并重置提交时间，不重新校验截止时间（与 submit 的不对称
/// 行为来自产品侧"教师代收迟交作业"的使用方式，待产品确认）。
#[derive(Debug, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/submission.ts")]
pub struct UpdateSubmissionRequest {
    pub attachments: Option<Vec<i64>>, // 媒体文件 ID 列表
}
