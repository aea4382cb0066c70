use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::attachments::entities::Attachment;
use crate::models::submissions::entities::Submission;

// 作业分类（评分桶，如 "测验"、"项目"）
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct AssignmentCategory {
    // 唯一 ID
    pub id: i64,
    // 所属学校 ID
    pub school_id: i64,
    // 分类名称
    pub name: String,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}

// 科目班级头信息
//
// 来自外部的学校/科目班级查询服务，仅用于列表与详情的头部展示。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct SubjectClassHeader {
    pub id: i64,
    pub subject_id: i64,
    pub subject_name: String,
    pub class_name: String,
}

// 作业
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/assignment.ts")]
pub struct Assignment {
    // 唯一 ID
    pub id: i64,
    // 所属学校 ID
    pub school_id: i64,
    // 所属科目班级 ID
    pub subject_class_id: i64,
    // 作业分类 ID
    pub category_id: i64,
    // 作业标题
    pub title: String,
    // 作业描述
    pub description: Option<String>,
    // 截止时间
    pub deadline: Option<chrono::DateTime<chrono::Utc>>,
    // 是否允许迟交
    pub allow_late_submission: bool,
    // 创建者 ID
    pub created_by: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
    // 更新时间
    pub updated_at: chrono::DateTime<chrono::Utc>,
    // 作业分类（读取时加载）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<AssignmentCategory>,
    // 科目班级头信息（读取时由外部目录服务补充）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_class: Option<SubjectClassHeader>,
    // 附件（服务层组装）
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub attachments: Vec<Attachment>,
    // 提交列表（仅 get_assignment_with_submissions 填充）
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub submissions: Vec<Submission>,
}
