use serde::{Deserialize, Serialize};
use ts_rs::TS;

// 媒体文件元数据
//
// 由外部媒体服务负责上传与存储，这里只作为附件组装的只读元数据。
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export, export_to = "../frontend/src/types/generated/media.ts")]
pub struct Media {
    // 唯一 ID
    pub id: i64,
    // 所属学校 ID
    pub school_id: i64,
    // 文件名
    pub name: String,
    // 文件大小（字节）
    pub file_size: i64,
    // MIME 类型
    pub mime_type: String,
    // 文件访问 URL
    pub file_url: String,
    // 归属实体类型（由媒体服务维护）
    pub owner_type: String,
    // 归属实体 ID
    pub owner_id: i64,
    // 创建时间
    pub created_at: chrono::DateTime<chrono::Utc>,
}
