//! 附件服务
//!
//! 多态链接的薄封装。业务来源（作业、提交等）的附件随写随删走各自
//! 服务的事务，这里提供跨来源的通用入口。

use std::sync::Arc;

use crate::errors::Result;
use crate::models::attachments::entities::{Attachment, SourceType};
use crate::storage::Storage;

pub struct AttachmentService {
    storage: Arc<dyn Storage>,
}

impl AttachmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    /// 为来源实体链接一个媒体文件。重复链接同一媒体是允许的
    pub async fn link(
        &self,
        school_id: i64,
        source_type: SourceType,
        source_id: i64,
        media_id: i64,
    ) -> Result<Attachment> {
        self.storage
            .link_attachment(school_id, source_type, source_id, media_id)
            .await
    }

    /// 获取来源实体的全部附件（按链接顺序）
    pub async fn get_by_source(
        &self,
        source_type: SourceType,
        source_id: i64,
    ) -> Result<Vec<Attachment>> {
        self.storage
            .get_attachments_by_source(source_type, source_id)
            .await
    }

    /// 解除来源实体的全部附件链接，返回解除的条数
    pub async fn unlink_by_source(
        &self,
        source_type: SourceType,
        source_id: i64,
    ) -> Result<u64> {
        self.storage
            .unlink_attachments_by_source(source_type, source_id)
            .await
    }
}
