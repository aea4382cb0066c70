//! 附件存储操作
//!
//! 多态链接的读写入口。`link_media` / `unlink_source` 同时被作业与提交的
//! 事务性写入复用，保证父行与附件行要么一起落库、要么一起回滚。

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::attachments::{ActiveModel, Column, Entity as Attachments};
use crate::entity::media::{Column as MediaColumn, Entity as Media};
use crate::errors::Result;
use crate::models::attachments::entities::{Attachment, SourceType};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, QueryOrder, Set,
};

/// 为来源实体链接一组媒体文件（在给定连接/事务上执行）
pub(crate) async fn link_media<C: ConnectionTrait>(
    conn: &C,
    school_id: i64,
    source_type: SourceType,
    source_id: i64,
    media_ids: &[i64],
) -> Result<()> {
    let now = chrono::Utc::now().timestamp();

    for media_id in media_ids {
        let model = ActiveModel {
            school_id: Set(school_id),
            source_type: Set(source_type.to_string()),
            source_id: Set(source_id),
            media_id: Set(*media_id),
            created_at: Set(now),
            ..Default::default()
        };

        model.insert(conn).await?;
    }

    Ok(())
}

/// 解除来源实体的全部附件链接（在给定连接/事务上执行）
pub(crate) async fn unlink_source<C: ConnectionTrait>(
    conn: &C,
    source_type: SourceType,
    source_id: i64,
) -> Result<u64> {
    let result = Attachments::delete_many()
        .filter(Column::SourceType.eq(source_type.to_string()))
        .filter(Column::SourceId.eq(source_id))
        .exec(conn)
        .await?;

    Ok(result.rows_affected)
}

impl SeaOrmStorage {
    /// 链接单个媒体文件，返回带媒体元数据的附件
    pub async fn link_attachment_impl(
        &self,
        school_id: i64,
        source_type: SourceType,
        source_id: i64,
        media_id: i64,
    ) -> Result<Attachment> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            school_id: Set(school_id),
            source_type: Set(source_type.to_string()),
            source_id: Set(source_id),
            media_id: Set(media_id),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;

        let media = Media::find_by_id(media_id).one(&self.db).await?;

        let mut attachment = result.into_attachment();
        attachment.media = media.map(|m| m.into_media());
        Ok(attachment)
    }

    /// 获取来源实体的全部附件（按 ID 升序，即插入顺序）
    pub async fn get_attachments_by_source_impl(
        &self,
        source_type: SourceType,
        source_id: i64,
    ) -> Result<Vec<Attachment>> {
        let rows = Attachments::find()
            .filter(Column::SourceType.eq(source_type.to_string()))
            .filter(Column::SourceId.eq(source_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        // 批量查询媒体元数据
        let media_ids: Vec<i64> = rows
            .iter()
            .map(|a| a.media_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let media = Media::find()
            .filter(MediaColumn::Id.is_in(media_ids))
            .all(&self.db)
            .await?;

        let media_map: HashMap<i64, _> = media.into_iter().map(|m| (m.id, m)).collect();

        Ok(rows
            .into_iter()
            .map(|row| {
                let media = media_map.get(&row.media_id).cloned();
                let mut attachment = row.into_attachment();
                attachment.media = media.map(|m| m.into_media());
                attachment
            })
            .collect())
    }

    /// 解除来源实体的全部附件链接
    pub async fn unlink_attachments_by_source_impl(
        &self,
        source_type: SourceType,
        source_id: i64,
    ) -> Result<u64> {
        unlink_source(&self.db, source_type, source_id).await
    }
}
