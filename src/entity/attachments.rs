//! 附件实体
//!
//! (source_type, source_id) 为多态关联，不指向任何父表外键，
//! 归属关系由服务层按标签显式解析。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "attachments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub source_type: String,
    pub source_id: i64,
    pub media_id: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::media::Entity",
        from = "Column::MediaId",
        to = "super::media::Column::Id"
    )]
    Media,
}

impl Related<super::media::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Media.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_attachment(self) -> crate::models::attachments::entities::Attachment {
        use crate::models::attachments::entities::{Attachment, SourceType};
        use chrono::{DateTime, Utc};

        Attachment {
            id: self.id,
            school_id: self.school_id,
            source_type: self
                .source_type
                .parse()
                .unwrap_or(SourceType::Material),
            source_id: self.source_id,
            media_id: self.media_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
            media: None,
        }
    }
}
