//! 媒体文件实体
//!
//! 媒体文件由外部媒体服务管理，本系统只读取元数据用于附件组装。

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "media")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub name: String,
    pub file_size: i64,
    pub mime_type: String,
    pub file_url: String,
    pub owner_type: String,
    pub owner_id: i64,
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::attachments::Entity")]
    Attachments,
}

impl Related<super::attachments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Attachments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_media(self) -> crate::models::media::entities::Media {
        use chrono::{DateTime, Utc};

        crate::models::media::entities::Media {
            id: self.id,
            school_id: self.school_id,
            name: self.name,
            file_size: self.file_size,
            mime_type: self.mime_type,
            file_url: self.file_url,
            owner_type: self.owner_type,
            owner_id: self.owner_id,
            created_at: DateTime::<Utc>::from_timestamp(self.created_at, 0).unwrap_or_default(),
        }
    }
}
