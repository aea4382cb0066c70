//! 评分权重实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "assessment_weights")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub subject_id: i64,
    pub category_id: i64,
    pub weight: f64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignment_categories::Entity",
        from = "Column::CategoryId",
        to = "super::assignment_categories::Column::Id"
    )]
    Category,
}

impl Related<super::assignment_categories::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
impl Model {
    pub fn into_weight(self) -> crate::models::assessments::entities::AssessmentWeight {
        crate::models::assessments::entities::AssessmentWeight {
            id: self.id,
            subject_id: self.subject_id,
            category_id: self.category_id,
            weight: self.weight,
            category: None,
        }
    }
}
