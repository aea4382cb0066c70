//! 提交实体

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "submissions")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub school_id: i64,
    pub assignment_id: i64,
    pub user_id: i64,
    pub status: String,
    pub submitted_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::assignments::Entity",
        from = "Column::AssignmentId",
        to = "super::assignments::Column::Id"
    )]
    Assignment,
    #[sea_orm(has_many = "super::assessments::Entity")]
    Assessments,
}

impl Related<super::assignments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assignment.def()
    }
}

impl Related<super::assessments::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Assessments.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

// 从数据库模型转换为业务模型
//
// is_late 不落库，转换时根据作业当前截止时间推导。
impl Model {
    pub fn into_submission(
        self,
        assignment_deadline: Option<chrono::DateTime<chrono::Utc>>,
    ) -> crate::models::submissions::entities::Submission {
        use crate::models::submissions::entities::{Submission, SubmissionStatus};
        use chrono::{DateTime, Utc};

        let submitted_at =
            DateTime::<Utc>::from_timestamp(self.submitted_at, 0).unwrap_or_default();
        let is_late = assignment_deadline
            .map(|deadline| submitted_at > deadline)
            .unwrap_or(false);

        Submission {
            id: self.id,
            school_id: self.school_id,
            assignment_id: self.assignment_id,
            user_id: self.user_id,
            status: self
                .status
                .parse()
                .unwrap_or(SubmissionStatus::Active),
            submitted_at,
            is_late,
            attachments: Vec::new(),
            assessment: None,
        }
    }
}
