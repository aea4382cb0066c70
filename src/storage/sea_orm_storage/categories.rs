//! 作业分类存储操作

use super::SeaOrmStorage;
use crate::entity::assignment_categories::{ActiveModel, Column, Entity as AssignmentCategories};
use crate::errors::Result;
use crate::models::assignments::entities::AssignmentCategory;
use crate::models::assignments::requests::CreateCategoryRequest;
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 创建作业分类。同名分类不做唯一性约束，由上层业务自行裁量
    pub async fn create_category_impl(
        &self,
        request: CreateCategoryRequest,
    ) -> Result<AssignmentCategory> {
        let now = chrono::Utc::now().timestamp();

        let model = ActiveModel {
            school_id: Set(request.school_id),
            name: Set(request.name),
            created_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await?;
        Ok(result.into_category())
    }

    /// 列出学校下的全部分类
    pub async fn list_categories_by_school_impl(
        &self,
        school_id: i64,
    ) -> Result<Vec<AssignmentCategory>> {
        let rows = AssignmentCategories::find()
            .filter(Column::SchoolId.eq(school_id))
            .order_by_asc(Column::Id)
            .all(&self.db)
            .await?;

        Ok(rows.into_iter().map(|row| row.into_category()).collect())
    }
}
