//! 评分存储操作

use std::collections::{HashMap, HashSet};

use super::SeaOrmStorage;
use crate::entity::assessment_weights::{
    ActiveModel as WeightActiveModel, Column as WeightColumn, Entity as AssessmentWeights,
};
use crate::entity::assessments::{ActiveModel, Column, Entity as Assessments};
use crate::entity::assignment_categories::{
    Column as CategoryColumn, Entity as AssignmentCategories,
};
use crate::errors::Result;
use crate::models::assessments::{
    entities::{Assessment, AssessmentWeight},
    requests::{AssessRequest, SetWeightRequest, UpdateAssessmentRequest},
};
use sea_orm::{ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set};

impl SeaOrmStorage {
    /// 按 submission_id 插入或覆盖评分
    ///
    /// 覆盖时分数、评语、评分人、评分时间整体重写，行 ID 不变。
    pub async fn upsert_assessment_impl(
        &self,
        assessed_by: i64,
        req: AssessRequest,
    ) -> Result<Assessment> {
        let now = chrono::Utc::now().timestamp();

        let existing = Assessments::find()
            .filter(Column::SubmissionId.eq(req.submission_id))
            .one(&self.db)
            .await?;

        let result = match existing {
            Some(row) => {
                let mut model: ActiveModel = row.into();
                model.score = Set(req.score);
                model.feedback = Set(req.feedback);
                model.assessed_by = Set(assessed_by);
                model.assessed_at = Set(now);
                model.update(&self.db).await?
            }
            None => {
                let model = ActiveModel {
                    submission_id: Set(req.submission_id),
                    score: Set(req.score),
                    feedback: Set(req.feedback),
                    assessed_by: Set(assessed_by),
                    assessed_at: Set(now),
                    ..Default::default()
                };
                model.insert(&self.db).await?
            }
        };

        Ok(result.into_assessment())
    }

    /// 获取提交的评分
    pub async fn get_assessment_by_submission_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Assessment>> {
        let result = Assessments::find()
            .filter(Column::SubmissionId.eq(submission_id))
            .one(&self.db)
            .await?;

        Ok(result.map(|m| m.into_assessment()))
    }

    /// 局部更新评分（不触碰评分人与评分时间）
    pub async fn update_assessment_impl(
        &self,
        submission_id: i64,
        update: UpdateAssessmentRequest,
    ) -> Result<Option<Assessment>> {
        let existing = Assessments::find()
            .filter(Column::SubmissionId.eq(submission_id))
            .one(&self.db)
            .await?;

        let Some(row) = existing else {
            return Ok(None);
        };

        let mut model = ActiveModel {
            id: Set(row.id),
            ..Default::default()
        };
        let mut dirty = false;

        if let Some(score) = update.score {
            model.score = Set(score);
            dirty = true;
        }

        if let Some(feedback) = update.feedback {
            model.feedback = Set(Some(feedback));
            dirty = true;
        }

        if !dirty {
            return Ok(Some(row.into_assessment()));
        }

        let result = model.update(&self.db).await?;
        Ok(Some(result.into_assessment()))
    }

    /// 删除评分
    pub async fn delete_assessment_impl(&self, submission_id: i64) -> Result<bool> {
        let result = Assessments::delete_many()
            .filter(Column::SubmissionId.eq(submission_id))
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// 按（科目, 分类）插入或覆盖评分权重
    pub async fn set_assessment_weight_impl(
        &self,
        req: SetWeightRequest,
    ) -> Result<AssessmentWeight> {
        let existing = AssessmentWeights::find()
            .filter(WeightColumn::SubjectId.eq(req.subject_id))
            .filter(WeightColumn::CategoryId.eq(req.category_id))
            .one(&self.db)
            .await?;

        let result = match existing {
            Some(row) => {
                let mut model: WeightActiveModel = row.into();
                model.weight = Set(req.weight);
                model.update(&self.db).await?
            }
            None => {
                let model = WeightActiveModel {
                    subject_id: Set(req.subject_id),
                    category_id: Set(req.category_id),
                    weight: Set(req.weight),
                    ..Default::default()
                };
                model.insert(&self.db).await?
            }
        };

        let category = AssignmentCategories::find_by_id(result.category_id)
            .one(&self.db)
            .await?;

        let mut weight = result.into_weight();
        weight.category = category.map(|c| c.into_category());
        Ok(weight)
    }

    /// 列出科目下的全部评分权重（含分类信息）
    pub async fn list_weights_by_subject_impl(
        &self,
        subject_id: i64,
    ) -> Result<Vec<AssessmentWeight>> {
        let rows = AssessmentWeights::find()
            .filter(WeightColumn::SubjectId.eq(subject_id))
            .order_by_asc(WeightColumn::Id)
            .all(&self.db)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        // 批量查询分类信息
        let category_ids: Vec<i64> = rows
            .iter()
            .map(|w| w.category_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let categories = AssignmentCategories::find()
            .filter(CategoryColumn::Id.is_in(category_ids))
            .all(&self.db)
            .await?;

        let category_map: HashMap<i64, _> = categories.into_iter().map(|c| (c.id, c)).collect();

        Ok(rows
            .into_iter()
            .map(|row| {
                let category = category_map.get(&row.category_id).cloned();
                let mut weight = row.into_weight();
                weight.category = category.map(|c| c.into_category());
                weight
            })
            .collect())
    }
}
