//! 提交存储操作
//!
//! 同一用户对同一作业只保留一行提交：重复提交时原行被更新，
//! 已撤回的行被复活，行 ID 始终不变。

use std::collections::HashMap;

use super::{SeaOrmStorage, attachments};
use crate::entity::assessments::{Column as AssessmentColumn, Entity as Assessments};
use crate::entity::assignments::Entity as Assignments;
use crate::entity::submissions::{ActiveModel, Column, Entity as Submissions};
use crate::errors::Result;
use crate::models::attachments::entities::SourceType;
use crate::models::submissions::{
    entities::{Submission, SubmissionStatus},
    requests::SubmitRequest,
};
use chrono::{DateTime, Utc};
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 按（作业, 用户）插入或更新提交
    ///
    /// 无论原行处于 active 还是 withdrawn 都复用同一行,
    /// 提交行写入与附件整组替换在同一事务内完成。
    pub async fn upsert_submission_impl(
        &self,
        user_id: i64,
        req: SubmitRequest,
    ) -> Result<Submission> {
        let now = chrono::Utc::now().timestamp();

        // 作业截止时间用于推导 is_late
        let deadline = self
            .load_assignment_deadline(req.assignment_id)
            .await?;

        let existing = Submissions::find()
            .filter(Column::AssignmentId.eq(req.assignment_id))
            .filter(Column::UserId.eq(user_id))
            .one(&self.db)
            .await?;

        let txn = self.db.begin().await?;

        let result = match existing {
            Some(row) => {
                let mut model: ActiveModel = row.into();
                model.status = Set(SubmissionStatus::ACTIVE.to_string());
                model.submitted_at = Set(now);
                model.update(&txn).await?
            }
            None => {
                let model = ActiveModel {
                    school_id: Set(req.school_id),
                    assignment_id: Set(req.assignment_id),
                    user_id: Set(user_id),
                    status: Set(SubmissionStatus::ACTIVE.to_string()),
                    submitted_at: Set(now),
                    ..Default::default()
                };
                model.insert(&txn).await?
            }
        };

        // 附件整组替换（复活的旧行可能残留上一次的附件）
        attachments::unlink_source(&txn, SourceType::Submission, result.id).await?;
        if let Some(ref media_ids) = req.attachments {
            attachments::link_media(
                &txn,
                result.school_id,
                SourceType::Submission,
                result.id,
                media_ids,
            )
            .await?;
        }

        txn.commit().await?;

        Ok(result.into_submission(deadline))
    }

    /// 通过 ID 获取在册提交（含评分）
    pub async fn get_submission_by_id_impl(
        &self,
        submission_id: i64,
    ) -> Result<Option<Submission>> {
        let result = Submissions::find_by_id(submission_id)
            .filter(Column::Status.eq(SubmissionStatus::ACTIVE))
            .one(&self.db)
            .await?;

        let Some(row) = result else {
            return Ok(None);
        };

        let deadline = self.load_assignment_deadline(row.assignment_id).await?;

        let assessment = Assessments::find()
            .filter(AssessmentColumn::SubmissionId.eq(row.id))
            .one(&self.db)
            .await?;

        let mut submission = row.into_submission(deadline);
        submission.assessment = assessment.map(|a| a.into_assessment());
        Ok(Some(submission))
    }

    /// 列出作业的全部在册提交（按提交时间升序，含评分）
    pub async fn list_submissions_by_assignment_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Vec<Submission>> {
        let deadline = self.load_assignment_deadline(assignment_id).await?;

        let rows = Submissions::find()
            .filter(Column::AssignmentId.eq(assignment_id))
            .filter(Column::Status.eq(SubmissionStatus::ACTIVE))
            .order_by_asc(Column::SubmittedAt)
            .all(&self.db)
            .await?;

        if rows.is_empty() {
            return Ok(Vec::new());
        }

        // 批量查询评分
        let submission_ids: Vec<i64> = rows.iter().map(|s| s.id).collect();
        let assessments = Assessments::find()
            .filter(AssessmentColumn::SubmissionId.is_in(submission_ids))
            .all(&self.db)
            .await?;

        let mut assessment_map: HashMap<i64, _> = assessments
            .into_iter()
            .map(|a| (a.submission_id, a))
            .collect();

        Ok(rows
            .into_iter()
            .map(|row| {
                let assessment = assessment_map.remove(&row.id);
                let mut submission = row.into_submission(deadline);
                submission.assessment = assessment.map(|a| a.into_assessment());
                submission
            })
            .collect())
    }

    /// 更新提交：重置提交时间并整组替换附件
    pub async fn update_submission_impl(
        &self,
        submission_id: i64,
        media_ids: Option<Vec<i64>>,
    ) -> Result<Option<Submission>> {
        let existing = Submissions::find_by_id(submission_id)
            .filter(Column::Status.eq(SubmissionStatus::ACTIVE))
            .one(&self.db)
            .await?;

        let Some(row) = existing else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await?;

        let mut model: ActiveModel = row.into();
        model.submitted_at = Set(now);
        let result = model.update(&txn).await?;

        attachments::unlink_source(&txn, SourceType::Submission, submission_id).await?;
        if let Some(ref media_ids) = media_ids {
            attachments::link_media(
                &txn,
                result.school_id,
                SourceType::Submission,
                submission_id,
                media_ids,
            )
            .await?;
        }

        txn.commit().await?;

        self.get_submission_by_id_impl(submission_id).await
    }

    /// 撤回提交并清理其附件链接。行本身保留，评分保留
    pub async fn delete_submission_impl(&self, submission_id: i64) -> Result<bool> {
        let txn = self.db.begin().await?;

        let result = Submissions::update_many()
            .col_expr(
                Column::Status,
                Expr::value(SubmissionStatus::WITHDRAWN),
            )
            .filter(Column::Id.eq(submission_id))
            .filter(Column::Status.eq(SubmissionStatus::ACTIVE))
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            return Ok(false);
        }

        attachments::unlink_source(&txn, SourceType::Submission, submission_id).await?;

        txn.commit().await?;

        Ok(true)
    }

    // 读取作业截止时间（无视软删除，撤下的作业仍需推导 is_late）
    async fn load_assignment_deadline(
        &self,
        assignment_id: i64,
    ) -> Result<Option<DateTime<Utc>>> {
        let assignment = Assignments::find_by_id(assignment_id).one(&self.db).await?;

        Ok(assignment
            .and_then(|a| a.deadline)
            .and_then(|ts| DateTime::<Utc>::from_timestamp(ts, 0)))
    }
}
