//! 作业存储操作

use std::collections::{HashMap, HashSet};

use super::{SeaOrmStorage, attachments};
use crate::entity::assignment_categories::{
    Column as CategoryColumn, Entity as AssignmentCategories,
};
use crate::entity::assignments::{ActiveModel, Column, Entity as Assignments};
use crate::errors::Result;
use crate::models::PaginationInfo;
use crate::models::assignments::{
    entities::Assignment,
    requests::{AssignmentListQuery, CreateAssignmentRequest, UpdateAssignmentRequest},
    responses::AssignmentListResponse,
};
use crate::models::attachments::entities::SourceType;
use crate::utils::escape_like_pattern;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder,
    Set, TransactionTrait,
};

impl SeaOrmStorage {
    /// 创建作业，附件与作业行在同一事务内落库
    pub async fn create_assignment_impl(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await?;

        let model = ActiveModel {
            school_id: Set(req.school_id),
            subject_class_id: Set(req.subject_class_id),
            category_id: Set(req.category_id),
            title: Set(req.title),
            description: Set(req.description),
            deadline: Set(req.deadline.map(|dt| dt.timestamp())),
            allow_late_submission: Set(req.allow_late_submission.unwrap_or(true)),
            created_by: Set(created_by),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&txn).await?;

        if let Some(media_ids) = req.attachments {
            attachments::link_media(
                &txn,
                result.school_id,
                SourceType::Assignment,
                result.id,
                &media_ids,
            )
            .await?;
        }

        txn.commit().await?;

        Ok(result.into_assignment())
    }

    /// 通过 ID 获取作业（不含已软删除的）
    pub async fn get_assignment_by_id_impl(&self, assignment_id: i64) -> Result<Option<Assignment>> {
        let result = Assignments::find_by_id(assignment_id)
            .filter(Column::DeletedAt.is_null())
            .find_also_related(AssignmentCategories)
            .one(&self.db)
            .await?;

        Ok(result.map(|(model, category)| {
            let mut assignment = model.into_assignment();
            assignment.category = category.map(|c| c.into_category());
            assignment
        }))
    }

    /// 获取作业及其全部在册提交
    pub async fn get_assignment_with_submissions_impl(
        &self,
        assignment_id: i64,
    ) -> Result<Option<Assignment>> {
        let Some(mut assignment) = self.get_assignment_by_id_impl(assignment_id).await? else {
            return Ok(None);
        };

        assignment.submissions = self
            .list_submissions_by_assignment_impl(assignment_id)
            .await?;

        Ok(Some(assignment))
    }

    /// 分页列出课程班作业
    pub async fn list_assignments_by_subject_class_impl(
        &self,
        subject_class_id: i64,
        query: AssignmentListQuery,
    ) -> Result<AssignmentListResponse> {
        let page = query.page.unwrap_or(1).max(1) as u64;
        let size = query.size.unwrap_or(10).clamp(1, 100) as u64;

        let mut select = Assignments::find()
            .filter(Column::SubjectClassId.eq(subject_class_id))
            .filter(Column::DeletedAt.is_null());

        // 搜索条件（按标题/描述搜索）
        if let Some(ref search) = query.search
            && !search.trim().is_empty()
        {
            let escaped = escape_like_pattern(search.trim());
            select = select.filter(
                Condition::any()
                    .add(Column::Title.contains(&escaped))
                    .add(Column::Description.contains(&escaped)),
            );
        }

        // 排序
        select = select.order_by_desc(Column::CreatedAt);

        // 分页查询
        let paginator = select.paginate(&self.db, size);
        let total = paginator.num_items().await?;
        let pages = paginator.num_pages().await?;

        let rows = paginator.fetch_page(page - 1).await?;

        // 批量查询分类信息
        let category_ids: Vec<i64> = rows
            .iter()
            .map(|m| m.category_id)
            .collect::<HashSet<_>>()
            .into_iter()
            .collect();

        let categories = AssignmentCategories::find()
            .filter(CategoryColumn::Id.is_in(category_ids))
            .all(&self.db)
            .await?;

        let category_map: HashMap<i64, _> = categories.into_iter().map(|c| (c.id, c)).collect();

        let items: Vec<Assignment> = rows
            .into_iter()
            .map(|model| {
                let category = category_map.get(&model.category_id).cloned();
                let mut assignment = model.into_assignment();
                assignment.category = category.map(|c| c.into_category());
                assignment
            })
            .collect();

        Ok(AssignmentListResponse {
            items,
            pagination: PaginationInfo {
                page: page as i64,
                page_size: size as i64,
                total: total as i64,
                total_pages: pages as i64,
            },
        })
    }

    /// 更新作业，字段补丁与附件整组替换在同一事务内执行
    pub async fn update_assignment_impl(
        &self,
        assignment_id: i64,
        update: UpdateAssignmentRequest,
    ) -> Result<Option<Assignment>> {
        // 先检查作业是否存在
        let Some(existing) = self.get_assignment_by_id_impl(assignment_id).await? else {
            return Ok(None);
        };

        let now = chrono::Utc::now().timestamp();

        let txn = self.db.begin().await?;

        let mut model = ActiveModel {
            id: Set(assignment_id),
            updated_at: Set(now),
            ..Default::default()
        };

        if let Some(category_id) = update.category_id {
            model.category_id = Set(category_id);
        }

        if let Some(title) = update.title {
            model.title = Set(title);
        }

        if let Some(description) = update.description {
            model.description = Set(Some(description));
        }

        if let Some(deadline) = update.deadline {
            model.deadline = Set(Some(deadline.timestamp()));
        }

        if let Some(allow_late) = update.allow_late_submission {
            model.allow_late_submission = Set(allow_late);
        }

        model.update(&txn).await?;

        // 附件整组替换
        if let Some(media_ids) = update.attachments {
            attachments::unlink_source(&txn, SourceType::Assignment, assignment_id).await?;
            attachments::link_media(
                &txn,
                existing.school_id,
                SourceType::Assignment,
                assignment_id,
                &media_ids,
            )
            .await?;
        }

        txn.commit().await?;

        self.get_assignment_by_id_impl(assignment_id).await
    }

    /// 软删除作业。提交与评价保持原样，供后续审计
    pub async fn delete_assignment_impl(&self, assignment_id: i64) -> Result<bool> {
        let now = chrono::Utc::now().timestamp();

        let result = Assignments::update_many()
            .col_expr(Column::DeletedAt, Expr::value(now))
            .filter(Column::Id.eq(assignment_id))
            .filter(Column::DeletedAt.is_null())
            .exec(&self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
