use super::AssignmentService;
use crate::errors::{Result, SchoolSystemError};
use crate::models::assignments::entities::AssignmentCategory;
use crate::models::assignments::requests::CreateCategoryRequest;

/// 创建作业分类
///
/// 同校同名分类不做拦截，分类仅是评分桶的标签。
pub async fn create_category(
    service: &AssignmentService,
    req: CreateCategoryRequest,
) -> Result<AssignmentCategory> {
    if req.name.trim().is_empty() {
        return Err(SchoolSystemError::validation("分类名称不能为空"));
    }

    service.storage.create_category(req).await
}

/// 列出学校下的全部分类
pub async fn list_categories(
    service: &AssignmentService,
    school_id: i64,
) -> Result<Vec<AssignmentCategory>> {
    service.storage.list_categories_by_school(school_id).await
}
