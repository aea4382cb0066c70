pub mod categories;
pub mod create;
pub mod delete;
pub mod detail;
pub mod list;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::assignments::{
    entities::{Assignment, AssignmentCategory},
    requests::{
        AssignmentListParams, CreateAssignmentRequest, CreateCategoryRequest,
        UpdateAssignmentRequest,
    },
    responses::AssignmentListResponse,
};
use crate::services::directory::SubjectClassDirectory;
use crate::storage::Storage;

pub struct AssignmentService {
    pub(crate) storage: Arc<dyn Storage>,
    pub(crate) directory: Arc<dyn SubjectClassDirectory>,
}

impl AssignmentService {
    pub fn new(storage: Arc<dyn Storage>, directory: Arc<dyn SubjectClassDirectory>) -> Self {
        Self { storage, directory }
    }

    pub async fn create_category(&self, req: CreateCategoryRequest) -> Result<AssignmentCategory> {
        categories::create_category(self, req).await
    }

    pub async fn list_categories(&self, school_id: i64) -> Result<Vec<AssignmentCategory>> {
        categories::list_categories(self, school_id).await
    }

    pub async fn create_assignment(
        &self,
        created_by: i64,
        req: CreateAssignmentRequest,
    ) -> Result<Assignment> {
        create::create_assignment(self, created_by, req).await
    }

    pub async fn get_assignment(&self, assignment_id: i64) -> Result<Assignment> {
        detail::get_assignment(self, assignment_id).await
    }

    pub async fn get_assignment_with_submissions(&self, assignment_id: i64) -> Result<Assignment> {
        detail::get_assignment_with_submissions(self, assignment_id).await
    }

    pub async fn list_assignments(
        &self,
        subject_class_id: i64,
        params: AssignmentListParams,
    ) -> Result<AssignmentListResponse> {
        list::list_assignments(self, subject_class_id, params).await
    }

    pub async fn update_assignment(
        &self,
        assignment_id: i64,
        req: UpdateAssignmentRequest,
    ) -> Result<Assignment> {
        update::update_assignment(self, assignment_id, req).await
    }

    pub async fn delete_assignment(&self, assignment_id: i64) -> Result<()> {
        delete::delete_assignment(self, assignment_id).await
    }
}
