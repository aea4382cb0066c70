pub mod delete;
pub mod detail;
pub mod list;
pub mod submit;
pub mod update;

use std::sync::Arc;

use crate::errors::Result;
use crate::models::submissions::{
    entities::Submission,
    requests::{SubmitRequest, UpdateSubmissionRequest},
};
use crate::storage::Storage;

pub struct SubmissionService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl SubmissionService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn submit(&self, user_id: i64, req: SubmitRequest) -> Result<Submission> {
        submit::submit(self, user_id, req).await
    }

    pub async fn get_submission(&self, submission_id: i64) -> Result<Submission> {
        detail::get_submission(self, submission_id).await
    }

    pub async fn list_by_assignment(&self, assignment_id: i64) -> Result<Vec<Submission>> {
        list::list_by_assignment(self, assignment_id).await
    }

    pub async fn update_submission(
        &self,
        submission_id: i64,
        req: UpdateSubmissionRequest,
    ) -> Result<Submission> {
        update::update_submission(self, submission_id, req).await
    }

    pub async fn delete_submission(&self, submission_id: i64) -> Result<()> {
        delete::delete_submission(self, submission_id).await
    }
}
