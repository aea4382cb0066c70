pub mod assess;
pub mod delete;
pub mod update;
pub mod weights;

use std::sync::Arc;

use crate::errors::{Result, SchoolSystemError};
use crate::models::assessments::{
    entities::{Assessment, AssessmentWeight},
    requests::{AssessRequest, SetWeightRequest, UpdateAssessmentRequest},
};
use crate::storage::Storage;

pub struct AssessmentService {
    pub(crate) storage: Arc<dyn Storage>,
}

impl AssessmentService {
    pub fn new(storage: Arc<dyn Storage>) -> Self {
        Self { storage }
    }

    pub async fn assess(&self, assessed_by: i64, req: AssessRequest) -> Result<Assessment> {
        assess::assess(self, assessed_by, req).await
    }

    pub async fn get_by_submission(&self, submission_id: i64) -> Result<Assessment> {
        self.storage
            .get_assessment_by_submission(submission_id)
            .await?
            .ok_or_else(|| {
                SchoolSystemError::not_found(format!("提交尚未评分: {submission_id}"))
            })
    }

    pub async fn update_assessment(
        &self,
        submission_id: i64,
        req: UpdateAssessmentRequest,
    ) -> Result<Assessment> {
        update::update_assessment(self, submission_id, req).await
    }

    pub async fn delete_assessment(&self, submission_id: i64) -> Result<()> {
        delete::delete_assessment(self, submission_id).await
    }

    pub async fn set_weight(&self, req: SetWeightRequest) -> Result<AssessmentWeight> {
        weights::set_weight(self, req).await
    }

    pub async fn list_weights(&self, subject_id: i64) -> Result<Vec<AssessmentWeight>> {
        weights::list_weights(self, subject_id).await
    }
}
