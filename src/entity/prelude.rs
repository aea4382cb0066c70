//! 预导入模块，方便使用

pub use super::assessment_weights::{
    ActiveModel as AssessmentWeightActiveModel, Entity as AssessmentWeights,
    Model as AssessmentWeightModel,
};
pub use super::assessments::{
    ActiveModel as AssessmentActiveModel, Entity as Assessments, Model as AssessmentModel,
};
pub use super::assignment_categories::{
    ActiveModel as AssignmentCategoryActiveModel, Entity as AssignmentCategories,
    Model as AssignmentCategoryModel,
};
pub use super::assignments::{
    ActiveModel as AssignmentActiveModel, Entity as Assignments, Model as AssignmentModel,
};
pub use super::attachments::{
    ActiveModel as AttachmentActiveModel, Entity as Attachments, Model as AttachmentModel,
};
pub use super::media::{ActiveModel as MediaActiveModel, Entity as Media, Model as MediaModel};
pub use super::submissions::{
    ActiveModel as SubmissionActiveModel, Entity as Submissions, Model as SubmissionModel,
};
