pub mod assessments;
pub mod assignments;
pub mod attachments;
pub mod directory;
pub mod submissions;

pub use assessments::AssessmentService;
pub use assignments::AssignmentService;
pub use attachments::AttachmentService;
pub use directory::{StaticDirectory, SubjectClassDirectory};
pub use submissions::SubmissionService;
