pub mod assessments;
pub mod assignments;
pub mod attachments;
pub mod common;
pub mod media;
pub mod submissions;

pub use common::pagination::{PaginationInfo, PaginationQuery};
