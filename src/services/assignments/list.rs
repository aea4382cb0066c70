use super::AssignmentService;
use crate::errors::Result;
use crate::models::assignments::requests::AssignmentListParams;
use crate::models::assignments::responses::AssignmentListResponse;
use crate::models::attachments::entities::SourceType;

/// 分页列出课程班作业
///
/// 科目班级头信息对整页相同，只向目录查询一次。
pub async fn list_assignments(
    service: &AssignmentService,
    subject_class_id: i64,
    params: AssignmentListParams,
) -> Result<AssignmentListResponse> {
    let mut response = service
        .storage
        .list_assignments_by_subject_class(subject_class_id, params.into())
        .await?;

    let subject_class = service
        .directory
        .get_subject_class(subject_class_id)
        .await?;

    for assignment in &mut response.items {
        assignment.subject_class = subject_class.clone();
        assignment.attachments = service
            .storage
            .get_attachments_by_source(SourceType::Assignment, assignment.id)
            .await?;
    }

    Ok(response)
}
