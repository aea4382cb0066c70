//! 作业目录集成测试：分类、分页搜索、软删除与外部目录头信息。

mod common;

use rust_schoolsystem_next::models::assignments::entities::SubjectClassHeader;
use rust_schoolsystem_next::models::assignments::requests::{
    AssignmentListParams, CreateCategoryRequest, UpdateAssignmentRequest,
};
use rust_schoolsystem_next::models::common::pagination::PaginationQuery;
use rust_schoolsystem_next::models::submissions::requests::SubmitRequest;
use rust_schoolsystem_next::services::StaticDirectory;

const SCHOOL: i64 = 1;
const CLASS: i64 = 55;

fn list_params(page: i64, size: i64, search: Option<&str>) -> AssignmentListParams {
    AssignmentListParams {
        pagination: PaginationQuery { page, size },
        search: search.map(|s| s.to_string()),
    }
}

#[tokio::test]
async fn test_create_and_get_with_directory_header() {
    let directory = StaticDirectory::new().with_entry(SubjectClassHeader {
        id: CLASS,
        subject_id: 3,
        subject_name: "数学".to_string(),
        class_name: "高一 (2) 班".to_string(),
    });
    let ctx = common::setup_with_directory(directory).await;
    let category_id = common::seed_category(&ctx, SCHOOL, "练习").await;

    let mut req = common::assignment_request(SCHOOL, CLASS, category_id, "函数图像练习");
    req.description = Some("完成教材第 42 页".to_string());

    let created = ctx.assignments.create_assignment(900, req).await.unwrap();

    let fetched = ctx.assignments.get_assignment(created.id).await.unwrap();
    assert_eq!(fetched.title, "函数图像练习");
    assert_eq!(
        fetched.category.as_ref().map(|c| c.name.as_str()),
        Some("练习")
    );

    let header = fetched.subject_class.expect("缺少科目班级头信息");
    assert_eq!(header.subject_name, "数学");
    assert_eq!(header.class_name, "高一 (2) 班");
}

#[tokio::test]
async fn test_unknown_subject_class_leaves_header_empty() {
    let ctx = common::setup().await;
    let category_id = common::seed_category(&ctx, SCHOOL, "练习").await;

    let created = ctx
        .assignments
        .create_assignment(
            900,
            common::assignment_request(SCHOOL, CLASS, category_id, "无目录作业"),
        )
        .await
        .unwrap();

    // 目录查不到不报错，头信息留空
    let fetched = ctx.assignments.get_assignment(created.id).await.unwrap();
    assert!(fetched.subject_class.is_none());
}

#[tokio::test]
async fn test_duplicate_category_names_accepted() {
    let ctx = common::setup().await;

    let first = ctx
        .assignments
        .create_category(CreateCategoryRequest {
            school_id: SCHOOL,
            name: "测验".to_string(),
        })
        .await
        .unwrap();
    let second = ctx
        .assignments
        .create_category(CreateCategoryRequest {
            school_id: SCHOOL,
            name: "测验".to_string(),
        })
        .await
        .unwrap();

    assert_ne!(first.id, second.id);

    let categories = ctx.assignments.list_categories(SCHOOL).await.unwrap();
    assert_eq!(categories.len(), 2);
}

#[tokio::test]
async fn test_empty_category_name_rejected() {
    let ctx = common::setup().await;

    let err = ctx
        .assignments
        .create_category(CreateCategoryRequest {
            school_id: SCHOOL,
            name: "   ".to_string(),
        })
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E007");
}

#[tokio::test]
async fn test_list_pagination_and_search() {
    let ctx = common::setup().await;
    let category_id = common::seed_category(&ctx, SCHOOL, "练习").await;

    for title in ["代数第一章练习", "代数第二章练习", "期末项目"] {
        ctx.assignments
            .create_assignment(
                900,
                common::assignment_request(SCHOOL, CLASS, category_id, title),
            )
            .await
            .unwrap();
    }

    // 其他课程班的作业不应混入
    ctx.assignments
        .create_assignment(
            900,
            common::assignment_request(SCHOOL, CLASS + 1, category_id, "别班作业"),
        )
        .await
        .unwrap();

    let page = ctx
        .assignments
        .list_assignments(CLASS, list_params(1, 2, None))
        .await
        .unwrap();
    assert_eq!(page.items.len(), 2);
    assert_eq!(page.pagination.total, 3);
    assert_eq!(page.pagination.total_pages, 2);

    let second_page = ctx
        .assignments
        .list_assignments(CLASS, list_params(2, 2, None))
        .await
        .unwrap();
    assert_eq!(second_page.items.len(), 1);

    let searched = ctx
        .assignments
        .list_assignments(CLASS, list_params(1, 10, Some("代数")))
        .await
        .unwrap();
    assert_eq!(searched.items.len(), 2);
    assert!(searched.items.iter().all(|a| a.title.contains("代数")));
}

#[tokio::test]
async fn test_update_assignment_is_partial() {
    let ctx = common::setup().await;
    let category_id = common::seed_category(&ctx, SCHOOL, "练习").await;

    let mut req = common::assignment_request(SCHOOL, CLASS, category_id, "原标题");
    req.description = Some("原描述".to_string());

    let created = ctx.assignments.create_assignment(900, req).await.unwrap();

    let updated = ctx
        .assignments
        .update_assignment(
            created.id,
            UpdateAssignmentRequest {
                category_id: None,
                title: Some("新标题".to_string()),
                description: None,
                deadline: None,
                allow_late_submission: None,
                attachments: None,
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "新标题");
    assert_eq!(updated.description.as_deref(), Some("原描述"));
}

#[tokio::test]
async fn test_create_with_unknown_category() {
    let ctx = common::setup().await;

    let err = ctx
        .assignments
        .create_assignment(
            900,
            common::assignment_request(SCHOOL, CLASS, 9999, "无效分类"),
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E006");
}

#[tokio::test]
async fn test_soft_delete_hides_assignment_but_keeps_submissions() {
    let ctx = common::setup().await;
    let category_id = common::seed_category(&ctx, SCHOOL, "练习").await;

    let assignment = ctx
        .assignments
        .create_assignment(
            900,
            common::assignment_request(SCHOOL, CLASS, category_id, "将被下架"),
        )
        .await
        .unwrap();

    let submission = ctx
        .submissions
        .submit(
            501,
            SubmitRequest {
                school_id: SCHOOL,
                assignment_id: assignment.id,
                attachments: None,
            },
        )
        .await
        .unwrap();

    ctx.assignments
        .delete_assignment(assignment.id)
        .await
        .unwrap();

    // 作业下架后不可见
    let err = ctx.assignments.get_assignment(assignment.id).await.unwrap_err();
    assert_eq!(err.code(), "E006");

    let page = ctx
        .assignments
        .list_assignments(CLASS, list_params(1, 10, None))
        .await
        .unwrap();
    assert!(page.items.is_empty());

    // 重复删除是 NotFound
    let err = ctx
        .assignments
        .delete_assignment(assignment.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E006");

    // 提交不受软删除牵连
    let kept = ctx.submissions.get_submission(submission.id).await.unwrap();
    assert_eq!(kept.id, submission.id);
}

#[tokio::test]
async fn test_get_assignment_with_submissions() {
    let ctx = common::setup().await;
    let category_id = common::seed_category(&ctx, SCHOOL, "练习").await;
    let media_id = common::seed_media(&ctx, SCHOOL, "essay.pdf").await;

    let assignment = ctx
        .assignments
        .create_assignment(
            900,
            common::assignment_request(SCHOOL, CLASS, category_id, "全班提交"),
        )
        .await
        .unwrap();

    ctx.submissions
        .submit(
            501,
            SubmitRequest {
                school_id: SCHOOL,
                assignment_id: assignment.id,
                attachments: Some(vec![media_id]),
            },
        )
        .await
        .unwrap();
    ctx.submissions
        .submit(
            502,
            SubmitRequest {
                school_id: SCHOOL,
                assignment_id: assignment.id,
                attachments: None,
            },
        )
        .await
        .unwrap();

    let detail = ctx
        .assignments
        .get_assignment_with_submissions(assignment.id)
        .await
        .unwrap();

    assert_eq!(detail.submissions.len(), 2);
    let with_file = detail
        .submissions
        .iter()
        .find(|s| s.user_id == 501)
        .expect("缺少 501 的提交");
    assert_eq!(with_file.attachments.len(), 1);
}
