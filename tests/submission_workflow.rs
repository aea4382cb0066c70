//! 提交工作流集成测试：截止时间门禁、迟交推导、同行复用与撤回复活。

mod common;

use chrono::{Duration, Utc};
use rust_schoolsystem_next::models::assignments::requests::UpdateAssignmentRequest;
use rust_schoolsystem_next::models::submissions::entities::SubmissionStatus;
use rust_schoolsystem_next::models::submissions::requests::{
    SubmitRequest, UpdateSubmissionRequest,
};

const SCHOOL: i64 = 1;
const CLASS: i64 = 10;
const STUDENT: i64 = 501;

fn no_patch() -> UpdateAssignmentRequest {
    UpdateAssignmentRequest {
        category_id: None,
        title: None,
        description: None,
        deadline: None,
        allow_late_submission: None,
        attachments: None,
    }
}

#[tokio::test]
async fn test_submit_and_get_submission() {
    let ctx = common::setup().await;
    let category_id = common::seed_category(&ctx, SCHOOL, "练习").await;
    let media_id = common::seed_media(&ctx, SCHOOL, "answer.pdf").await;

    let assignment = ctx
        .assignments
        .create_assignment(
            900,
            common::assignment_request(SCHOOL, CLASS, category_id, "第一章练习"),
        )
        .await
        .unwrap();

    let submission = ctx
        .submissions
        .submit(
            STUDENT,
            SubmitRequest {
                school_id: SCHOOL,
                assignment_id: assignment.id,
                attachments: Some(vec![media_id]),
            },
        )
        .await
        .unwrap();

    assert_eq!(submission.status, SubmissionStatus::Active);
    assert!(!submission.is_late);
    assert_eq!(submission.attachments.len(), 1);
    assert_eq!(submission.attachments[0].media_id, media_id);

    let fetched = ctx.submissions.get_submission(submission.id).await.unwrap();
    assert_eq!(fetched.id, submission.id);
    assert_eq!(fetched.user_id, STUDENT);
    assert_eq!(fetched.attachments.len(), 1);
}

#[tokio::test]
async fn test_past_due_submission_rejected_without_side_effects() {
    let ctx = common::setup().await;
    let category_id = common::seed_category(&ctx, SCHOOL, "测验").await;

    let mut req = common::assignment_request(SCHOOL, CLASS, category_id, "限时测验");
    req.deadline = Some(Utc::now() - Duration::hours(1));
    req.allow_late_submission = Some(false);

    let assignment = ctx.assignments.create_assignment(900, req).await.unwrap();

    let err = ctx
        .submissions
        .submit(
            STUDENT,
            SubmitRequest {
                school_id: SCHOOL,
                assignment_id: assignment.id,
                attachments: None,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.code(), "E010");

    // 被拒绝的提交不留任何痕迹
    let submissions = ctx
        .submissions
        .list_by_assignment(assignment.id)
        .await
        .unwrap();
    assert!(submissions.is_empty());
}

#[tokio::test]
async fn test_late_submission_allowed_and_marked() {
    let ctx = common::setup().await;
    let category_id = common::seed_category(&ctx, SCHOOL, "作业").await;

    let mut req = common::assignment_request(SCHOOL, CLASS, category_id, "可迟交作业");
    req.deadline = Some(Utc::now() - Duration::hours(1));
    req.allow_late_submission = Some(true);

    let assignment = ctx.assignments.create_assignment(900, req).await.unwrap();

    let submission = ctx
        .submissions
        .submit(
            STUDENT,
            SubmitRequest {
                school_id: SCHOOL,
                assignment_id: assignment.id,
                attachments: None,
            },
        )
        .await
        .unwrap();

    assert!(submission.is_late);
    assert_eq!(submission.status, SubmissionStatus::Active);
}

#[tokio::test]
async fn test_resubmission_reuses_row_and_replaces_attachments() {
    let ctx = common::setup().await;
    let category_id = common::seed_category(&ctx, SCHOOL, "作业").await;
    let first_media = common::seed_media(&ctx, SCHOOL, "draft.pdf").await;
    let second_media = common::seed_media(&ctx, SCHOOL, "final.pdf").await;

    let assignment = ctx
        .assignments
        .create_assignment(
            900,
            common::assignment_request(SCHOOL, CLASS, category_id, "多次提交"),
        )
        .await
        .unwrap();

    let first = ctx
        .submissions
        .submit(
            STUDENT,
            SubmitRequest {
                school_id: SCHOOL,
                assignment_id: assignment.id,
                attachments: Some(vec![first_media]),
            },
        )
        .await
        .unwrap();

    let second = ctx
        .submissions
        .submit(
            STUDENT,
            SubmitRequest {
                school_id: SCHOOL,
                assignment_id: assignment.id,
                attachments: Some(vec![second_media]),
            },
        )
        .await
        .unwrap();

    // 同一 (作业, 用户) 复用同一行
    assert_eq!(first.id, second.id);
    assert_eq!(second.attachments.len(), 1);
    assert_eq!(second.attachments[0].media_id, second_media);

    let submissions = ctx
        .submissions
        .list_by_assignment(assignment.id)
        .await
        .unwrap();
    assert_eq!(submissions.len(), 1);
}

#[tokio::test]
async fn test_withdraw_then_resubmit_revives_row() {
    let ctx = common::setup().await;
    let category_id = common::seed_category(&ctx, SCHOOL, "作业").await;
    let media_id = common::seed_media(&ctx, SCHOOL, "work.pdf").await;

    let assignment = ctx
        .assignments
        .create_assignment(
            900,
            common::assignment_request(SCHOOL, CLASS, category_id, "撤回复活"),
        )
        .await
        .unwrap();

    let original = ctx
        .submissions
        .submit(
            STUDENT,
            SubmitRequest {
                school_id: SCHOOL,
                assignment_id: assignment.id,
                attachments: Some(vec![media_id]),
            },
        )
        .await
        .unwrap();

    ctx.submissions
        .delete_submission(original.id)
        .await
        .unwrap();

    // 撤回后对外不可见
    let err = ctx.submissions.get_submission(original.id).await.unwrap_err();
    assert_eq!(err.code(), "E006");

    // 重复撤回同样是 NotFound
    let err = ctx
        .submissions
        .delete_submission(original.id)
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E006");

    let revived = ctx
        .submissions
        .submit(
            STUDENT,
            SubmitRequest {
                school_id: SCHOOL,
                assignment_id: assignment.id,
                attachments: None,
            },
        )
        .await
        .unwrap();

    // 复活保留原行 ID，撤回时附件已被清理
    assert_eq!(revived.id, original.id);
    assert_eq!(revived.status, SubmissionStatus::Active);
    assert!(revived.attachments.is_empty());
}

#[tokio::test]
async fn test_deadline_move_flips_is_late_on_read() {
    let ctx = common::setup().await;
    let category_id = common::seed_category(&ctx, SCHOOL, "作业").await;

    let mut req = common::assignment_request(SCHOOL, CLASS, category_id, "截止时间变更");
    req.deadline = Some(Utc::now() + Duration::hours(2));

    let assignment = ctx.assignments.create_assignment(900, req).await.unwrap();

    let submission = ctx
        .submissions
        .submit(
            STUDENT,
            SubmitRequest {
                school_id: SCHOOL,
                assignment_id: assignment.id,
                attachments: None,
            },
        )
        .await
        .unwrap();
    assert!(!submission.is_late);

    // 截止时间提前到过去，同一条提交按新口径变为迟交
    let mut patch = no_patch();
    patch.deadline = Some(Utc::now() - Duration::hours(1));
    ctx.assignments
        .update_assignment(assignment.id, patch)
        .await
        .unwrap();

    let reread = ctx.submissions.get_submission(submission.id).await.unwrap();
    assert!(reread.is_late);
}

#[tokio::test]
async fn test_update_submission_skips_deadline_gate() {
    let ctx = common::setup().await;
    let category_id = common::seed_category(&ctx, SCHOOL, "作业").await;
    let media_id = common::seed_media(&ctx, SCHOOL, "revised.pdf").await;

    let mut req = common::assignment_request(SCHOOL, CLASS, category_id, "修订窗口");
    req.deadline = Some(Utc::now() + Duration::hours(1));
    req.allow_late_submission = Some(false);

    let assignment = ctx.assignments.create_assignment(900, req).await.unwrap();

    let submission = ctx
        .submissions
        .submit(
            STUDENT,
            SubmitRequest {
                school_id: SCHOOL,
                assignment_id: assignment.id,
                attachments: None,
            },
        )
        .await
        .unwrap();

    // 截止时间过去后，新提交被拒绝
    let mut patch = no_patch();
    patch.deadline = Some(Utc::now() - Duration::hours(1));
    ctx.assignments
        .update_assignment(assignment.id, patch)
        .await
        .unwrap();

    let err = ctx
        .submissions
        .submit(
            STUDENT + 1,
            SubmitRequest {
                school_id: SCHOOL,
                assignment_id: assignment.id,
                attachments: None,
            },
        )
        .await
        .unwrap_err();
    assert_eq!(err.code(), "E010");

    // 但已入库的提交仍可修订，附件被替换
    let updated = ctx
        .submissions
        .update_submission(
            submission.id,
            UpdateSubmissionRequest {
                attachments: Some(vec![media_id]),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.id, submission.id);
    assert_eq!(updated.attachments.len(), 1);
    assert!(updated.submitted_at >= submission.submitted_at);
    assert!(updated.is_late);
}

#[tokio::test]
async fn test_submit_to_missing_assignment() {
    let ctx = common::setup().await;

    let err = ctx
        .submissions
        .submit(
            STUDENT,
            SubmitRequest {
                school_id: SCHOOL,
                assignment_id: 9999,
                attachments: None,
            },
        )
        .await
        .unwrap_err();

    assert_eq!(err.code(), "E006");
}
