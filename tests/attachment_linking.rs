//! 附件多态链接集成测试：来源隔离、整组替换与媒体元数据组装。

mod common;

use rust_schoolsystem_next::models::assignments::requests::UpdateAssignmentRequest;
use rust_schoolsystem_next::models::attachments::entities::SourceType;

const SCHOOL: i64 = 1;

#[tokio::test]
async fn test_link_and_get_by_source_in_order() {
    let ctx = common::setup().await;
    let first = common::seed_media(&ctx, SCHOOL, "chapter1.pdf").await;
    let second = common::seed_media(&ctx, SCHOOL, "chapter2.pdf").await;

    ctx.attachments
        .link(SCHOOL, SourceType::Material, 77, first)
        .await
        .unwrap();
    ctx.attachments
        .link(SCHOOL, SourceType::Material, 77, second)
        .await
        .unwrap();

    let attachments = ctx
        .attachments
        .get_by_source(SourceType::Material, 77)
        .await
        .unwrap();

    assert_eq!(attachments.len(), 2);
    // 按链接顺序返回
    assert_eq!(attachments[0].media_id, first);
    assert_eq!(attachments[1].media_id, second);

    // 媒体元数据已组装
    let media = attachments[0].media.as_ref().expect("媒体元数据缺失");
    assert_eq!(media.name, "chapter1.pdf");
    assert_eq!(media.mime_type, "application/pdf");
}

#[tokio::test]
async fn test_duplicate_links_are_allowed() {
    let ctx = common::setup().await;
    let media_id = common::seed_media(&ctx, SCHOOL, "slides.pdf").await;

    ctx.attachments
        .link(SCHOOL, SourceType::Feed, 5, media_id)
        .await
        .unwrap();
    ctx.attachments
        .link(SCHOOL, SourceType::Feed, 5, media_id)
        .await
        .unwrap();

    let attachments = ctx
        .attachments
        .get_by_source(SourceType::Feed, 5)
        .await
        .unwrap();
    assert_eq!(attachments.len(), 2);
}

#[tokio::test]
async fn test_sources_are_isolated_by_type_and_id() {
    let ctx = common::setup().await;
    let material_media = common::seed_media(&ctx, SCHOOL, "notes.pdf").await;
    let feed_media = common::seed_media(&ctx, SCHOOL, "photo.pdf").await;

    // 同一 source_id，不同 source_type
    ctx.attachments
        .link(SCHOOL, SourceType::Material, 1, material_media)
        .await
        .unwrap();
    ctx.attachments
        .link(SCHOOL, SourceType::Feed, 1, feed_media)
        .await
        .unwrap();

    let materials = ctx
        .attachments
        .get_by_source(SourceType::Material, 1)
        .await
        .unwrap();
    assert_eq!(materials.len(), 1);
    assert_eq!(materials[0].media_id, material_media);

    // 解除 material 的链接不影响 feed
    let removed = ctx
        .attachments
        .unlink_by_source(SourceType::Material, 1)
        .await
        .unwrap();
    assert_eq!(removed, 1);

    let feeds = ctx
        .attachments
        .get_by_source(SourceType::Feed, 1)
        .await
        .unwrap();
    assert_eq!(feeds.len(), 1);
}

#[tokio::test]
async fn test_unlink_empty_source_returns_zero() {
    let ctx = common::setup().await;

    let removed = ctx
        .attachments
        .unlink_by_source(SourceType::Comment, 42)
        .await
        .unwrap();
    assert_eq!(removed, 0);
}

#[tokio::test]
async fn test_assignment_update_replaces_attachment_set() {
    let ctx = common::setup().await;
    let category_id = common::seed_category(&ctx, SCHOOL, "作业").await;
    let old_a = common::seed_media(&ctx, SCHOOL, "old_a.pdf").await;
    let old_b = common::seed_media(&ctx, SCHOOL, "old_b.pdf").await;
    let replacement = common::seed_media(&ctx, SCHOOL, "new.pdf").await;

    let mut req = common::assignment_request(SCHOOL, 10, category_id, "附件替换");
    req.attachments = Some(vec![old_a, old_b]);

    let assignment = ctx.assignments.create_assignment(900, req).await.unwrap();
    assert_eq!(assignment.attachments.len(), 2);

    let updated = ctx
        .assignments
        .update_assignment(
            assignment.id,
            UpdateAssignmentRequest {
                category_id: None,
                title: None,
                description: None,
                deadline: None,
                allow_late_submission: None,
                attachments: Some(vec![replacement]),
            },
        )
        .await
        .unwrap();

    // 整组替换：旧链接消失，只剩新的一条
    assert_eq!(updated.attachments.len(), 1);
    assert_eq!(updated.attachments[0].media_id, replacement);
}
