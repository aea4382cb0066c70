use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建作业分类表
        manager
            .create_table(
                Table::create()
                    .table(AssignmentCategories::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssignmentCategories::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssignmentCategories::SchoolId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AssignmentCategories::Name).string().not_null())
                    .col(
                        ColumnDef::new(AssignmentCategories::CreatedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建作业表
        manager
            .create_table(
                Table::create()
                    .table(Assignments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assignments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Assignments::SchoolId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Assignments::SubjectClassId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assignments::CategoryId).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::Title).string().not_null())
                    .col(ColumnDef::new(Assignments::Description).text().null())
                    .col(ColumnDef::new(Assignments::Deadline).big_integer().null())
                    .col(
                        ColumnDef::new(Assignments::AllowLateSubmission)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(ColumnDef::new(Assignments::CreatedBy).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::CreatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::UpdatedAt).big_integer().not_null())
                    .col(ColumnDef::new(Assignments::DeletedAt).big_integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assignments::Table, Assignments::CategoryId)
                            .to(AssignmentCategories::Table, AssignmentCategories::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建提交表
        // 活跃性由状态列表达（active/withdrawn），同一 (assignment_id, user_id)
        // 的唯一性由 upsert 保证，不建唯一约束
        manager
            .create_table(
                Table::create()
                    .table(Submissions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Submissions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Submissions::SchoolId).big_integer().not_null())
                    .col(
                        ColumnDef::new(Submissions::AssignmentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Submissions::UserId).big_integer().not_null())
                    .col(ColumnDef::new(Submissions::Status).string().not_null())
                    .col(
                        ColumnDef::new(Submissions::SubmittedAt)
                            .big_integer()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Submissions::Table, Submissions::AssignmentId)
                            .to(Assignments::Table, Assignments::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建评分表
        manager
            .create_table(
                Table::create()
                    .table(Assessments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Assessments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Assessments::SubmissionId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(Assessments::Score).double().not_null())
                    .col(ColumnDef::new(Assessments::Feedback).text().null())
                    .col(ColumnDef::new(Assessments::AssessedBy).big_integer().not_null())
                    .col(ColumnDef::new(Assessments::AssessedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Assessments::Table, Assessments::SubmissionId)
                            .to(Submissions::Table, Submissions::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建媒体文件表（由外部媒体服务写入，本系统只读）
        manager
            .create_table(
                Table::create()
                    .table(Media::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Media::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Media::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(Media::Name).string().not_null())
                    .col(ColumnDef::new(Media::FileSize).big_integer().not_null())
                    .col(ColumnDef::new(Media::MimeType).string().not_null())
                    .col(ColumnDef::new(Media::FileUrl).string().not_null())
                    .col(ColumnDef::new(Media::OwnerType).string().not_null())
                    .col(ColumnDef::new(Media::OwnerId).big_integer().not_null())
                    .col(ColumnDef::new(Media::CreatedAt).big_integer().not_null())
                    .to_owned(),
            )
            .await?;

        // 创建附件表（多态关联：source_type + source_id，无指向父表的外键）
        manager
            .create_table(
                Table::create()
                    .table(Attachments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Attachments::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Attachments::SchoolId).big_integer().not_null())
                    .col(ColumnDef::new(Attachments::SourceType).string().not_null())
                    .col(ColumnDef::new(Attachments::SourceId).big_integer().not_null())
                    .col(ColumnDef::new(Attachments::MediaId).big_integer().not_null())
                    .col(ColumnDef::new(Attachments::CreatedAt).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Attachments::Table, Attachments::MediaId)
                            .to(Media::Table, Media::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // 创建索引
        // 作业分类表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignment_categories_school_id")
                    .table(AssignmentCategories::Table)
                    .col(AssignmentCategories::SchoolId)
                    .to_owned(),
            )
            .await?;

        // 作业表索引
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_subject_class_id")
                    .table(Assignments::Table)
                    .col(Assignments::SubjectClassId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assignments_school_id")
                    .table(Assignments::Table)
                    .col(Assignments::SchoolId)
                    .to_owned(),
            )
            .await?;

        // 提交表索引（自然键查找）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_submissions_assignment_id_user_id")
                    .table(Submissions::Table)
                    .col(Submissions::AssignmentId)
                    .col(Submissions::UserId)
                    .to_owned(),
            )
            .await?;

        // 评分表索引（按提交查找）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assessments_submission_id")
                    .table(Assessments::Table)
                    .col(Assessments::SubmissionId)
                    .to_owned(),
            )
            .await?;

        // 附件表复合索引（多态查找）
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_attachments_source_type_source_id")
                    .table(Attachments::Table)
                    .col(Attachments::SourceType)
                    .col(Attachments::SourceId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Attachments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Media::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assessments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Submissions::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Assignments::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(AssignmentCategories::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum AssignmentCategories {
    #[sea_orm(iden = "assignment_categories")]
    Table,
    Id,
    SchoolId,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Assignments {
    #[sea_orm(iden = "assignments")]
    Table,
    Id,
    SchoolId,
    SubjectClassId,
    CategoryId,
    Title,
    Description,
    Deadline,
    AllowLateSubmission,
    CreatedBy,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(DeriveIden)]
enum Submissions {
    #[sea_orm(iden = "submissions")]
    Table,
    Id,
    SchoolId,
    AssignmentId,
    UserId,
    Status,
    SubmittedAt,
}

#[derive(DeriveIden)]
enum Assessments {
    #[sea_orm(iden = "assessments")]
    Table,
    Id,
    SubmissionId,
    Score,
    Feedback,
    AssessedBy,
    AssessedAt,
}

#[derive(DeriveIden)]
enum Attachments {
    #[sea_orm(iden = "attachments")]
    Table,
    Id,
    SchoolId,
    SourceType,
    SourceId,
    MediaId,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Media {
    #[sea_orm(iden = "media")]
    Table,
    Id,
    SchoolId,
    Name,
    FileSize,
    MimeType,
    FileUrl,
    OwnerType,
    OwnerId,
    CreatedAt,
}
