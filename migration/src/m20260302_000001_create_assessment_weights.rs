use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // 创建评分权重表
        // 声明各分类在科目综合成绩中的占比，综合成绩本身不在本系统计算
        manager
            .create_table(
                Table::create()
                    .table(AssessmentWeights::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AssessmentWeights::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AssessmentWeights::SubjectId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AssessmentWeights::CategoryId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AssessmentWeights::Weight).double().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(AssessmentWeights::Table, AssessmentWeights::CategoryId)
                            .to(AssignmentCategories::Table, AssignmentCategories::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_assessment_weights_subject_id")
                    .table(AssessmentWeights::Table)
                    .col(AssessmentWeights::SubjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AssessmentWeights::Table).to_owned())
            .await?;
        Ok(())
    }
}

#[derive(DeriveIden)]
enum AssessmentWeights {
    #[sea_orm(iden = "assessment_weights")]
    Table,
    Id,
    SubjectId,
    CategoryId,
    Weight,
}

#[derive(DeriveIden)]
enum AssignmentCategories {
    #[sea_orm(iden = "assignment_categories")]
    Table,
    Id,
}
