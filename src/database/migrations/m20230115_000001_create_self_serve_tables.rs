use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // One row per file uploaded through self-serve data upload
        manager
            .create_table(
                Table::create()
                    .table(DataUploadFileSummary::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DataUploadFileSummary::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DataUploadFileSummary::SourceId)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataUploadFileSummary::FilePath)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataUploadFileSummary::UserFileName)
                            .text()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataUploadFileSummary::ColumnMapping)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataUploadFileSummary::Created)
                            .timestamp()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataUploadFileSummary::LastModified)
                            .timestamp()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DataprepFlow::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DataprepFlow::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DataprepFlow::ExpectedColumns)
                            .json_binary()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataprepFlow::RecipeId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(DataprepJob::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DataprepJob::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DataprepJob::CreatedOnDataprep)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataprepJob::LastModifiedOnDataprep)
                            .timestamp()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataprepJob::JobId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(DataprepJob::Status).string_len(100).null())
                    .col(
                        ColumnDef::new(DataprepJob::DataprepFlowId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataprepJob::Created)
                            .timestamp()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DataprepJob::LastModified)
                            .timestamp()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_dataprep_job_dataprep_flow_id")
                            .from(DataprepJob::Table, DataprepJob::DataprepFlowId)
                            .to(DataprepFlow::Table, DataprepFlow::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SelfServeSource::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SelfServeSource::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(SelfServeSource::SourceId)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SelfServeSource::SourceName)
                            .string_len(100)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(SelfServeSource::FileSummaryId)
                            .integer()
                            .not_null(),
                    )
                    .col(ColumnDef::new(SelfServeSource::DataprepFlowId).integer().null())
                    .col(
                        ColumnDef::new(SelfServeSource::LastModified)
                            .timestamp()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_self_serve_source_file_summary_id")
                            .from(SelfServeSource::Table, SelfServeSource::FileSummaryId)
                            .to(DataUploadFileSummary::Table, DataUploadFileSummary::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_self_serve_source_dataprep_flow_id")
                            .from(SelfServeSource::Table, SelfServeSource::DataprepFlowId)
                            .to(DataprepFlow::Table, DataprepFlow::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Children first
        manager
            .drop_table(Table::drop().table(SelfServeSource::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(DataprepJob::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(DataprepFlow::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(DataUploadFileSummary::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum DataUploadFileSummary {
    Table,
    Id,
    SourceId,
    FilePath,
    UserFileName,
    ColumnMapping,
    Created,
    LastModified,
}

#[derive(DeriveIden)]
enum DataprepFlow {
    Table,
    Id,
    ExpectedColumns,
    RecipeId,
}

#[derive(DeriveIden)]
enum DataprepJob {
    Table,
    Id,
    CreatedOnDataprep,
    LastModifiedOnDataprep,
    JobId,
    Status,
    DataprepFlowId,
    Created,
    LastModified,
}

#[derive(DeriveIden)]
enum SelfServeSource {
    Table,
    Id,
    SourceId,
    SourceName,
    FileSummaryId,
    DataprepFlowId,
    LastModified,
}
