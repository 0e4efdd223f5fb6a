use sea_orm_migration::prelude::*;

use crate::database::entities::ReportRunStatus;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(DashboardReportRun::Table)
                    .add_column(
                        ColumnDef::new(DashboardReportRun::Status)
                            .string()
                            .not_null()
                            .default(ReportRunStatus::Success.as_str()),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .alter_table(
                Table::alter()
                    .table(DashboardReportRun::Table)
                    .drop_column(DashboardReportRun::Status)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
enum DashboardReportRun {
    Table,
    Status,
}
