use sea_orm_migration::prelude::*;

/// Baseline for the reporting table that later gains a `status` column.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(DashboardReportRun::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DashboardReportRun::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(DashboardReportRun::DashboardId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(DashboardReportRun::Created)
                            .timestamp()
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DashboardReportRun::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum DashboardReportRun {
    Table,
    Id,
    DashboardId,
    Created,
}
