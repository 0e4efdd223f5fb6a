use sea_orm_migration::prelude::*;
use tracing::info;

use crate::reconcile;

/// Creates the pipeline datasource registry and registers every existing
/// self-serve source in it. Rolling back copies registry names onto the
/// sources before the registry is dropped.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PipelineDatasource::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(PipelineDatasource::Id)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(PipelineDatasource::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        let report = reconcile::upvert_data(manager.get_connection()).await?;
        info!(
            "Registered {} of {} self-serve sources as pipeline datasources",
            report.written, report.examined
        );

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let report = reconcile::downvert_data(manager.get_connection()).await?;
        info!(
            "Restored names on {} of {} self-serve sources",
            report.written, report.examined
        );

        manager
            .drop_table(Table::drop().table(PipelineDatasource::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum PipelineDatasource {
    Table,
    Id,
    Name,
}
