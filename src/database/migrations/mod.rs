pub use sea_orm_migration::prelude::*;

mod m20230101_000001_create_dashboard_report_run;
mod m20230115_000001_create_self_serve_tables;
mod m20230125_000001_create_pipeline_datasource;
mod m20230206_000001_add_status_to_dashboard_report_run;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20230101_000001_create_dashboard_report_run::Migration),
            Box::new(m20230115_000001_create_self_serve_tables::Migration),
            Box::new(m20230125_000001_create_pipeline_datasource::Migration),
            Box::new(m20230206_000001_add_status_to_dashboard_report_run::Migration),
        ]
    }
}
