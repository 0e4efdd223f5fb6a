use sea_orm::{ConnectOptions, Database, DatabaseConnection, DbErr};
use std::time::Duration;

pub async fn establish_connection(database_url: &str) -> Result<DatabaseConnection, DbErr> {
    let mut opt = ConnectOptions::new(database_url);

    // Every connection to an in-memory SQLite database gets its own empty
    // database, so the pool must hold exactly one.
    let max_connections = if is_memory_url(database_url) { 1 } else { 5 };

    // SQLite serialises writers; a handful of connections is plenty for
    // migrations and reconciliation passes.
    opt.max_connections(max_connections)
        .min_connections(1)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .sqlx_logging(true)
        .sqlx_logging_level(tracing::log::LevelFilter::Debug);

    Database::connect(opt).await
}

fn is_memory_url(database_url: &str) -> bool {
    database_url.contains(":memory:") || database_url.contains("mode=memory")
}

pub fn get_database_url(database_path: Option<&str>) -> String {
    match database_path {
        Some(":memory:") => "sqlite::memory:".to_string(),
        Some(url) if url.contains("://") || url.starts_with("sqlite:") => url.to_string(),
        Some(path) => format!("sqlite://{}?mode=rwc", path),
        None => "sqlite://pipeline_registry.db?mode=rwc".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::entities::{
        data_upload_file_summary, pipeline_datasource, self_serve_source,
    };
    use crate::database::migrations::Migrator;
    use sea_orm::{ActiveModelTrait, EntityTrait};
    use sea_orm_migration::MigratorTrait;

    #[test]
    fn test_memory_url_detection() {
        assert!(is_memory_url("sqlite::memory:"));
        assert!(is_memory_url("sqlite://registry?mode=memory"));
        assert!(!is_memory_url("sqlite://data/registry.db?mode=rwc"));
    }

    #[tokio::test]
    async fn test_in_memory_database_keeps_schema_across_passes() {
        let db = establish_connection(&get_database_url(Some(":memory:")))
            .await
            .unwrap();
        Migrator::up(&db, None).await.unwrap();

        let summary = data_upload_file_summary::ActiveModel::new(
            "s1",
            "uploads/s1.csv",
            "s1.csv",
            serde_json::json!({}),
        )
        .insert(&db)
        .await
        .unwrap();
        self_serve_source::ActiveModel::new("s1", "Sales", summary.id)
            .insert(&db)
            .await
            .unwrap();

        let report = crate::reconcile::upvert_data(&db).await.unwrap();
        assert_eq!(report.written, 1);

        let entries = pipeline_datasource::Entity::find().all(&db).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Sales");
    }

    #[test]
    fn test_database_url_resolution() {
        assert_eq!(get_database_url(Some(":memory:")), "sqlite::memory:");
        assert_eq!(
            get_database_url(Some("data/registry.db")),
            "sqlite://data/registry.db?mode=rwc"
        );
        assert_eq!(
            get_database_url(Some("postgres://app@localhost/web")),
            "postgres://app@localhost/web"
        );
        assert_eq!(
            get_database_url(Some("sqlite:existing.db")),
            "sqlite:existing.db"
        );
        assert_eq!(
            get_database_url(None),
            "sqlite://pipeline_registry.db?mode=rwc"
        );
    }
}
