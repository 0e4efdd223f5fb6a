#[cfg(test)]
use sea_orm::{Database, DatabaseConnection};

#[cfg(test)]
pub async fn setup_test_db() -> (DatabaseConnection, tempfile::NamedTempFile) {
    // File-backed so that transactions and plain reads may use separate
    // pooled connections
    let file = tempfile::NamedTempFile::new().expect("Failed to create temp database file");
    let url = format!("sqlite://{}?mode=rwc", file.path().display());
    let db = Database::connect(&url)
        .await
        .expect("Failed to connect to test database");

    use sea_orm_migration::MigratorTrait;
    crate::database::migrations::Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");

    (db, file)
}
