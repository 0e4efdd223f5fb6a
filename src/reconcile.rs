//! Registry reconciliation between self-serve sources and the pipeline
//! datasource registry.
//!
//! Two passes exist, each running inside one transaction that is begun on
//! entry and committed on success. Any persistence error is propagated with
//! `?`, which drops the transaction and rolls back everything the pass wrote.
//!
//! - **Forward** (`upvert_data`): every self-serve source gets a registry
//!   entry keyed by its `source_id`. Only missing entries are created; an
//!   existing entry keeps its name even if the source's name differs.
//! - **Reverse** (`downvert_data`): every self-serve source with a matching
//!   registry entry takes that entry's name. Sources without a match are
//!   left alone.
//!
//! The passes are not exact inverses: forward never overwrites, reverse
//! always does.

use std::fmt;

use sea_orm::sea_query::OnConflict;
use sea_orm::{
    ActiveModelTrait, ConnectionTrait, DatabaseTransaction, DbErr, EntityTrait, QueryOrder,
    TransactionTrait,
};
use tracing::{debug, info};

use crate::database::entities::{pipeline_datasource, self_serve_source};
use crate::errors::ReconcileResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Fill registry gaps from self-serve sources
    Forward,
    /// Copy registry names back onto self-serve sources
    Reverse,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Forward => write!(f, "forward"),
            Direction::Reverse => write!(f, "reverse"),
        }
    }
}

/// Outcome of one reconciliation pass
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReconcileReport {
    pub direction: Direction,
    /// Self-serve sources read
    pub examined: usize,
    /// Rows created (forward) or updated (reverse)
    pub written: usize,
}

impl ReconcileReport {
    fn new(direction: Direction) -> Self {
        Self {
            direction,
            examined: 0,
            written: 0,
        }
    }
}

/// Adds a pipeline datasource for every self-serve source that has none.
pub async fn upvert_data<C>(db: &C) -> ReconcileResult<ReconcileReport>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;
    let report = forward_pass(&txn).await?;
    txn.commit().await?;

    info!(
        "Forward reconciliation: {} sources examined, {} registry entries created",
        report.examined, report.written
    );
    Ok(report)
}

/// Copies pipeline datasource names onto the matching self-serve sources.
pub async fn downvert_data<C>(db: &C) -> ReconcileResult<ReconcileReport>
where
    C: ConnectionTrait + TransactionTrait,
{
    let txn = db.begin().await?;
    let report = reverse_pass(&txn).await?;
    txn.commit().await?;

    info!(
        "Reverse reconciliation: {} sources examined, {} sources renamed",
        report.examined, report.written
    );
    Ok(report)
}

pub async fn reconcile<C>(db: &C, direction: Direction) -> ReconcileResult<ReconcileReport>
where
    C: ConnectionTrait + TransactionTrait,
{
    match direction {
        Direction::Forward => upvert_data(db).await,
        Direction::Reverse => downvert_data(db).await,
    }
}

/// Insert a registry entry, or overwrite the name of the entry already
/// holding `id`.
pub async fn upsert_registry_entry<C>(db: &C, id: &str, name: &str) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    pipeline_datasource::Entity::insert(pipeline_datasource::ActiveModel::new(id, name))
        .on_conflict(
            OnConflict::column(pipeline_datasource::Column::Id)
                .update_column(pipeline_datasource::Column::Name)
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(())
}

async fn load_sources(txn: &DatabaseTransaction) -> Result<Vec<self_serve_source::Model>, DbErr> {
    self_serve_source::Entity::find()
        .order_by_asc(self_serve_source::Column::Id)
        .all(txn)
        .await
}

async fn forward_pass(txn: &DatabaseTransaction) -> ReconcileResult<ReconcileReport> {
    let mut report = ReconcileReport::new(Direction::Forward);

    for source in load_sources(txn).await? {
        report.examined += 1;

        let existing = pipeline_datasource::Entity::find_by_id(source.source_id.clone())
            .one(txn)
            .await?;
        if existing.is_some() {
            continue;
        }

        upsert_registry_entry(txn, &source.source_id, &source.source_name).await?;
        debug!(
            "Created pipeline datasource {} ({})",
            source.source_id, source.source_name
        );
        report.written += 1;
    }

    Ok(report)
}

async fn reverse_pass(txn: &DatabaseTransaction) -> ReconcileResult<ReconcileReport> {
    let mut report = ReconcileReport::new(Direction::Reverse);

    for source in load_sources(txn).await? {
        report.examined += 1;

        let Some(entry) = pipeline_datasource::Entity::find_by_id(source.source_id.clone())
            .one(txn)
            .await?
        else {
            continue;
        };

        let source_id = source.source_id.clone();
        let active: self_serve_source::ActiveModel = source.into();
        active.rename(entry.name.clone()).update(txn).await?;
        debug!("Renamed self-serve source {} to {}", source_id, entry.name);
        report.written += 1;
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::entities::data_upload_file_summary;
    use crate::database::test_utils::setup_test_db;
    use sea_orm::DatabaseConnection;

    async fn add_source(db: &DatabaseConnection, source_id: &str, name: &str) {
        let summary = data_upload_file_summary::ActiveModel::new(
            source_id,
            format!("uploads/{}.csv", source_id),
            format!("{}.csv", source_id),
            serde_json::json!({}),
        )
        .insert(db)
        .await
        .unwrap();

        self_serve_source::ActiveModel::new(source_id, name, summary.id)
            .insert(db)
            .await
            .unwrap();
    }

    #[test]
    fn test_direction_display() {
        assert_eq!(Direction::Forward.to_string(), "forward");
        assert_eq!(Direction::Reverse.to_string(), "reverse");
    }

    #[tokio::test]
    async fn test_upsert_registry_entry_overwrites_name() {
        let (db, _file) = setup_test_db().await;

        upsert_registry_entry(&db, "s1", "Sales").await.unwrap();
        upsert_registry_entry(&db, "s1", "Sales v2").await.unwrap();

        let entries = pipeline_datasource::Entity::find().all(&db).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "Sales v2");
    }

    #[tokio::test]
    async fn test_forward_skips_duplicate_source_ids() {
        let (db, _file) = setup_test_db().await;
        add_source(&db, "s1", "First").await;
        add_source(&db, "s1", "Second").await;

        let report = upvert_data(&db).await.unwrap();
        assert_eq!(report.examined, 2);
        assert_eq!(report.written, 1);

        let entry = pipeline_datasource::Entity::find_by_id("s1".to_string())
            .one(&db)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(entry.name, "First");
    }

    #[tokio::test]
    async fn test_reconcile_dispatches_on_direction() {
        let (db, _file) = setup_test_db().await;
        add_source(&db, "s1", "Sales").await;

        let forward = reconcile(&db, Direction::Forward).await.unwrap();
        assert_eq!(forward.direction, Direction::Forward);
        assert_eq!(forward.written, 1);

        let reverse = reconcile(&db, Direction::Reverse).await.unwrap();
        assert_eq!(reverse.direction, Direction::Reverse);
        assert_eq!(reverse.examined, 1);
        assert_eq!(reverse.written, 1);
    }
}
