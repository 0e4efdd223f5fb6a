use anyhow::Result;
use chrono::{Duration, Utc};
use sea_orm::*;
use serde_json::json;
use tracing::info;

use crate::database::entities::{
    data_upload_file_summary, dataprep_flow, dataprep_job, self_serve_source,
};

pub const EXAMPLE_SOURCE_ID: &str = "example_sales";

/// Creates a self-serve source with its upload summary, dataprep flow and a
/// finished dataprep job. Returns the source's row id.
pub async fn create_example_source(db: &DatabaseConnection) -> Result<i32> {
    let existing = self_serve_source::Entity::find()
        .filter(self_serve_source::Column::SourceId.eq(EXAMPLE_SOURCE_ID))
        .one(db)
        .await?;

    if let Some(source) = existing {
        info!("Example source already exists, skipping seed data creation");
        return Ok(source.id);
    }

    info!("Creating example self-serve source: {}", EXAMPLE_SOURCE_ID);

    let txn = db.begin().await?;

    let file_summary = data_upload_file_summary::ActiveModel::new(
        EXAMPLE_SOURCE_ID,
        "uploads/example_sales/0b5c1e.csv",
        "Regional Sales 2023.csv",
        json!({
            "Region": "region",
            "Sale Date": "date",
            "Total (USD)": "total",
        }),
    )
    .insert(&txn)
    .await?;

    let flow = dataprep_flow::ActiveModel::new(1001, json!(["region", "date", "total"]))
        .insert(&txn)
        .await?;

    let started = Utc::now().naive_utc() - Duration::minutes(10);
    dataprep_job::ActiveModel::new(flow.id, 5001, started, started + Duration::minutes(4))
        .set_status("Complete")
        .insert(&txn)
        .await?;

    let source = self_serve_source::ActiveModel::new(
        EXAMPLE_SOURCE_ID,
        "Example Sales",
        file_summary.id,
    )
    .with_dataprep_flow(flow.id)
    .insert(&txn)
    .await?;

    txn.commit().await?;

    info!("Created example source with ID: {}", source.id);
    Ok(source.id)
}
