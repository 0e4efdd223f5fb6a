use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

/// A data source configured and uploaded through the self-serve upload tool
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "self_serve_source")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub source_id: String, // Matches pipeline_datasource.id by convention, no FK
    pub source_name: String,
    pub file_summary_id: i32, // The source's current file
    pub dataprep_flow_id: Option<i32>,
    pub last_modified: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::data_upload_file_summary::Entity",
        from = "Column::FileSummaryId",
        to = "super::data_upload_file_summary::Column::Id",
        on_delete = "Cascade"
    )]
    DataUploadFileSummary,
    #[sea_orm(
        belongs_to = "super::dataprep_flow::Entity",
        from = "Column::DataprepFlowId",
        to = "super::dataprep_flow::Column::Id",
        on_delete = "Cascade"
    )]
    DataprepFlow,
}

impl Related<super::data_upload_file_summary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DataUploadFileSummary.def()
    }
}

impl Related<super::dataprep_flow::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DataprepFlow.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new(
        source_id: impl Into<String>,
        source_name: impl Into<String>,
        file_summary_id: i32,
    ) -> Self {
        Self {
            id: ActiveValue::NotSet,
            source_id: Set(source_id.into()),
            source_name: Set(source_name.into()),
            file_summary_id: Set(file_summary_id),
            dataprep_flow_id: Set(None),
            last_modified: Set(chrono::Utc::now().naive_utc()),
        }
    }

    pub fn with_dataprep_flow(mut self, dataprep_flow_id: i32) -> Self {
        self.dataprep_flow_id = Set(Some(dataprep_flow_id));
        self
    }

    pub fn rename(mut self, source_name: impl Into<String>) -> Self {
        self.source_name = Set(source_name.into());
        self.last_modified = Set(chrono::Utc::now().naive_utc());
        self
    }
}
