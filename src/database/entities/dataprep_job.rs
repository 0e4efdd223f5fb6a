use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

/// A single execution of a dataprep flow
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dataprep_job")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_on_dataprep: DateTime,
    pub last_modified_on_dataprep: DateTime,
    #[sea_orm(unique)]
    pub job_id: i32,
    pub status: Option<String>, // As reported by dataprep, free-form
    pub dataprep_flow_id: i32,
    pub created: DateTime,
    pub last_modified: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::dataprep_flow::Entity",
        from = "Column::DataprepFlowId",
        to = "super::dataprep_flow::Column::Id",
        on_delete = "Cascade"
    )]
    DataprepFlow,
}

impl Related<super::dataprep_flow::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DataprepFlow.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new(
        dataprep_flow_id: i32,
        job_id: i32,
        created_on_dataprep: DateTime,
        last_modified_on_dataprep: DateTime,
    ) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: ActiveValue::NotSet,
            created_on_dataprep: Set(created_on_dataprep),
            last_modified_on_dataprep: Set(last_modified_on_dataprep),
            job_id: Set(job_id),
            status: Set(None),
            dataprep_flow_id: Set(dataprep_flow_id),
            created: Set(now),
            last_modified: Set(now),
        }
    }

    pub fn set_status(mut self, status: impl Into<String>) -> Self {
        self.status = Set(Some(status.into()));
        self.last_modified = Set(chrono::Utc::now().naive_utc());
        self
    }
}
