use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, QueryOrder, Set};
use serde::{Deserialize, Serialize};

/// Dataprep flow for a self-serve source: what is needed to trigger a
/// dataprep job and to validate an uploaded dataprep file.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dataprep_flow")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "JsonBinary")]
    pub expected_columns: Json, // ["col_a", "col_b", ...]
    #[sea_orm(unique)]
    pub recipe_id: i32, // Job template on the dataprep side
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::dataprep_job::Entity")]
    DataprepJob,
    #[sea_orm(has_many = "super::self_serve_source::Entity")]
    SelfServeSource,
}

impl Related<super::dataprep_job::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DataprepJob.def()
    }
}

impl Related<super::self_serve_source::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SelfServeSource.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new(recipe_id: i32, expected_columns: Json) -> Self {
        Self {
            id: ActiveValue::NotSet,
            expected_columns: Set(expected_columns),
            recipe_id: Set(recipe_id),
        }
    }
}

impl Model {
    /// Jobs of this flow, most recently created first
    pub fn find_jobs_newest_first(&self) -> Select<super::dataprep_job::Entity> {
        self.find_related(super::dataprep_job::Entity)
            .order_by_desc(super::dataprep_job::Column::Created)
    }

    /// Expected column names; non-string entries are ignored
    pub fn expected_column_names(&self) -> Vec<&str> {
        self.expected_columns
            .as_array()
            .map(|columns| columns.iter().filter_map(|c| c.as_str()).collect())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expected_column_names() {
        let flow = Model {
            id: 1,
            expected_columns: serde_json::json!(["region", "total", 3]),
            recipe_id: 42,
        };
        assert_eq!(flow.expected_column_names(), vec!["region", "total"]);

        let malformed = Model {
            expected_columns: serde_json::json!({ "region": true }),
            ..flow
        };
        assert!(malformed.expected_column_names().is_empty());
    }
}
