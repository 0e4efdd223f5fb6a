use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

/// A single file uploaded through the self-serve data upload tool
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "data_upload_file_summary")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub source_id: String,
    #[sea_orm(column_type = "Text")]
    pub file_path: String,
    // Uploaded files are renamed on disk; this is what the user called it.
    #[sea_orm(column_type = "Text")]
    pub user_file_name: String,
    #[sea_orm(column_type = "JsonBinary")]
    pub column_mapping: Json, // {original column: mapped column}
    pub created: DateTime,
    pub last_modified: DateTime,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::self_serve_source::Entity")]
    SelfServeSource,
}

impl Related<super::self_serve_source::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::SelfServeSource.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new(
        source_id: impl Into<String>,
        file_path: impl Into<String>,
        user_file_name: impl Into<String>,
        column_mapping: Json,
    ) -> Self {
        let now = chrono::Utc::now().naive_utc();
        Self {
            id: ActiveValue::NotSet,
            source_id: Set(source_id.into()),
            file_path: Set(file_path.into()),
            user_file_name: Set(user_file_name.into()),
            column_mapping: Set(column_mapping),
            created: Set(now),
            last_modified: Set(now),
        }
    }

    /// Replace the column mapping; refreshes `last_modified`.
    pub fn set_column_mapping(mut self, column_mapping: Json) -> Self {
        self.column_mapping = Set(column_mapping);
        self.last_modified = Set(chrono::Utc::now().naive_utc());
        self
    }
}

impl Model {
    /// Mapped column name for an original upload column, if one was configured
    pub fn mapped_column(&self, original: &str) -> Option<&str> {
        self.column_mapping.get(original).and_then(|value| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapped_column_lookup() {
        let now = chrono::Utc::now().naive_utc();
        let model = Model {
            id: 1,
            source_id: "s1".to_string(),
            file_path: "/uploads/3f2a.csv".to_string(),
            user_file_name: "sales.csv".to_string(),
            column_mapping: serde_json::json!({ "Region": "region", "Total": null }),
            created: now,
            last_modified: now,
        };

        assert_eq!(model.mapped_column("Region"), Some("region"));
        assert_eq!(model.mapped_column("Total"), None);
        assert_eq!(model.mapped_column("Missing"), None);
    }

    #[test]
    fn test_set_column_mapping_refreshes_last_modified() {
        let earlier = chrono::Utc::now().naive_utc() - chrono::Duration::hours(1);
        let mut active =
            ActiveModel::new("s1", "/uploads/3f2a.csv", "sales.csv", serde_json::json!({}));
        active.last_modified = Set(earlier);

        let active = active.set_column_mapping(serde_json::json!({ "Region": "region" }));

        assert_eq!(
            active.column_mapping,
            Set(serde_json::json!({ "Region": "region" }))
        );
        match active.last_modified {
            ActiveValue::Set(value) => assert!(value > earlier),
            other => panic!("last_modified not set: {:?}", other),
        }
    }
}
