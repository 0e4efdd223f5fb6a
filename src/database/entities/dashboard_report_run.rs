use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue, Set};
use serde::{Deserialize, Serialize};

/// Outcome of a dashboard report run, stored by name
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportRunStatus {
    Success,
    Failed,
}

impl ReportRunStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportRunStatus::Success => "SUCCESS",
            ReportRunStatus::Failed => "FAILED",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "SUCCESS" => Some(ReportRunStatus::Success),
            "FAILED" => Some(ReportRunStatus::Failed),
            _ => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "dashboard_report_run")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub dashboard_id: i32,
    pub created: DateTime,
    pub status: String, // 'SUCCESS' or 'FAILED'
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl ActiveModel {
    pub fn new(dashboard_id: i32) -> Self {
        Self {
            id: ActiveValue::NotSet,
            dashboard_id: Set(dashboard_id),
            created: Set(chrono::Utc::now().naive_utc()),
            status: Set(ReportRunStatus::Success.as_str().to_string()),
        }
    }

    pub fn set_status(mut self, status: ReportRunStatus) -> Self {
        self.status = Set(status.as_str().to_string());
        self
    }
}

impl Model {
    /// Status as an enum; rows written before the column existed read as success
    pub fn get_status(&self) -> ReportRunStatus {
        ReportRunStatus::from_str(&self.status).unwrap_or(ReportRunStatus::Success)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_conversion() {
        assert_eq!(ReportRunStatus::Success.as_str(), "SUCCESS");
        assert_eq!(
            ReportRunStatus::from_str("FAILED"),
            Some(ReportRunStatus::Failed)
        );
        assert_eq!(ReportRunStatus::from_str("success"), None);
    }

    #[test]
    fn test_unknown_status_reads_as_success() {
        let run = Model {
            id: 1,
            dashboard_id: 7,
            created: chrono::Utc::now().naive_utc(),
            status: "PENDING".to_string(),
        };
        assert_eq!(run.get_status(), ReportRunStatus::Success);
    }
}
