use std::collections::HashMap;

pub const DATABASE_ENV: &str = "PIPELINE_REGISTRY_DATABASE";
pub const LOG_LEVEL_ENV: &str = "PIPELINE_REGISTRY_LOG";

const DEFAULT_DATABASE: &str = "pipeline_registry.db";
const DEFAULT_LOG_LEVEL: &str = "info";

/// Runtime configuration loaded from environment variables. Command-line
/// flags take precedence over anything set here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// SQLite path, `:memory:`, or a full database URL
    pub database: String,
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            database: DEFAULT_DATABASE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let values: HashMap<String, String> = [DATABASE_ENV, LOG_LEVEL_ENV]
            .into_iter()
            .filter_map(|key| std::env::var(key).ok().map(|value| (key.to_string(), value)))
            .collect();
        Self::from_map(&values)
    }

    pub fn from_map(values: &HashMap<String, String>) -> Self {
        fn read(values: &HashMap<String, String>, key: &str, default: &str) -> String {
            values
                .get(key)
                .map(|value| value.trim())
                .filter(|value| !value.is_empty())
                .unwrap_or(default)
                .to_string()
        }

        Self {
            database: read(values, DATABASE_ENV, DEFAULT_DATABASE),
            log_level: read(values, LOG_LEVEL_ENV, DEFAULT_LOG_LEVEL).to_lowercase(),
        }
    }

    /// Apply command-line overrides
    pub fn with_overrides(mut self, database: Option<String>, log_level: Option<String>) -> Self {
        if let Some(database) = database {
            self.database = database;
        }
        if let Some(log_level) = log_level {
            self.log_level = log_level.to_lowercase();
        }
        self
    }
}
