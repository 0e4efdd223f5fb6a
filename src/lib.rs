pub mod config;
pub mod database;
pub mod errors;
pub mod migrate;
pub mod reconcile;

pub use config::AppConfig;
pub use reconcile::{downvert_data, upvert_data, Direction, ReconcileReport};
