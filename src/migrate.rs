use anyhow::Result;
use clap::Subcommand;
use sea_orm::DatabaseConnection;
use sea_orm_migration::{MigrationStatus, MigratorTrait};
use tracing::info;

use crate::database::migrations::Migrator;

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum MigrateDirection {
    /// Apply pending migrations
    Up {
        /// Apply at most this many
        #[clap(short = 'n', long)]
        steps: Option<u32>,
    },
    /// Roll back applied migrations, newest first
    Down {
        /// Roll back this many (default: one)
        #[clap(short = 'n', long, default_value = "1")]
        steps: u32,
    },
    /// Roll back everything, then reapply
    Fresh,
    /// List migrations and whether they are applied
    Status,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MigrationState {
    pub name: String,
    pub applied: bool,
}

pub async fn migrate_database(db: &DatabaseConnection, direction: MigrateDirection) -> Result<()> {
    match direction {
        MigrateDirection::Up { steps } => {
            info!("Running migrations up");
            Migrator::up(db, steps).await?;
        }
        MigrateDirection::Down { steps } => {
            info!("Rolling back {} migration(s)", steps);
            Migrator::down(db, Some(steps)).await?;
        }
        MigrateDirection::Fresh => {
            info!("Running fresh migrations (down then up)");
            Migrator::down(db, None).await?;
            Migrator::up(db, None).await?;
        }
        MigrateDirection::Status => {
            // Command output, not a log line: printed regardless of log level
            print!("{}", format_status(&migration_status(db).await?));
            return Ok(());
        }
    }

    info!("Database migration completed");
    Ok(())
}

pub async fn migration_status(db: &DatabaseConnection) -> Result<Vec<MigrationState>> {
    let migrations = Migrator::get_migration_with_status(db).await?;
    Ok(migrations
        .iter()
        .map(|migration| MigrationState {
            name: migration.name().to_string(),
            applied: matches!(migration.status(), MigrationStatus::Applied),
        })
        .collect())
}

/// One line per migration: name padded to a column, then applied/pending.
pub fn format_status(states: &[MigrationState]) -> String {
    states
        .iter()
        .map(|state| {
            let marker = if state.applied { "applied" } else { "pending" };
            format!("{:<60} {}\n", state.name, marker)
        })
        .collect()
}
