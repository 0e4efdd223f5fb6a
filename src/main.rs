use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing::Level;
use tracing_subscriber::EnvFilter;

use pipeline_registry::config::AppConfig;
use pipeline_registry::database::{establish_connection, get_database_url, seed_data};
use pipeline_registry::migrate::{migrate_database, MigrateDirection};
use pipeline_registry::reconcile::{self, Direction};

#[derive(Parser)]
#[clap(author, version, about)]
struct Cli {
    #[clap(short, long, global = true)]
    log_level: Option<String>,
    /// SQLite path or database URL
    #[clap(short, long, global = true)]
    database: Option<String>,
    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Db {
        #[clap(subcommand)]
        command: DbCommands,
    },
    /// Run one registry reconciliation pass
    Reconcile {
        #[clap(subcommand)]
        direction: ReconcileCommands,
    },
}

#[derive(Subcommand, Debug)]
enum DbCommands {
    Init,
    Migrate {
        #[clap(subcommand)]
        direction: MigrateDirection,
    },
    /// Insert an example self-serve source
    Seed,
}

#[derive(Subcommand, Debug)]
enum ReconcileCommands {
    /// Register every self-serve source missing from the pipeline registry
    Forward,
    /// Copy registry names back onto self-serve sources
    Reverse,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    let config = AppConfig::from_env().with_overrides(args.database, args.log_level);
    setup_logging(&config.log_level);

    let database_url = get_database_url(Some(&config.database));
    let db = establish_connection(&database_url).await?;

    match args.command {
        Commands::Db { command } => match command {
            DbCommands::Init => {
                info!("Initializing database: {}", config.database);
                migrate_database(&db, MigrateDirection::Up { steps: None }).await?;
            }
            DbCommands::Migrate { direction } => {
                info!("Running database migration: {:?}", direction);
                migrate_database(&db, direction).await?;
            }
            DbCommands::Seed => {
                seed_data::create_example_source(&db).await?;
            }
        },
        Commands::Reconcile { direction } => {
            let direction = match direction {
                ReconcileCommands::Forward => Direction::Forward,
                ReconcileCommands::Reverse => Direction::Reverse,
            };
            info!("Running {} reconciliation", direction);
            let report = reconcile::reconcile(&db, direction).await?;
            println!(
                "{}: examined {}, wrote {}",
                report.direction, report.examined, report.written
            );
        }
    }

    Ok(())
}

fn setup_logging(log_level: &str) {
    let log_level = match log_level {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_string()))
        .without_time()
        .init();
}
