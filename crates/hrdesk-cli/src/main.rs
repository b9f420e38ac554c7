//! HRDesk CLI - Personnel record management
//!
//! A command-line interface for managing employee accounts and records,
//! their photos and documents, and exporting employee reports.

mod commands;
mod output;

use anyhow::Result;
use clap::{Parser, Subcommand};
use hrdesk_core::config::{DATA_DIR_ENV, DB_PATH_ENV};
use hrdesk_core::services::auth::{ensure_seed_account, SqliteAccountRepository};
use hrdesk_core::{AppPaths, Database, SeedAccount};

#[derive(Parser)]
#[command(name = "hrdesk")]
#[command(author, version, about = "Personnel record management CLI", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format: table (default) or json
    #[arg(long, global = true, default_value = "table")]
    format: output::OutputFormat,

    /// Suppress progress messages
    #[arg(long, short, global = true)]
    quiet: bool,

    /// Show info-level log messages
    #[arg(long, short, global = true)]
    verbose: bool,

    /// Override database path (or set HRDESK_DB_PATH env var)
    #[arg(long, env = DB_PATH_ENV, global = true)]
    db: Option<String>,

    /// Override data directory for the database, photos and documents
    #[arg(long, env = DATA_DIR_ENV, global = true)]
    data_dir: Option<String>,

    /// Account to act as (or set HRDESK_USER env var)
    #[arg(long, short, env = "HRDESK_USER", global = true)]
    user: Option<String>,

    /// Password of the acting account (or set HRDESK_PASSWORD env var)
    #[arg(long, env = "HRDESK_PASSWORD", hide_env_values = true, global = true)]
    password: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Check credentials and show the account
    Login,

    /// Manage employee records
    Employee {
        #[command(subcommand)]
        action: commands::employee::EmployeeAction,
    },

    /// Manage employee photos
    Photo {
        #[command(subcommand)]
        action: commands::files::PhotoAction,
    },

    /// Manage employee documents
    Doc {
        #[command(subcommand)]
        action: commands::files::DocAction,
    },

    /// Export employee reports
    Report {
        #[command(subcommand)]
        action: commands::report::ReportAction,
    },
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let paths = AppPaths::resolve(cli.db.as_deref(), cli.data_dir.as_deref())?;

    // Initialize database
    let db = Database::open(paths.db_path.clone()).await?;

    let seed = SeedAccount::from_env();
    if ensure_seed_account(&SqliteAccountRepository::new(&db.pool), &seed).await? {
        log::info!("Created seed account '{}'", seed.username);
    }

    // Create context for commands
    let ctx = commands::Context {
        db,
        paths,
        format: cli.format,
        quiet: cli.quiet,
        credentials: commands::Credentials {
            username: cli.user,
            password: cli.password,
        },
    };

    // Execute command
    match cli.command {
        Commands::Login => commands::login::execute(&ctx).await,
        Commands::Employee { action } => commands::employee::execute(&ctx, action).await,
        Commands::Photo { action } => commands::files::execute_photo(&ctx, action).await,
        Commands::Doc { action } => commands::files::execute_doc(&ctx, action).await,
        Commands::Report { action } => commands::report::execute(&ctx, action).await,
    }
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli).await {
        output::print_error(&format!("Error: {:#}", e));
        std::process::exit(1);
    }
}
