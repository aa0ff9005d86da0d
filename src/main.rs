use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use tally_cli::cli::{
    handle_export_command, handle_import_command, handle_insights_command,
    handle_transaction_command, ExportArgs, InsightsArgs, TransactionCommands,
};
use tally_cli::config::{paths::TallyPaths, settings::Settings};
use tally_cli::storage::{JsonFileStore, TransactionStore};

#[derive(Parser)]
#[command(
    name = "tally",
    version,
    about = "Track income and expenses and get insights from the terminal",
    long_about = "Tally records income and expense transactions and turns them into \
                  totals, a per-category breakdown, a monthly series, a next-month \
                  forecast and a few plain-language tips."
)]
struct Cli {
    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(flatten)]
    Transaction(TransactionCommands),

    /// Show totals, trends, a forecast and tips
    Insights(InsightsArgs),

    /// Import transactions from a CSV file
    Import {
        /// Path to CSV file
        file: PathBuf,
    },

    /// Export transactions to a file
    Export(ExportArgs),

    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_logging(verbose: bool) {
    // Priority: RUST_LOG env var > --verbose flag > default (warn)
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr)
                .compact(),
        )
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let paths = TallyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    let store = JsonFileStore::new(paths.transactions_file());
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    match cli.command {
        Some(Commands::Transaction(cmd)) => handle_transaction_command(&store, &settings, cmd)?,
        Some(Commands::Insights(args)) => handle_insights_command(&store, &settings, args)?,
        Some(Commands::Import { file }) => handle_import_command(&store, &settings, &file)?,
        Some(Commands::Export(args)) => handle_export_command(&store, &settings, args)?,
        Some(Commands::Init) => {
            println!("Initializing Tally at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            if !paths.transactions_file().exists() {
                store.save(&[])?;
            }
            println!("Initialization complete!");
            println!();
            println!("Run 'tally add expense 12.50 -c Food' to record a transaction.");
        }
        Some(Commands::Config) => {
            println!("Tally Configuration");
            println!("===================");
            println!("Base directory:    {}", paths.base_dir().display());
            println!("Settings file:     {}", paths.settings_file().display());
            println!("Transactions file: {}", paths.transactions_file().display());
            println!("Initialized:       {}", paths.is_initialized());
            println!();
            println!("Settings:");
            println!("  Currency symbol:     {}", settings.currency_symbol);
            println!("  Date format:         {}", settings.date_format);
            println!("  Default category:    {}", settings.default_category);
            println!("  Default description: {}", settings.default_description);
        }
        None => {
            println!("Tally - income and expense tracking with insights");
            println!();
            println!("Run 'tally --help' for usage information.");
        }
    }

    Ok(())
}
