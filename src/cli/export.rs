//! CLI command for exporting transactions

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::export::{export_transactions_csv, export_transactions_json};
use crate::services::TransactionService;
use crate::storage::TransactionStore;

/// Export format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    /// CSV, readable by `tally import`
    Csv,
    /// JSON, amounts in cents
    Json,
}

/// Arguments for `tally export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "csv")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle the export command
pub fn handle_export_command<S: TransactionStore>(
    store: &S,
    settings: &Settings,
    args: ExportArgs,
) -> TallyResult<()> {
    let transactions = TransactionService::new(store, settings).list()?;

    let file = File::create(&args.output).map_err(|e| {
        TallyError::Export(format!("Failed to create {}: {}", args.output.display(), e))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_transactions_csv(&transactions, &mut writer)?,
        ExportFormat::Json => export_transactions_json(&transactions, &mut writer, args.pretty)?,
    }
    writer.flush()?;

    println!(
        "Exported {} transactions to {}",
        transactions.len(),
        args.output.display()
    );
    Ok(())
}
