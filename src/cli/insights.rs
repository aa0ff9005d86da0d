//! Insights CLI command

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::export::{export_insights_json, export_insights_yaml};
use crate::services::TransactionService;
use crate::storage::TransactionStore;

/// Output format for the insight report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InsightsFormat {
    /// Terminal report
    #[default]
    Text,
    /// JSON, amounts in currency units
    Json,
    /// YAML, amounts in currency units
    Yaml,
    /// Monthly series as CSV, with a total row
    Csv,
}

/// Arguments for `tally insights`
#[derive(Args, Debug)]
pub struct InsightsArgs {
    /// Output format
    #[arg(short, long, value_enum, default_value_t = InsightsFormat::Text)]
    pub format: InsightsFormat,

    /// Write to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the insights command
pub fn handle_insights_command<S: TransactionStore>(
    store: &S,
    settings: &Settings,
    args: InsightsArgs,
) -> TallyResult<()> {
    let report = TransactionService::new(store, settings).insights()?;

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TallyError::Export(format!("Failed to create {}: {}", path.display(), e))
            })?;
            Box::new(BufWriter::new(file))
        }
        None => Box::new(io::stdout().lock()),
    };

    match args.format {
        InsightsFormat::Text => {
            writer.write_all(report.format_terminal(&settings.currency_symbol).as_bytes())?;
        }
        InsightsFormat::Json => {
            export_insights_json(&report, &mut writer, true)?;
            writeln!(writer)?;
        }
        InsightsFormat::Yaml => export_insights_yaml(&report, &mut writer)?,
        InsightsFormat::Csv => report.export_csv(&mut writer)?,
    }
    writer.flush()?;

    if let Some(path) = &args.output {
        println!("Insights written to {}", path.display());
    }

    Ok(())
}
