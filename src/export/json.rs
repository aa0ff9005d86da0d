//! JSON export of transactions and insight reports

use std::io::Write;

use serde::{Deserialize, Serialize};

use super::export_error;
use crate::error::TallyResult;
use crate::insights::InsightReport;
use crate::models::Transaction;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Versioned wrapper around an exported transaction list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionExport {
    /// Schema version for compatibility checking
    pub schema_version: String,
    /// Application version that created the export
    pub app_version: String,
    /// Number of transactions in the export
    pub transaction_count: usize,
    /// The transactions, amounts in cents
    pub transactions: Vec<Transaction>,
}

impl TransactionExport {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            transaction_count: transactions.len(),
            transactions,
        }
    }
}

fn write_json<T: Serialize, W: Write>(value: &T, writer: W, pretty: bool) -> TallyResult<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, value).map_err(export_error)
    } else {
        serde_json::to_writer(writer, value).map_err(export_error)
    }
}

/// Export transactions as JSON
pub fn export_transactions_json<W: Write>(
    transactions: &[Transaction],
    writer: W,
    pretty: bool,
) -> TallyResult<()> {
    write_json(&TransactionExport::new(transactions.to_vec()), writer, pretty)
}

/// Export an insight report as JSON
pub fn export_insights_json<W: Write>(
    report: &InsightReport,
    writer: W,
    pretty: bool,
) -> TallyResult<()> {
    write_json(report, writer, pretty)
}
