//! CSV import service
//!
//! Reads transactions from a CSV file with a header row. Column names are
//! matched case-insensitively, so both `date,amount` and `Date,Amount`
//! headers work, and column order does not matter.
//!
//! Rows that fail validation are skipped and reported; the rest are appended
//! in a single save. Problems with the file itself (unreadable, missing a
//! required column) abort the import before anything is written.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};
use tracing::{debug, info, warn};

use super::transaction::build_transaction;
use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::models::{Transaction, TransactionKind};
use crate::storage::TransactionStore;

/// Positions of the recognised columns in the header row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    pub date: usize,
    pub amount: usize,
    pub kind: Option<usize>,
    pub category: Option<usize>,
    pub description: Option<usize>,
}

impl ColumnMapping {
    /// Detect the mapping from a header record
    ///
    /// `date` and `amount` are required; the other columns fall back to
    /// defaults when absent.
    pub fn from_headers(headers: &StringRecord) -> TallyResult<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim().eq_ignore_ascii_case(name))
        };
        let require = |name: &str| {
            find(name).ok_or_else(|| {
                TallyError::Import(format!("CSV header is missing the '{}' column", name))
            })
        };

        Ok(Self {
            date: require("date")?,
            amount: require("amount")?,
            kind: find("type"),
            category: find("category"),
            description: find("description"),
        })
    }
}

/// Outcome of parsing one data row
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportRow {
    /// The row became a valid transaction
    Parsed(Transaction),
    /// The row was rejected; `row` is 1-based, not counting the header
    Invalid { row: usize, error: String },
}

/// Summary of a completed import
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportResult {
    /// Number of transactions added
    pub imported: usize,
    /// Number of rows skipped
    pub skipped: usize,
    /// One message per skipped row
    pub messages: Vec<String>,
}

/// Service for CSV import
pub struct ImportService<'a, S: TransactionStore> {
    store: &'a S,
    settings: &'a Settings,
}

impl<'a, S: TransactionStore> ImportService<'a, S> {
    /// Create a new import service
    pub fn new(store: &'a S, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    /// Parse every data row without touching the store
    pub fn parse<R: Read>(&self, reader: R) -> TallyResult<Vec<ImportRow>> {
        let mut csv_reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = csv_reader
            .headers()
            .map_err(|e| TallyError::Import(format!("Failed to read CSV header: {}", e)))?
            .clone();
        let mapping = ColumnMapping::from_headers(&headers)?;
        debug!(?mapping, "detected CSV columns");

        let rows = csv_reader
            .records()
            .enumerate()
            .map(|(idx, result)| {
                let row = idx + 1;
                let parsed = result
                    .map_err(|e| format!("Error reading CSV record: {}", e))
                    .and_then(|record| {
                        self.parse_record(&record, &mapping)
                            .map_err(|e| e.to_string())
                    });
                match parsed {
                    Ok(txn) => ImportRow::Parsed(txn),
                    Err(error) => ImportRow::Invalid { row, error },
                }
            })
            .collect();

        Ok(rows)
    }

    /// Parse the file and append every valid row to the store
    pub fn import<R: Read>(&self, reader: R) -> TallyResult<ImportResult> {
        let rows = self.parse(reader)?;

        let mut result = ImportResult::default();
        let mut new_transactions = Vec::new();

        for row in rows {
            match row {
                ImportRow::Parsed(txn) => new_transactions.push(txn),
                ImportRow::Invalid { row, error } => {
                    warn!(row, %error, "skipping CSV row");
                    result.skipped += 1;
                    result.messages.push(format!("Row {}: {}", row, error));
                }
            }
        }

        result.imported = new_transactions.len();
        if !new_transactions.is_empty() {
            let mut transactions = self.store.load()?;
            transactions.extend(new_transactions);
            self.store.save(&transactions)?;
        }

        info!(
            imported = result.imported,
            skipped = result.skipped,
            "import complete"
        );
        Ok(result)
    }

    fn parse_record(
        &self,
        record: &StringRecord,
        mapping: &ColumnMapping,
    ) -> TallyResult<Transaction> {
        let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).unwrap_or("");

        // Blank or unrecognised types are treated as expenses
        let kind = field(mapping.kind)
            .parse()
            .unwrap_or(TransactionKind::Expense);

        build_transaction(
            field(Some(mapping.date)),
            kind,
            field(Some(mapping.amount)),
            field(mapping.category),
            field(mapping.description),
            self.settings,
        )
    }
}
