//! Transaction store backed by a JSON file
//!
//! File layout: `{ "transactions": [ ... ] }`, newest first.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::file_io::{read_json, write_json_atomic};
use super::TransactionStore;
use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;

/// Serializable transaction file
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct TransactionData {
    #[serde(default)]
    transactions: Vec<Transaction>,
}

/// Stores all transactions in a single JSON file
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store for the given file; nothing is read until `load`
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl TransactionStore for JsonFileStore {
    fn load(&self) -> TallyResult<Vec<Transaction>> {
        let data: TransactionData = read_json(&self.path)?;

        // Hand-edited files must meet the same rules as recorded input
        for txn in &data.transactions {
            txn.validate().map_err(|e| {
                TallyError::Storage(format!(
                    "Invalid transaction {} in {}: {}",
                    txn.id,
                    self.path.display(),
                    e
                ))
            })?;
        }

        debug!(
            count = data.transactions.len(),
            path = %self.path.display(),
            "loaded transactions"
        );
        Ok(data.transactions)
    }

    fn save(&self, transactions: &[Transaction]) -> TallyResult<()> {
        let mut transactions = transactions.to_vec();
        // Stable, so same-day entries keep their relative order
        transactions.sort_by(|a, b| b.date.cmp(&a.date));

        let count = transactions.len();
        write_json_atomic(&self.path, &TransactionData { transactions })?;
        debug!(count, path = %self.path.display(), "saved transactions");
        Ok(())
    }
}
