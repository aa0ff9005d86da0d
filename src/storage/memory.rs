//! In-memory transaction store

use std::sync::Mutex;

use super::TransactionStore;
use crate::error::{TallyError, TallyResult};
use crate::models::Transaction;

/// Keeps transactions in a vector; nothing touches the filesystem
#[derive(Debug, Default)]
pub struct MemoryStore {
    transactions: Mutex<Vec<Transaction>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with transactions
    pub fn with_transactions(transactions: Vec<Transaction>) -> Self {
        Self {
            transactions: Mutex::new(transactions),
        }
    }
}

fn lock_poison_error<T>(err: &std::sync::PoisonError<T>) -> TallyError {
    TallyError::Storage(format!("Failed to acquire lock: {}", err))
}

impl TransactionStore for MemoryStore {
    fn load(&self) -> TallyResult<Vec<Transaction>> {
        let guard = self.transactions.lock().map_err(|e| lock_poison_error(&e))?;
        Ok(guard.clone())
    }

    fn save(&self, transactions: &[Transaction]) -> TallyResult<()> {
        let mut guard = self.transactions.lock().map_err(|e| lock_poison_error(&e))?;
        *guard = transactions.to_vec();
        Ok(())
    }
}
