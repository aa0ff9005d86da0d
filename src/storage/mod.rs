//! Storage layer for Tally
//!
//! The insight engine only ever sees a slice of transactions; persistence is
//! hidden behind [`TransactionStore`] so the services run the same against
//! the JSON file on disk and an in-memory vector in tests.

pub mod file_io;
pub mod json_store;
pub mod memory;

pub use file_io::{read_json, write_json_atomic};
pub use json_store::JsonFileStore;
pub use memory::MemoryStore;

use crate::error::TallyResult;
use crate::models::Transaction;

/// A place transactions are loaded from and saved to
///
/// Every operation is a whole-collection read or write; callers follow a
/// load, modify, save cycle.
pub trait TransactionStore {
    /// Load every stored transaction
    fn load(&self) -> TallyResult<Vec<Transaction>>;

    /// Replace the stored collection
    fn save(&self, transactions: &[Transaction]) -> TallyResult<()>;
}

impl<S: TransactionStore + ?Sized> TransactionStore for &S {
    fn load(&self) -> TallyResult<Vec<Transaction>> {
        (**self).load()
    }

    fn save(&self, transactions: &[Transaction]) -> TallyResult<()> {
        (**self).save(transactions)
    }
}
