//! Service layer for Tally
//!
//! Business logic on top of the storage layer: input validation, defaults,
//! and the load, modify, save cycle around the store.

pub mod import;
pub mod transaction;

pub use import::{ColumnMapping, ImportResult, ImportRow, ImportService};
pub use transaction::{NewTransaction, TransactionService};
