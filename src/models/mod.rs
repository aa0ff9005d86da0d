//! Core data models for Tally
//!
//! This module contains the data structures that represent the tracking
//! domain: transactions, their identifiers and money amounts.

pub mod ids;
pub mod money;
pub mod transaction;

pub use ids::TransactionId;
pub use money::{Money, MoneyParseError};
pub use transaction::{Transaction, TransactionKind, TransactionValidationError};
