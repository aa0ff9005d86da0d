//! CLI command handlers
//!
//! Bridges clap argument parsing with the service layer. Handlers are
//! generic over the store so the binary passes the JSON file store and
//! anything embedding the crate can pass its own.

pub mod export;
pub mod import;
pub mod insights;
pub mod transaction;

pub use export::{handle_export_command, ExportArgs, ExportFormat};
pub use import::handle_import_command;
pub use insights::{handle_insights_command, InsightsArgs, InsightsFormat};
pub use transaction::{handle_transaction_command, TransactionCommands};
