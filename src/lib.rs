//! Tally - income and expense tracking with an insight engine
//!
//! The core of the crate is [`insights::compute`], a pure function from a
//! list of transactions to an [`insights::InsightReport`]: totals, expenses
//! per category, a monthly series, a naive next-month forecast and a handful
//! of rule-based tips. Everything else exists to get transactions in and
//! reports out.
//!
//! # Architecture
//!
//! - `config`: Path resolution and user settings
//! - `error`: Custom error types
//! - `models`: Money, IDs and the transaction record
//! - `insights`: Aggregation, forecast, tips and the report
//! - `storage`: JSON file and in-memory transaction stores
//! - `services`: Validation and the load, modify, save cycle
//! - `export`: CSV, JSON and YAML writers
//! - `display`: Terminal formatting
//! - `cli`: Command handlers for the `tally` binary
//!
//! # Example
//!
//! ```rust,no_run
//! use tally_cli::config::{paths::TallyPaths, settings::Settings};
//! use tally_cli::services::TransactionService;
//! use tally_cli::storage::JsonFileStore;
//!
//! # fn main() -> Result<(), tally_cli::TallyError> {
//! let paths = TallyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let store = JsonFileStore::new(paths.transactions_file());
//!
//! let report = TransactionService::new(&store, &settings).insights()?;
//! println!("{}", report.format_terminal(&settings.currency_symbol));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod insights;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{TallyError, TallyResult};
