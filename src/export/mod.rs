//! Export module for Tally
//!
//! - CSV: transactions in the same column layout `tally import` reads
//! - JSON: transactions or the insight report, machine-readable
//! - YAML: the insight report, human-readable

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_transactions_csv, CSV_HEADER};
pub use self::json::{
    export_insights_json, export_transactions_json, TransactionExport, EXPORT_SCHEMA_VERSION,
};
pub use self::yaml::export_insights_yaml;

use crate::error::TallyError;

fn export_error(err: impl std::fmt::Display) -> TallyError {
    TallyError::Export(err.to_string())
}
