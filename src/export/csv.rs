//! CSV export of transactions

use std::io::Write;

use super::export_error;
use crate::error::TallyResult;
use crate::models::Transaction;

/// Column layout shared with the CSV importer
pub const CSV_HEADER: [&str; 6] = ["id", "date", "description", "category", "type", "amount"];

/// Export transactions to CSV, amounts as plain decimals
pub fn export_transactions_csv<W: Write>(
    transactions: &[Transaction],
    writer: W,
) -> TallyResult<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer.write_record(CSV_HEADER).map_err(export_error)?;

    for txn in transactions {
        csv_writer
            .write_record([
                txn.id.as_uuid().to_string(),
                txn.date.format("%Y-%m-%d").to_string(),
                txn.description.clone(),
                txn.category.clone(),
                txn.kind.as_str().to_string(),
                txn.amount.to_decimal_string(),
            ])
            .map_err(export_error)?;
    }

    csv_writer.flush().map_err(export_error)?;
    Ok(())
}
