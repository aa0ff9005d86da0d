//! Transaction display formatting
//!
//! Renders the transaction register as a table for `tally list`.

use std::fmt::Write;

use chrono::NaiveDate;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use super::report::truncate;
use crate::config::Settings;
use crate::models::Transaction;

const DESCRIPTION_WIDTH: usize = 32;

const FALLBACK_DATE_FORMAT: &str = "%Y-%m-%d";

/// Render a date with the user's format, or ISO 8601 if the format is unusable
fn format_date(date: NaiveDate, format: &str) -> String {
    let mut output = String::new();
    if write!(output, "{}", date.format(format)).is_err() {
        return date.format(FALLBACK_DATE_FORMAT).to_string();
    }
    output
}

#[derive(Tabled)]
struct RegisterRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Type")]
    kind: String,
    #[tabled(rename = "Category")]
    category: String,
    #[tabled(rename = "Description")]
    description: String,
    #[tabled(rename = "Amount")]
    amount: String,
}

impl RegisterRow {
    fn new(txn: &Transaction, settings: &Settings) -> Self {
        Self {
            id: txn.id.to_string(),
            date: format_date(txn.date, &settings.date_format),
            kind: txn.kind.to_string(),
            category: txn.category.clone(),
            description: truncate(&txn.description, DESCRIPTION_WIDTH),
            amount: txn.signed_amount().format_with_symbol(&settings.currency_symbol),
        }
    }
}

/// Format a list of transactions as a register table
pub fn format_transaction_register(transactions: &[Transaction], settings: &Settings) -> String {
    if transactions.is_empty() {
        return "No transactions found.\n".to_string();
    }

    let rows: Vec<RegisterRow> = transactions
        .iter()
        .map(|txn| RegisterRow::new(txn, settings))
        .collect();

    let mut output = Table::new(rows).with(Style::sharp()).to_string();
    output.push('\n');
    output
}

/// Format a single transaction for confirmation messages
pub fn format_transaction_details(txn: &Transaction, settings: &Settings) -> String {
    let mut output = String::new();

    output.push_str(&format!("Transaction: {}\n", txn.id));
    output.push_str(&format!(
        "Date:        {}\n",
        format_date(txn.date, &settings.date_format)
    ));
    output.push_str(&format!("Type:        {}\n", txn.kind));
    output.push_str(&format!(
        "Amount:      {}\n",
        txn.amount.format_with_symbol(&settings.currency_symbol)
    ));
    output.push_str(&format!("Category:    {}\n", txn.category));
    output.push_str(&format!("Description: {}\n", txn.description));

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::NaiveDate;

    fn sample() -> Vec<Transaction> {
        let date = NaiveDate::from_ymd_opt(2024, 2, 20).unwrap();
        vec![
            Transaction::expense(date, "Rent", Money::from_cents(50000)),
            Transaction::income(date, "Salary", Money::from_cents(100000)),
        ]
    }

    #[test]
    fn test_empty_register() {
        let output = format_transaction_register(&[], &Settings::default());
        assert_eq!(output, "No transactions found.\n");
    }

    #[test]
    fn test_register_contains_rows() {
        let txns = sample();
        let output = format_transaction_register(&txns, &Settings::default());
        assert!(output.contains("Category"));
        assert!(output.contains("Rent"));
        assert!(output.contains("-$500.00"));
        assert!(output.contains("$1000.00"));
        assert!(output.contains(&txns[0].id.to_string()));
    }

    #[test]
    fn test_register_uses_settings() {
        let settings = Settings {
            currency_symbol: "€".to_string(),
            date_format: "%d/%m/%Y".to_string(),
            ..Settings::default()
        };
        let output = format_transaction_register(&sample(), &settings);
        assert!(output.contains("20/02/2024"));
        assert!(output.contains("€1000.00"));
    }

    #[test]
    fn test_unusable_date_format_falls_back_to_iso() {
        for format in ["%Q", "%H:%M"] {
            let settings = Settings {
                date_format: format.to_string(),
                ..Settings::default()
            };
            let output = format_transaction_register(&sample(), &settings);
            assert!(output.contains("2024-02-20"));

            let details = format_transaction_details(&sample()[0], &settings);
            assert!(details.contains("Date:        2024-02-20"));
        }
    }

    #[test]
    fn test_details() {
        let txn = &sample()[0];
        let output = format_transaction_details(txn, &Settings::default());
        assert!(output.contains("Type:        expense"));
        assert!(output.contains("Amount:      $500.00"));
    }
}
