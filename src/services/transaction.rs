//! Transaction service
//!
//! Turns raw user input into validated transactions and runs every change
//! through a load, modify, save cycle on the store.

use chrono::NaiveDate;
use tracing::info;

use crate::config::Settings;
use crate::error::{TallyError, TallyResult};
use crate::insights::{self, InsightReport};
use crate::models::{Money, Transaction, TransactionId, TransactionKind};
use crate::storage::TransactionStore;

/// Date format accepted for input
pub const INPUT_DATE_FORMAT: &str = "%Y-%m-%d";

/// Raw, unvalidated input for a new transaction
#[derive(Debug, Clone, Default)]
pub struct NewTransaction {
    /// `YYYY-MM-DD`
    pub date: String,
    /// `income` or `expense`
    pub kind: String,
    /// Decimal amount; the sign is dropped
    pub amount: String,
    /// Blank falls back to the configured default category
    pub category: String,
    /// Blank falls back to the configured default description
    pub description: String,
}

/// Service for transaction management
pub struct TransactionService<'a, S: TransactionStore> {
    store: &'a S,
    settings: &'a Settings,
}

impl<'a, S: TransactionStore> TransactionService<'a, S> {
    /// Create a new transaction service
    pub fn new(store: &'a S, settings: &'a Settings) -> Self {
        Self { store, settings }
    }

    /// Validate and record a new transaction
    pub fn add(&self, input: NewTransaction) -> TallyResult<Transaction> {
        let kind: TransactionKind = input
            .kind
            .parse()
            .map_err(|e: String| TallyError::invalid_transaction("type", e))?;

        let txn = build_transaction(
            &input.date,
            kind,
            &input.amount,
            &input.category,
            &input.description,
            self.settings,
        )?;

        let mut transactions = self.store.load()?;
        transactions.push(txn.clone());
        self.store.save(&transactions)?;

        info!(id = %txn.id, kind = %txn.kind, amount = %txn.amount, "added transaction");
        Ok(txn)
    }

    /// Delete the transaction an identifier refers to
    ///
    /// The identifier may be the full UUID, the short `txn-` form, or any
    /// unambiguous leading fragment of either. Returns `false` when nothing
    /// matched.
    pub fn delete(&self, identifier: &str) -> TallyResult<bool> {
        let mut transactions = self.store.load()?;

        let Some(id) = resolve_id(&transactions, identifier)? else {
            return Ok(false);
        };

        transactions.retain(|t| t.id != id);
        self.store.save(&transactions)?;

        info!(%id, "deleted transaction");
        Ok(true)
    }

    /// All transactions, newest first
    pub fn list(&self) -> TallyResult<Vec<Transaction>> {
        let mut transactions = self.store.load()?;
        transactions.sort_by(|a, b| b.date.cmp(&a.date));
        Ok(transactions)
    }

    /// Compute insights over everything currently stored
    pub fn insights(&self) -> TallyResult<InsightReport> {
        let transactions = self.store.load()?;
        Ok(insights::compute(&transactions))
    }
}

/// Find the single transaction an identifier refers to
fn resolve_id(
    transactions: &[Transaction],
    identifier: &str,
) -> TallyResult<Option<TransactionId>> {
    let mut matches = transactions.iter().filter(|t| t.id.matches_prefix(identifier));

    let Some(first) = matches.next() else {
        return Ok(None);
    };

    if matches.next().is_some() {
        return Err(TallyError::Validation(format!(
            "Identifier '{}' matches more than one transaction; use more characters",
            identifier.trim()
        )));
    }

    Ok(Some(first.id))
}

/// Build a transaction from raw fields, applying defaults and normalization
pub(crate) fn build_transaction(
    date: &str,
    kind: TransactionKind,
    amount: &str,
    category: &str,
    description: &str,
    settings: &Settings,
) -> TallyResult<Transaction> {
    let date = parse_date(date)?;
    let amount = parse_amount(amount)?;

    let txn = Transaction::new(
        date,
        kind,
        amount,
        or_default(category, &settings.default_category),
        or_default(description, &settings.default_description),
    );

    txn.validate()
        .map_err(|e| TallyError::invalid_transaction("transaction", e.to_string()))?;
    Ok(txn)
}

/// Parse a `YYYY-MM-DD` date
pub(crate) fn parse_date(s: &str) -> TallyResult<NaiveDate> {
    let s = s.trim();
    if s.is_empty() {
        return Err(TallyError::invalid_transaction("date", "date is required"));
    }
    NaiveDate::parse_from_str(s, INPUT_DATE_FORMAT).map_err(|_| {
        TallyError::invalid_transaction("date", format!("'{}' is not a YYYY-MM-DD date", s))
    })
}

/// Parse an amount, rounded to the cent, with any sign dropped
pub(crate) fn parse_amount(s: &str) -> TallyResult<Money> {
    if s.trim().is_empty() {
        return Err(TallyError::invalid_transaction("amount", "amount is required"));
    }
    let amount = Money::parse(s)
        .map(|m| m.abs())
        .map_err(|e| TallyError::invalid_transaction("amount", e.to_string()))?;

    if amount > Transaction::MAX_AMOUNT {
        return Err(TallyError::invalid_transaction(
            "amount",
            format!("{} exceeds the maximum of {}", amount, Transaction::MAX_AMOUNT),
        ));
    }
    Ok(amount)
}

fn or_default(value: &str, default: &str) -> String {
    let value = value.trim();
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}
