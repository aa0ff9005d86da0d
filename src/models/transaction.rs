//! Transaction model
//!
//! A single dated money movement, typed as income or expense. Amounts are
//! always non-negative; the kind carries the direction.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::ids::TransactionId;
use super::money::Money;

/// Direction of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionKind {
    /// Money coming in
    Income,
    /// Money going out
    Expense,
}

impl TransactionKind {
    /// Lowercase name as used in storage and CSV files
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TransactionKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(format!(
                "unknown transaction type '{}', expected 'income' or 'expense'",
                other
            )),
        }
    }
}

/// A financial transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Unique identifier
    pub id: TransactionId,

    /// Transaction date
    pub date: NaiveDate,

    /// Free-text description
    #[serde(default)]
    pub description: String,

    /// Category label, grouped by exact match
    pub category: String,

    /// Income or expense
    #[serde(rename = "type")]
    pub kind: TransactionKind,

    /// Non-negative amount
    pub amount: Money,
}

impl Transaction {
    /// Largest amount a single transaction may carry ($1,000,000,000.00).
    /// Keeps totals over tens of millions of transactions inside i64 cents.
    pub const MAX_AMOUNT: Money = Money::from_cents(100_000_000_000);

    /// Create a new transaction with a fresh ID
    pub fn new(
        date: NaiveDate,
        kind: TransactionKind,
        amount: Money,
        category: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: TransactionId::new(),
            date,
            description: description.into(),
            category: category.into(),
            kind,
            amount,
        }
    }

    /// Shorthand for an expense
    pub fn expense(date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        Self::new(date, TransactionKind::Expense, amount, category, "")
    }

    /// Shorthand for an income
    pub fn income(date: NaiveDate, category: impl Into<String>, amount: Money) -> Self {
        Self::new(date, TransactionKind::Income, amount, category, "")
    }

    /// Check if this is income
    pub fn is_income(&self) -> bool {
        self.kind == TransactionKind::Income
    }

    /// Check if this is an expense
    pub fn is_expense(&self) -> bool {
        self.kind == TransactionKind::Expense
    }

    /// Amount with the direction applied (expenses negative)
    pub fn signed_amount(&self) -> Money {
        match self.kind {
            TransactionKind::Income => self.amount,
            TransactionKind::Expense => -self.amount,
        }
    }

    /// Validate the transaction
    pub fn validate(&self) -> Result<(), TransactionValidationError> {
        if self.amount.is_negative() {
            return Err(TransactionValidationError::NegativeAmount(self.amount));
        }

        if self.amount > Self::MAX_AMOUNT {
            return Err(TransactionValidationError::AmountTooLarge(self.amount));
        }

        if self.category.trim().is_empty() {
            return Err(TransactionValidationError::EmptyCategory);
        }

        Ok(())
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.date.format("%Y-%m-%d"),
            self.kind,
            self.category,
            self.amount
        )
    }
}

/// Validation errors for transactions
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransactionValidationError {
    NegativeAmount(Money),
    AmountTooLarge(Money),
    EmptyCategory,
}

impl fmt::Display for TransactionValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeAmount(amount) => {
                write!(f, "Amount must not be negative (got {})", amount)
            }
            Self::AmountTooLarge(amount) => write!(
                f,
                "Amount {} exceeds the maximum of {}",
                amount,
                Transaction::MAX_AMOUNT
            ),
            Self::EmptyCategory => write!(f, "Category must not be empty"),
        }
    }
}

impl std::error::Error for TransactionValidationError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_transaction() {
        let txn = Transaction::new(
            date(2025, 1, 15),
            TransactionKind::Expense,
            Money::from_cents(5000),
            "Food",
            "Lunch",
        );
        assert_eq!(txn.category, "Food");
        assert_eq!(txn.description, "Lunch");
        assert!(txn.is_expense());
        assert!(!txn.is_income());
        assert_eq!(txn.signed_amount(), Money::from_cents(-5000));
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("income".parse::<TransactionKind>(), Ok(TransactionKind::Income));
        assert_eq!(" Expense ".parse::<TransactionKind>(), Ok(TransactionKind::Expense));
        assert!("transfer".parse::<TransactionKind>().is_err());
    }

    #[test]
    fn test_validation() {
        let mut txn = Transaction::income(date(2025, 1, 1), "Salary", Money::from_cents(100000));
        assert!(txn.validate().is_ok());

        txn.amount = Money::from_cents(-1);
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::NegativeAmount(_))
        ));

        txn.amount = Transaction::MAX_AMOUNT;
        assert!(txn.validate().is_ok());

        txn.amount = Transaction::MAX_AMOUNT + Money::from_cents(1);
        assert!(matches!(
            txn.validate(),
            Err(TransactionValidationError::AmountTooLarge(_))
        ));

        txn.amount = Money::from_cents(1);
        txn.category = "  ".to_string();
        assert_eq!(txn.validate(), Err(TransactionValidationError::EmptyCategory));
    }

    #[test]
    fn test_serialization_uses_type_field() {
        let txn = Transaction::expense(date(2024, 2, 5), "Food", Money::from_cents(6000));

        let json = serde_json::to_value(&txn).unwrap();
        assert_eq!(json["type"], "expense");
        assert_eq!(json["date"], "2024-02-05");
        assert_eq!(json["amount"], 6000);

        let deserialized: Transaction = serde_json::from_value(json).unwrap();
        assert_eq!(deserialized, txn);
    }

    #[test]
    fn test_display() {
        let txn = Transaction::expense(date(2025, 1, 15), "Food", Money::from_cents(5000));
        assert_eq!(format!("{}", txn), "2025-01-15 expense Food $50.00");
    }
}
