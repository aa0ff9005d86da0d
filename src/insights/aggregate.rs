//! Aggregation of transactions into totals, a category breakdown and a
//! monthly series.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::month::MonthKey;
use crate::models::money::decimal;
use crate::models::{Money, Transaction, TransactionKind};

/// Income, expense and net for one calendar month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// Month bucket
    pub month: MonthKey,
    /// Sum of income in the month
    #[serde(with = "decimal")]
    pub income: Money,
    /// Sum of expenses in the month
    #[serde(with = "decimal")]
    pub expense: Money,
    /// `income - expense`
    #[serde(with = "decimal")]
    pub net: Money,
}

impl MonthlyAggregate {
    fn new(month: MonthKey, income: Money, expense: Money) -> Self {
        Self {
            month,
            income,
            expense,
            net: income - expense,
        }
    }
}

/// Everything derived from a single pass over the transactions
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Aggregates {
    /// Sum of all income amounts
    pub total_income: Money,
    /// Sum of all expense amounts
    pub total_expense: Money,
    /// Expense totals keyed by category (expenses only, no zero-filling)
    pub expenses_by_category: BTreeMap<String, Money>,
    /// One entry per month present in the input, ascending
    pub monthly_series: Vec<MonthlyAggregate>,
}

impl Aggregates {
    /// `total_income - total_expense`
    pub fn net(&self) -> Money {
        self.total_income - self.total_expense
    }
}

/// Reduce the transactions into totals, category and monthly figures
///
/// Accumulators are built fresh for every call. The monthly series comes out
/// of an ordered map, so it is already ascending by month; the forecast and
/// the trend rule depend on the last entries being the most recent months.
pub fn aggregate(transactions: &[Transaction]) -> Aggregates {
    let mut total_income = Money::zero();
    let mut total_expense = Money::zero();
    let mut by_category: BTreeMap<String, Money> = BTreeMap::new();
    let mut by_month: BTreeMap<MonthKey, (Money, Money)> = BTreeMap::new();

    for txn in transactions {
        let bucket = by_month
            .entry(MonthKey::from_date(txn.date))
            .or_insert((Money::zero(), Money::zero()));

        match txn.kind {
            TransactionKind::Income => {
                total_income += txn.amount;
                bucket.0 += txn.amount;
            }
            TransactionKind::Expense => {
                total_expense += txn.amount;
                bucket.1 += txn.amount;
                *by_category
                    .entry(txn.category.clone())
                    .or_insert(Money::zero()) += txn.amount;
            }
        }
    }

    let monthly_series = by_month
        .into_iter()
        .map(|(month, (income, expense))| MonthlyAggregate::new(month, income, expense))
        .collect();

    Aggregates {
        total_income,
        total_expense,
        expenses_by_category: by_category,
        monthly_series,
    }
}
