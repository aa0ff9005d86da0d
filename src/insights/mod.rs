//! Insight engine
//!
//! A pure transformation from the full list of transactions into an
//! [`InsightReport`]: totals, a per-category expense breakdown, a monthly
//! series, a naive next-month forecast and a set of advisory tips.
//!
//! The engine holds no state and never reads the clock; the same input
//! always produces the same report. Input is assumed to be validated
//! already (see [`crate::services`]).
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use tally_cli::insights;
//! use tally_cli::models::{Money, Transaction};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 1, 10).unwrap();
//! let report = insights::compute(&[
//!     Transaction::income(date, "Salary", Money::from_cents(100_000)),
//!     Transaction::expense(date, "Food", Money::from_cents(5_000)),
//! ]);
//! assert_eq!(report.net, Money::from_cents(95_000));
//! ```

pub mod aggregate;
pub mod forecast;
pub mod month;
pub mod report;
pub mod tips;

pub use aggregate::{aggregate, Aggregates, MonthlyAggregate};
pub use forecast::{forecast, Forecast, FORECAST_WINDOW};
pub use month::MonthKey;
pub use report::InsightReport;
pub use tips::Tip;

use crate::models::Transaction;

/// Compute the full insight report for a set of transactions
pub fn compute(transactions: &[Transaction]) -> InsightReport {
    if transactions.is_empty() {
        return InsightReport::empty();
    }

    let aggregates = aggregate(transactions);
    let forecast = forecast(&aggregates.monthly_series);
    let tips = tips::generate(&aggregates)
        .iter()
        .map(Tip::to_string)
        .collect();

    InsightReport {
        total_income: aggregates.total_income,
        total_expense: aggregates.total_expense,
        net: aggregates.net(),
        expenses_by_category: aggregates.expenses_by_category,
        monthly_series: aggregates.monthly_series,
        forecast_next_month_net: forecast.next_month_net,
        avg_burn_rate: forecast.avg_burn_rate,
        tips,
    }
}
