//! Insight report
//!
//! The single output of the insight engine, plus terminal and CSV renderings
//! of it.

use std::collections::BTreeMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use super::aggregate::MonthlyAggregate;
use super::tips::Tip;
use crate::display::report::{double_separator, format_bar, format_percentage, separator};
use crate::error::{TallyError, TallyResult};
use crate::models::money::{decimal, decimal_map};
use crate::models::Money;

const REPORT_WIDTH: usize = 72;
const BAR_WIDTH: usize = 20;

/// Aggregated statistics, forecast and tips for a set of transactions
///
/// Serialized amounts are decimal currency units, not cents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightReport {
    /// Sum of all income
    #[serde(with = "decimal")]
    pub total_income: Money,
    /// Sum of all expenses
    #[serde(with = "decimal")]
    pub total_expense: Money,
    /// `total_income - total_expense`
    #[serde(with = "decimal")]
    pub net: Money,
    /// Expense totals per category
    #[serde(with = "decimal_map")]
    pub expenses_by_category: BTreeMap<String, Money>,
    /// Per-month figures, ascending by month
    pub monthly_series: Vec<MonthlyAggregate>,
    /// Mean net of the most recent months
    #[serde(with = "decimal")]
    pub forecast_next_month_net: Money,
    /// Mean expense of the most recent months
    #[serde(with = "decimal")]
    pub avg_burn_rate: Money,
    /// Advisory tips in rule order, never empty
    pub tips: Vec<String>,
}

impl InsightReport {
    /// The fixed report for an empty transaction list
    pub fn empty() -> Self {
        Self {
            total_income: Money::zero(),
            total_expense: Money::zero(),
            net: Money::zero(),
            expenses_by_category: BTreeMap::new(),
            monthly_series: Vec::new(),
            forecast_next_month_net: Money::zero(),
            avg_burn_rate: Money::zero(),
            tips: vec![Tip::Onboarding.to_string()],
        }
    }

    /// Whether the report was built from no data
    pub fn is_empty(&self) -> bool {
        self.monthly_series.is_empty()
    }

    /// Share of categorized expenses spent in a category, as a percentage
    ///
    /// Measured against the sum of the category map, the same base the
    /// concentration tip uses.
    pub fn category_share(&self, category: &str) -> f64 {
        let total = self.expenses_by_category.values().sum::<Money>().cents();
        match self.expenses_by_category.get(category) {
            Some(amount) if total > 0 => amount.cents() as f64 / total as f64 * 100.0,
            _ => 0.0,
        }
    }

    /// Categories ordered by spending, largest first
    pub fn top_categories(&self, limit: usize) -> Vec<(&str, Money)> {
        let mut all: Vec<(&str, Money)> = self
            .expenses_by_category
            .iter()
            .map(|(name, amount)| (name.as_str(), *amount))
            .collect();
        // Stable sort keeps ties in name order
        all.sort_by(|a, b| b.1.cmp(&a.1));
        all.into_iter().take(limit).collect()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, currency: &str) -> String {
        let mut output = String::new();
        let fmt_money = |m: Money| m.format_with_symbol(currency);

        output.push_str("Insights\n");
        output.push_str(&double_separator(REPORT_WIDTH));
        output.push('\n');
        output.push_str(&format!("Total Income:   {:>14}\n", fmt_money(self.total_income)));
        output.push_str(&format!("Total Expenses: {:>14}\n", fmt_money(self.total_expense)));
        output.push_str(&format!("Net:            {:>14}\n", fmt_money(self.net)));

        if !self.expenses_by_category.is_empty() {
            output.push_str("\nExpenses by Category\n");
            output.push_str(&separator(REPORT_WIDTH));
            output.push('\n');

            let max = self
                .expenses_by_category
                .values()
                .max()
                .map(|m| m.cents() as f64)
                .unwrap_or(0.0);

            for (category, amount) in self.top_categories(usize::MAX) {
                output.push_str(&format!(
                    "{:<20} {:>12} {:>6}  {}\n",
                    category,
                    fmt_money(amount),
                    format_percentage(self.category_share(category)),
                    format_bar(amount.cents() as f64, max, BAR_WIDTH)
                ));
            }
        }

        if !self.monthly_series.is_empty() {
            output.push_str("\nMonthly\n");
            output.push_str(&separator(REPORT_WIDTH));
            output.push('\n');
            output.push_str(&format!(
                "{:<8} {:>14} {:>14} {:>14}\n",
                "Month", "Income", "Expense", "Net"
            ));

            for month in &self.monthly_series {
                output.push_str(&format!(
                    "{:<8} {:>14} {:>14} {:>14}\n",
                    month.month,
                    fmt_money(month.income),
                    fmt_money(month.expense),
                    fmt_money(month.net)
                ));
            }

            output.push('\n');
            output.push_str(&format!(
                "Forecast next month net: {}\n",
                fmt_money(self.forecast_next_month_net)
            ));
            output.push_str(&format!(
                "Average burn rate:       {}\n",
                fmt_money(self.avg_burn_rate)
            ));
        }

        output.push_str("\nTips\n");
        output.push_str(&separator(REPORT_WIDTH));
        output.push('\n');
        for tip in &self.tips {
            output.push_str(&format!("  * {}\n", tip));
        }

        output
    }

    /// Export the monthly series to CSV format, with a total row
    pub fn export_csv<W: Write>(&self, writer: W) -> TallyResult<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        let export_err = |e: csv::Error| TallyError::Export(e.to_string());

        csv_writer
            .write_record(["month", "income", "expense", "net"])
            .map_err(export_err)?;

        for month in &self.monthly_series {
            csv_writer
                .write_record([
                    month.month.to_string(),
                    month.income.to_decimal_string(),
                    month.expense.to_decimal_string(),
                    month.net.to_decimal_string(),
                ])
                .map_err(export_err)?;
        }

        csv_writer
            .write_record([
                "TOTAL".to_string(),
                self.total_income.to_decimal_string(),
                self.total_expense.to_decimal_string(),
                self.net.to_decimal_string(),
            ])
            .map_err(export_err)?;

        csv_writer
            .flush()
            .map_err(|e| TallyError::Export(e.to_string()))?;
        Ok(())
    }
}
