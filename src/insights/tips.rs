//! Rule-based advisory tips
//!
//! Rules are independent and evaluated in a fixed order; every rule that
//! fires contributes one tip. The fallback tip appears only when no other
//! rule fired, so the list is never empty.

use std::collections::BTreeMap;
use std::fmt;

use super::aggregate::{Aggregates, MonthlyAggregate};
use crate::models::Money;

/// A category above this share of total expenses (strictly) is flagged
pub const CONCENTRATION_THRESHOLD_PERCENT: i64 = 40;

/// Consecutive months of strictly rising expenses needed for the trend tip
pub const RISING_TREND_MONTHS: usize = 3;

/// A triggered advisory
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tip {
    /// Shown instead of any analysis when there is no data
    Onboarding,
    /// Total expenses exceed total income
    Overspend,
    /// One category dominates expenses
    CategoryConcentration { category: String },
    /// Expenses rose month over month for the last three months
    RisingExpenses,
    /// No rule fired
    AllGood,
}

impl fmt::Display for Tip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Onboarding => write!(f, "Add a few transactions to see insights!"),
            Self::Overspend => write!(
                f,
                "Your expenses exceed income. Aim to reduce variable costs or increase income sources."
            ),
            Self::CategoryConcentration { category } => write!(
                f,
                "'{}' is over {}% of your expenses. Consider setting a cap for this category.",
                category, CONCENTRATION_THRESHOLD_PERCENT
            ),
            Self::RisingExpenses => write!(
                f,
                "Expenses have risen {} months in a row—review subscriptions or renegotiate bills.",
                RISING_TREND_MONTHS
            ),
            Self::AllGood => write!(
                f,
                "Nice balance! Keep tracking to strengthen your trend insights."
            ),
        }
    }
}

/// Evaluate every rule against the aggregates, in order
pub fn generate(aggregates: &Aggregates) -> Vec<Tip> {
    let mut tips = Vec::new();

    if aggregates.total_expense > aggregates.total_income {
        tips.push(Tip::Overspend);
    }

    if let Some(category) = concentrated_category(&aggregates.expenses_by_category) {
        tips.push(Tip::CategoryConcentration {
            category: category.to_string(),
        });
    }

    if expenses_rising(&aggregates.monthly_series) {
        tips.push(Tip::RisingExpenses);
    }

    if tips.is_empty() {
        tips.push(Tip::AllGood);
    }

    tips
}

/// The category with the largest expense total
///
/// Ties go to the lexicographically smallest category name, which is the
/// first one met when walking the ordered map.
pub fn dominant_category(by_category: &BTreeMap<String, Money>) -> Option<(&str, Money)> {
    let mut top: Option<(&str, Money)> = None;
    for (category, &amount) in by_category {
        match top {
            Some((_, best)) if amount <= best => {}
            _ => top = Some((category.as_str(), amount)),
        }
    }
    top
}

/// The dominant category, if its share of total expenses is strictly over
/// the threshold. Compared on integer cents so 40.00% never fires.
fn concentrated_category(by_category: &BTreeMap<String, Money>) -> Option<&str> {
    let (category, top) = dominant_category(by_category)?;
    let total: Money = by_category.values().sum();

    if !total.is_positive() {
        return None;
    }

    let top_scaled = i128::from(top.cents()) * 100;
    let threshold = i128::from(total.cents()) * i128::from(CONCENTRATION_THRESHOLD_PERCENT);
    (top_scaled > threshold).then_some(category)
}

/// Strictly increasing expenses across the last `RISING_TREND_MONTHS` months
fn expenses_rising(series: &[MonthlyAggregate]) -> bool {
    if series.len() < RISING_TREND_MONTHS {
        return false;
    }

    series[series.len() - RISING_TREND_MONTHS..]
        .windows(2)
        .all(|pair| pair[0].expense < pair[1].expense)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::insights::month::MonthKey;

    fn categories(entries: &[(&str, i64)]) -> BTreeMap<String, Money> {
        entries
            .iter()
            .map(|(name, cents)| (name.to_string(), Money::from_cents(*cents)))
            .collect()
    }

    fn months(expenses: &[i64]) -> Vec<MonthlyAggregate> {
        expenses
            .iter()
            .enumerate()
            .map(|(i, &cents)| MonthlyAggregate {
                month: MonthKey::new(2024, i as u32 + 1).unwrap(),
                income: Money::zero(),
                expense: Money::from_cents(cents),
                net: Money::from_cents(-cents),
            })
            .collect()
    }

    fn balanced(by_category: BTreeMap<String, Money>, series: Vec<MonthlyAggregate>) -> Aggregates {
        let total_expense: Money = by_category.values().sum();
        Aggregates {
            total_income: total_expense + Money::from_cents(1),
            total_expense,
            expenses_by_category: by_category,
            monthly_series: series,
        }
    }

    #[test]
    fn test_overspend_fires_only_when_strictly_greater() {
        let mut agg = Aggregates {
            total_income: Money::from_cents(100),
            total_expense: Money::from_cents(100),
            ..Default::default()
        };
        assert_eq!(generate(&agg), vec![Tip::AllGood]);

        agg.total_expense = Money::from_cents(101);
        assert_eq!(generate(&agg), vec![Tip::Overspend]);
    }

    #[test]
    fn test_concentration_boundary_at_forty_percent() {
        let exactly = balanced(categories(&[("A", 4000), ("B", 3000), ("C", 3000)]), vec![]);
        assert_eq!(generate(&exactly), vec![Tip::AllGood]);

        let just_over = balanced(categories(&[("A", 4001), ("B", 3000), ("C", 2999)]), vec![]);
        assert_eq!(
            generate(&just_over),
            vec![Tip::CategoryConcentration {
                category: "A".to_string()
            }]
        );
    }

    #[test]
    fn test_concentration_ignores_all_zero_expenses() {
        let zeros = balanced(categories(&[("A", 0)]), vec![]);
        assert_eq!(generate(&zeros), vec![Tip::AllGood]);
    }

    #[test]
    fn test_dominant_category_tie_breaks_lexicographically() {
        let tied = categories(&[("Rent", 500), ("Bills", 500), ("Food", 100)]);
        assert_eq!(
            dominant_category(&tied),
            Some(("Bills", Money::from_cents(500)))
        );
        assert_eq!(dominant_category(&BTreeMap::new()), None);
    }

    #[test]
    fn test_rising_trend_requires_strict_increase() {
        let flat_start = balanced(BTreeMap::new(), months(&[10000, 10000, 15000]));
        assert_eq!(generate(&flat_start), vec![Tip::AllGood]);

        let rising = balanced(BTreeMap::new(), months(&[10000, 12000, 15000]));
        assert_eq!(generate(&rising), vec![Tip::RisingExpenses]);
    }

    #[test]
    fn test_rising_trend_looks_at_last_three_only() {
        let agg = balanced(BTreeMap::new(), months(&[90000, 100, 200, 300]));
        assert_eq!(generate(&agg), vec![Tip::RisingExpenses]);

        let short = balanced(BTreeMap::new(), months(&[100, 200]));
        assert_eq!(generate(&short), vec![Tip::AllGood]);
    }

    #[test]
    fn test_rules_fire_together_in_order() {
        let agg = Aggregates {
            total_income: Money::zero(),
            total_expense: Money::from_cents(600),
            expenses_by_category: categories(&[("Rent", 500), ("Food", 100)]),
            monthly_series: months(&[100, 200, 300]),
        };
        assert_eq!(
            generate(&agg),
            vec![
                Tip::Overspend,
                Tip::CategoryConcentration {
                    category: "Rent".to_string()
                },
                Tip::RisingExpenses,
            ]
        );
    }

    #[test]
    fn test_messages() {
        assert_eq!(
            Tip::CategoryConcentration {
                category: "Rent".to_string()
            }
            .to_string(),
            "'Rent' is over 40% of your expenses. Consider setting a cap for this category."
        );
        assert_eq!(
            Tip::RisingExpenses.to_string(),
            "Expenses have risen 3 months in a row—review subscriptions or renegotiate bills."
        );
        assert_eq!(Tip::Onboarding.to_string(), "Add a few transactions to see insights!");
    }
}
