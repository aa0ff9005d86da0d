//! Next-month forecast and burn rate
//!
//! Both figures are plain means over a short trailing window of the monthly
//! series. This is a heuristic, not a statistical model: no weighting, no
//! seasonality, no confidence interval.

use serde::{Deserialize, Serialize};

use super::aggregate::MonthlyAggregate;
use crate::models::Money;

/// Number of most recent months the forecast averages over
pub const FORECAST_WINDOW: usize = 3;

/// Trend-following estimate derived from recent months
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Forecast {
    /// Mean net over the window
    pub next_month_net: Money,
    /// Mean expense over the window
    pub avg_burn_rate: Money,
}

/// The final up-to-`FORECAST_WINDOW` entries of an ascending series
pub fn trailing_window(series: &[MonthlyAggregate]) -> &[MonthlyAggregate] {
    &series[series.len().saturating_sub(FORECAST_WINDOW)..]
}

/// Compute the forecast from an ascending monthly series
///
/// An empty series yields zeros.
pub fn forecast(series: &[MonthlyAggregate]) -> Forecast {
    let window = trailing_window(series);

    let nets: Vec<Money> = window.iter().map(|m| m.net).collect();
    let expenses: Vec<Money> = window.iter().map(|m| m.expense).collect();

    Forecast {
        next_month_net: Money::mean(&nets).unwrap_or_default(),
        avg_burn_rate: Money::mean(&expenses).unwrap_or_default(),
    }
}
