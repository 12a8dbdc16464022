use rust_decimal::Decimal;
use serde::Serialize;

use crate::projection::projection_model::{Projection, ProjectionSummary};

/// Column-oriented projection as sent to the chart/table UI.
///
/// Every series has one entry per day including day 0, so index `i` of each
/// vector describes the same day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectionResult {
    pub labels: Vec<u32>,
    pub portfolio_values: Vec<f64>,
    pub daily_profits: Vec<f64>,
    pub growth_percentages: Vec<f64>,
    pub profit_rates: Vec<f64>,
    pub summary: SummaryResult,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryResult {
    pub initial: f64,
    #[serde(rename = "final")]
    pub final_amount: f64,
    pub total_profit: f64,
    pub total_growth_percent: f64,
    pub total_days: u32,
}

impl From<&ProjectionSummary> for SummaryResult {
    fn from(summary: &ProjectionSummary) -> Self {
        SummaryResult {
            initial: to_f64(summary.initial),
            final_amount: to_f64(summary.final_amount),
            total_profit: to_f64(summary.total_profit),
            total_growth_percent: to_f64(summary.total_growth_percent),
            total_days: summary.total_days,
        }
    }
}

impl From<&Projection> for ProjectionResult {
    fn from(projection: &Projection) -> Self {
        let len = projection.days.len();
        let mut result = ProjectionResult {
            labels: Vec::with_capacity(len),
            portfolio_values: Vec::with_capacity(len),
            daily_profits: Vec::with_capacity(len),
            growth_percentages: Vec::with_capacity(len),
            profit_rates: Vec::with_capacity(len),
            summary: SummaryResult::from(&projection.summary),
        };
        for day in &projection.days {
            result.labels.push(day.day);
            result.portfolio_values.push(to_f64(day.value));
            result.daily_profits.push(to_f64(day.profit));
            result.growth_percentages.push(to_f64(day.growth_percent));
            result.profit_rates.push(to_f64(day.rate));
        }
        result
    }
}

impl From<Projection> for ProjectionResult {
    fn from(projection: Projection) -> Self {
        ProjectionResult::from(&projection)
    }
}

/// Nearest `f64` to the decimal, parsed from its exact text form.
fn to_f64(value: Decimal) -> f64 {
    value.to_string().parse().unwrap_or(f64::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_to_f64_is_nearest_double() {
        assert_eq!(to_f64(dec!(1020.10000000)), 1020.1);
        assert_eq!(to_f64(dec!(2.0100000000000000000000000)), 2.01);
        assert_eq!(to_f64(dec!(-10.00000000)), -10.0);
        assert_eq!(to_f64(Decimal::ZERO), 0.0);
    }

    #[test]
    fn test_summary_serializes_final_keyword() {
        let summary = SummaryResult {
            initial: 1000.0,
            final_amount: 1010.0,
            total_profit: 10.0,
            total_growth_percent: 1.0,
            total_days: 1,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["final"], 1010.0);
        assert!(json.get("final_amount").is_none());
    }
}
