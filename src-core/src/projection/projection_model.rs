use rust_decimal::Decimal;

use crate::errors::{Result, ValidationError};

/// Fractional digits the portfolio value is rounded to after every compounding day.
pub const PORTFOLIO_VALUE_SCALE: u32 = 8;

/// Upper bound on the schedule length accepted by the default settings (100 years).
pub const DEFAULT_MAX_TOTAL_DAYS: u32 = 36_500;

/// A run of days sharing one daily profit rate, applied after the default period.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdditionalPeriod {
    /// Daily profit rate in percent. Negative values are loss days.
    pub profit: Decimal,
    pub days: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionConfig {
    pub initial_amount: Decimal,
    pub default_profit_percentage: Decimal,
    pub default_days: u32,
    pub additional_periods: Vec<AdditionalPeriod>,
}

impl ProjectionConfig {
    pub fn new(initial_amount: Decimal, default_profit_percentage: Decimal, default_days: u32) -> Self {
        ProjectionConfig {
            initial_amount,
            default_profit_percentage,
            default_days,
            additional_periods: Vec::new(),
        }
    }

    pub fn with_period(mut self, profit: Decimal, days: u32) -> Self {
        self.additional_periods.push(AdditionalPeriod { profit, days });
        self
    }

    /// Number of compounding days across the default and all additional periods.
    pub fn total_days(&self) -> u64 {
        self.additional_periods
            .iter()
            .fold(u64::from(self.default_days), |acc, p| acc + u64::from(p.days))
    }

    /// One rate per day: the default rate for `default_days`, then each
    /// additional period's rate for its `days`, in listed order.
    pub fn rate_schedule(&self) -> Vec<Decimal> {
        let mut schedule = Vec::with_capacity(self.total_days() as usize);
        schedule.extend(std::iter::repeat(self.default_profit_percentage).take(self.default_days as usize));
        for period in &self.additional_periods {
            schedule.extend(std::iter::repeat(period.profit).take(period.days as usize));
        }
        schedule
    }

    pub fn validate(&self, max_total_days: u32) -> Result<()> {
        if self.initial_amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveInitialAmount.into());
        }
        if self.default_days == 0 {
            return Err(ValidationError::NonPositiveDefaultDays.into());
        }
        let total = self.total_days();
        if total > u64::from(max_total_days) {
            return Err(ValidationError::TooManyDays {
                total,
                max: max_total_days,
            }
            .into());
        }
        Ok(())
    }
}

/// Knobs the projection service runs with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionSettings {
    pub value_scale: u32,
    pub max_total_days: u32,
}

impl Default for ProjectionSettings {
    fn default() -> Self {
        ProjectionSettings {
            value_scale: PORTFOLIO_VALUE_SCALE,
            max_total_days: DEFAULT_MAX_TOTAL_DAYS,
        }
    }
}

/// State of the portfolio at the end of one day. Day 0 is the untouched initial amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionDay {
    pub day: u32,
    pub value: Decimal,
    /// Absolute change against the previous day's value
    pub profit: Decimal,
    /// Cumulative growth against the initial amount, in percent
    pub growth_percent: Decimal,
    /// Rate applied on this day, in percent
    pub rate: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionSummary {
    pub initial: Decimal,
    pub final_amount: Decimal,
    pub total_profit: Decimal,
    pub total_growth_percent: Decimal,
    pub total_days: u32,
}

/// Exact decimal output of a projection, one entry per day including day 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Projection {
    pub days: Vec<ProjectionDay>,
    pub summary: ProjectionSummary,
}
