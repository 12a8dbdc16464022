use log::debug;
use rust_decimal::{Decimal, RoundingStrategy};
use rust_decimal_macros::dec;

use crate::errors::{CalculationError, Result, ValidationError};
use crate::projection::projection_model::{
    Projection, ProjectionConfig, ProjectionDay, ProjectionSettings, ProjectionSummary,
    PORTFOLIO_VALUE_SCALE,
};
use crate::projection::projection_traits::ProjectionServiceTrait;

/// Compounds `config.initial_amount` through its rate schedule, rounding the
/// portfolio value to 8 fractional digits after each day.
pub fn project(config: &ProjectionConfig) -> Result<Projection> {
    project_with_scale(config, PORTFOLIO_VALUE_SCALE)
}

/// Same as [`project`] with an explicit rounding scale for the daily value.
///
/// The rounding is applied to every day's value, not only the final one, and
/// the daily profit is taken from the rounded value. Both affect the output
/// digits, so callers reproducing stored results must use the same scale.
pub fn project_with_scale(config: &ProjectionConfig, value_scale: u32) -> Result<Projection> {
    let initial = config.initial_amount;
    if initial <= Decimal::ZERO {
        return Err(ValidationError::NonPositiveInitialAmount.into());
    }

    let schedule = config.rate_schedule();
    let mut days = Vec::with_capacity(schedule.len() + 1);
    days.push(ProjectionDay {
        day: 0,
        value: initial,
        profit: Decimal::ZERO,
        growth_percent: Decimal::ZERO,
        rate: Decimal::ZERO,
    });

    let ceiling = value_ceiling(value_scale);
    let mut current = initial;
    for (index, rate) in schedule.iter().enumerate() {
        let day = index as u32 + 1;
        let overflow = || CalculationError::Overflow { day };

        let multiplier = (rate / dec!(100))
            .checked_add(Decimal::ONE)
            .ok_or_else(overflow)?;
        let next = current
            .checked_mul(multiplier)
            .ok_or_else(overflow)?
            .round_dp_with_strategy(value_scale, RoundingStrategy::MidpointNearestEven);
        if next.abs() >= ceiling {
            return Err(overflow().into());
        }

        days.push(ProjectionDay {
            day,
            value: next,
            profit: next.checked_sub(current).ok_or_else(overflow)?,
            growth_percent: growth_percent(next, initial).ok_or_else(overflow)?,
            rate: *rate,
        });
        current = next;
    }

    let total_days = schedule.len() as u32;
    let overflow = || CalculationError::Overflow { day: total_days };
    let summary = ProjectionSummary {
        initial,
        final_amount: current,
        total_profit: current.checked_sub(initial).ok_or_else(overflow)?,
        total_growth_percent: growth_percent(current, initial).ok_or_else(overflow)?,
        total_days,
    };

    debug!(
        "Projected {} days from {} to {} ({}%)",
        total_days, initial, summary.final_amount, summary.total_growth_percent
    );

    Ok(Projection { days, summary })
}

/// Smallest magnitude that no longer fits 28 significant digits once it carries
/// `value_scale` fractional digits (1e20 at the default scale).
fn value_ceiling(value_scale: u32) -> Decimal {
    Decimal::from_i128_with_scale(10i128.pow(28 - value_scale.min(28)), 0)
}

/// `(value / initial - 1) * 100`, or `None` when the quotient leaves the decimal range.
fn growth_percent(value: Decimal, initial: Decimal) -> Option<Decimal> {
    value
        .checked_div(initial)?
        .checked_sub(Decimal::ONE)?
        .checked_mul(dec!(100))
}

pub struct ProjectionService {
    settings: ProjectionSettings,
}

impl ProjectionService {
    pub fn new(settings: ProjectionSettings) -> Self {
        ProjectionService { settings }
    }
}

impl Default for ProjectionService {
    fn default() -> Self {
        Self::new(ProjectionSettings::default())
    }
}

impl ProjectionServiceTrait for ProjectionService {
    fn settings(&self) -> &ProjectionSettings {
        &self.settings
    }

    fn calculate(&self, config: &ProjectionConfig) -> Result<Projection> {
        config.validate(self.settings.max_total_days)?;
        project_with_scale(config, self.settings.value_scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::Error;

    fn values(projection: &Projection) -> Vec<Decimal> {
        projection.days.iter().map(|d| d.value).collect()
    }

    #[test]
    fn test_two_days_at_one_percent() {
        let config = ProjectionConfig::new(dec!(1000), dec!(1), 2);
        let projection = project(&config).unwrap();

        assert_eq!(
            values(&projection),
            vec![dec!(1000), dec!(1010.00000000), dec!(1020.10000000)]
        );
        assert_eq!(projection.summary.total_growth_percent, dec!(2.01));
        assert_eq!(projection.summary.total_profit, dec!(20.1));
        assert_eq!(projection.summary.total_days, 2);
    }

    #[test]
    fn test_value_is_rounded_every_day() {
        // Unrounded, 0.333% a day grows the fractional digits every day
        let config = ProjectionConfig::new(dec!(1), dec!(0.333), 3);
        let projection = project(&config).unwrap();

        for day in &projection.days[1..] {
            assert!(day.value.scale() <= 8, "day {} has scale {}", day.day, day.value.scale());
        }
        // 1.00333 -> 1.0066710889 -> 1.00667109 -> 1.0100233047297 -> 1.01002330
        assert_eq!(projection.days[1].value, dec!(1.00333));
        assert_eq!(projection.days[2].value, dec!(1.00667109));
        assert_eq!(projection.days[3].value, dec!(1.01002330));
    }

    #[test]
    fn test_rounding_is_half_even() {
        // 1 * 1.000000005 lands exactly halfway between two 8-digit values
        let config = ProjectionConfig::new(dec!(1), dec!(0.0000005), 1);
        let projection = project(&config).unwrap();
        assert_eq!(projection.days[1].value, dec!(1.00000000));

        let config = ProjectionConfig::new(dec!(1), dec!(0.0000015), 1);
        let projection = project(&config).unwrap();
        assert_eq!(projection.days[1].value, dec!(1.00000002));
    }

    #[test]
    fn test_daily_profit_uses_rounded_value() {
        let config = ProjectionConfig::new(dec!(3), dec!(0.0000001), 1);
        let projection = project(&config).unwrap();
        // 3 * 1.000000001 = 3.000000003 -> 3.00000000
        assert_eq!(projection.days[1].value, dec!(3.00000000));
        assert_eq!(projection.days[1].profit, Decimal::ZERO);
    }

    #[test]
    fn test_overflow_is_reported_with_day() {
        let config = ProjectionConfig::new(dec!(1000000000000000000000), dec!(100000), 3);
        match project(&config) {
            Err(Error::Calculation(CalculationError::Overflow { day })) => assert_eq!(day, 1),
            other => panic!("expected overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_value_that_cannot_keep_eight_digits_is_an_overflow() {
        // 1e19 doubling: 2e19, 4e19, 8e19, then 1.6e20 needs 29 digits at scale 8
        let config = ProjectionConfig::new(dec!(10000000000000000000), dec!(100), 5);
        match project(&config) {
            Err(Error::Calculation(CalculationError::Overflow { day })) => assert_eq!(day, 4),
            other => panic!("expected overflow, got {:?}", other),
        }
    }

    #[test]
    fn test_largest_value_with_eight_digits_is_accepted() {
        let config = ProjectionConfig::new(dec!(99999999999999999999.12345678), dec!(0), 2);
        let projection = project(&config).unwrap();
        assert_eq!(projection.summary.final_amount, dec!(99999999999999999999.12345678));
        assert_eq!(projection.days[2].value.scale(), 8);
    }

    #[test]
    fn test_service_validates_before_projecting() {
        let service = ProjectionService::default();

        let err = service
            .calculate(&ProjectionConfig::new(dec!(0), dec!(1), 1))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::NonPositiveInitialAmount)
        ));

        let service = ProjectionService::new(ProjectionSettings {
            max_total_days: 5,
            ..ProjectionSettings::default()
        });
        let err = service
            .calculate(&ProjectionConfig::new(dec!(10), dec!(1), 3).with_period(dec!(2), 3))
            .unwrap_err();
        assert!(matches!(
            err,
            Error::Validation(ValidationError::TooManyDays { total: 6, max: 5 })
        ));
    }

    #[test]
    fn test_service_honours_value_scale() {
        let service = ProjectionService::new(ProjectionSettings {
            value_scale: 2,
            ..ProjectionSettings::default()
        });
        let projection = service
            .calculate(&ProjectionConfig::new(dec!(1), dec!(0.333), 1))
            .unwrap();
        assert_eq!(projection.days[1].value, dec!(1.00));
    }
}
