//! Conversion of a loosely typed JSON request into a [`ProjectionConfig`].
//!
//! Numeric fields may arrive as JSON numbers or as strings. Missing fields take
//! the value zero (or an empty period list) so that an absent amount or day
//! count is reported by validation rather than by the parser.

use std::str::FromStr;

use log::warn;
use rust_decimal::Decimal;
use serde_json::{Map, Value};

use crate::errors::{InputParseError, Result};
use crate::projection::projection_model::{AdditionalPeriod, ProjectionConfig};

impl ProjectionConfig {
    /// Parses a raw request body. The content type is not inspected.
    pub fn from_slice(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body).map_err(InputParseError::from)?;
        Self::from_json(&value)
    }

    pub fn from_json(value: &Value) -> Result<Self> {
        let body = value.as_object().ok_or(InputParseError::NotAnObject)?;

        let initial_amount = parse_decimal("initialAmount", body.get("initialAmount"))?;
        let default_profit_percentage =
            parse_decimal("defaultProfitPercentage", body.get("defaultProfitPercentage"))?;
        let default_days = day_count(parse_integer("defaultDays", body.get("defaultDays"))?);

        let additional_periods = match body.get("additionalPeriods") {
            None => Vec::new(),
            Some(Value::Array(entries)) => entries
                .iter()
                .enumerate()
                .map(|(index, entry)| parse_period(index, entry))
                .collect::<std::result::Result<Vec<_>, _>>()?,
            Some(other) => {
                return Err(InputParseError::InvalidPeriods(format!(
                    "expected a list of periods, got {}",
                    other
                ))
                .into())
            }
        };

        Ok(ProjectionConfig {
            initial_amount,
            default_profit_percentage,
            default_days,
            additional_periods,
        })
    }
}

fn parse_period(index: usize, entry: &Value) -> std::result::Result<AdditionalPeriod, InputParseError> {
    let period: &Map<String, Value> = entry.as_object().ok_or_else(|| {
        InputParseError::InvalidPeriods(format!("entry {} is not an object: {}", index, entry))
    })?;

    let profit = parse_decimal(&format!("additionalPeriods[{}].profit", index), period.get("profit"))?;
    let days = parse_integer(&format!("additionalPeriods[{}].days", index), period.get("days"))?;
    if days < 0 {
        warn!(
            "Additional period {} has negative length {}; it contributes no days",
            index, days
        );
    }

    Ok(AdditionalPeriod {
        profit,
        days: day_count(days),
    })
}

fn parse_decimal(field: &str, value: Option<&Value>) -> std::result::Result<Decimal, InputParseError> {
    let invalid = |raw: &dyn std::fmt::Display| InputParseError::InvalidDecimal {
        field: field.to_string(),
        value: raw.to_string(),
    };

    let text = match value {
        None => return Ok(Decimal::ZERO),
        Some(Value::Number(n)) => n.to_string(),
        Some(Value::String(s)) => s.trim().to_string(),
        Some(other) => return Err(invalid(other)),
    };

    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .map_err(|_| invalid(&format!("{:?}", text)))
}

fn parse_integer(field: &str, value: Option<&Value>) -> std::result::Result<i64, InputParseError> {
    let invalid = |raw: &dyn std::fmt::Display| InputParseError::InvalidInteger {
        field: field.to_string(),
        value: raw.to_string(),
    };

    match value {
        None => Ok(0),
        Some(Value::Number(n)) => {
            if let Some(i) = n.as_i64() {
                Ok(i)
            } else if let Some(u) = n.as_u64() {
                Ok(i64::try_from(u).unwrap_or(i64::MAX))
            } else {
                match n.as_f64() {
                    Some(f) if f.is_finite() && f.fract() == 0.0 => Ok(f as i64),
                    _ => Err(invalid(n)),
                }
            }
        }
        Some(Value::String(s)) => s
            .trim()
            .parse::<i64>()
            .map_err(|_| invalid(&format!("{:?}", s))),
        Some(other) => Err(invalid(other)),
    }
}

/// Negative counts become zero and counts past `u32::MAX` saturate, leaving
/// the range decision to validation.
fn day_count(days: i64) -> u32 {
    u32::try_from(days.max(0)).unwrap_or(u32::MAX)
}
