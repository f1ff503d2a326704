//! Zero-value guard and the base premium calculator.
//!
//! Every rate and premium formula applies only to items with a non-zero
//! value. The helpers here make that check once so the formula modules never
//! repeat it.

use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::Guarded;

/// Whether a rate is returned as a fraction or multiplied by 100.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RateUnit {
    /// The raw fraction, e.g. `0.006`.
    #[default]
    Fraction,
    /// The fraction times 100, e.g. `0.6`.
    Percentage,
}

impl RateUnit {
    /// Expresses a fractional rate in this unit.
    pub fn express(self, rate: Decimal) -> EngineResult<Decimal> {
        match self {
            RateUnit::Fraction => Ok(rate),
            RateUnit::Percentage => checked(rate.checked_mul(Decimal::ONE_HUNDRED), "percentage rate"),
        }
    }
}

/// Evaluates `formula` only for a non-zero `value`.
///
/// # Examples
///
/// ```
/// use uav_rating_engine::calculation::guard;
/// use uav_rating_engine::models::Guarded;
/// use rust_decimal::Decimal;
///
/// assert_eq!(guard(Decimal::TEN, || 42), Guarded::Value(42));
/// assert_eq!(guard(Decimal::ZERO, || 42), Guarded::NotApplicable);
/// ```
pub fn guard<T>(value: Decimal, formula: impl FnOnce() -> T) -> Guarded<T> {
    if value.is_zero() {
        Guarded::NotApplicable
    } else {
        Guarded::Value(formula())
    }
}

/// Evaluates a fallible `formula` only for a non-zero `value`.
///
/// A zero value never reaches the formula, so lookups inside it cannot fail
/// for excluded items.
pub fn try_guard<T>(
    value: Decimal,
    formula: impl FnOnce() -> EngineResult<T>,
) -> EngineResult<Guarded<T>> {
    if value.is_zero() {
        Ok(Guarded::NotApplicable)
    } else {
        formula().map(Guarded::Value)
    }
}

/// Turns the result of a `checked_*` decimal operation into an engine result.
///
/// Amounts in a fleet document are unbounded, so every product, sum and
/// quotient over them goes through here instead of the panicking operators.
pub fn checked(result: Option<Decimal>, operation: &str) -> EngineResult<Decimal> {
    result.ok_or_else(|| EngineError::CalculationError {
        message: format!("{} overflowed the decimal range", operation),
    })
}

/// Prices `value` at a rate given in percent.
///
/// `premium = value * rate_as_percentage / 100`, NotApplicable for a zero value.
pub fn calculate_premium(
    rate_as_percentage: Decimal,
    value: Decimal,
) -> EngineResult<Guarded<Decimal>> {
    try_guard(value, || {
        let amount = checked(value.checked_mul(rate_as_percentage), "premium")?;
        checked(amount.checked_div(Decimal::ONE_HUNDRED), "premium")
    })
}
