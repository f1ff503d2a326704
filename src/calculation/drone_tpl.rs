//! Drone third-party-liability rating.
//!
//! Liability is priced at the base limit and translated to the requested
//! excess-of-loss layer with the Riebesell increased-limit curve:
//!
//! ```text
//! curve(x) = (x / base_limit) ^ log2(1 + z)
//! ilf      = curve(limit + excess) - curve(excess)
//! ```

use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::config::{IlfCurve, RateParameters};
use crate::error::{EngineError, EngineResult};
use crate::models::Guarded;

use super::zero_guard::{RateUnit, checked, try_guard};

/// Decimal places kept on the published increased limit factor.
pub const TPL_ILF_DECIMALS: u32 = 2;

/// Decimal places kept on the published layer premium.
pub const TPL_LAYER_PREMIUM_DECIMALS: u32 = 0;

/// Returns the configured liability base rate for a drone.
pub fn tpl_base_rate(
    params: &RateParameters,
    value: Decimal,
    unit: RateUnit,
) -> EngineResult<Guarded<Decimal>> {
    try_guard(value, || unit.express(params.liability_rate()))
}

/// Returns the liability premium at the base limit: `liability_rate * value`.
pub fn tpl_base_layer_premium(
    params: &RateParameters,
    value: Decimal,
) -> EngineResult<Guarded<Decimal>> {
    tpl_base_rate(params, value, RateUnit::Fraction)?
        .try_map(|rate| checked(rate.checked_mul(value), "base layer premium"))
}

/// Evaluates the Riebesell curve at `x`.
///
/// The exponent is fractional, so the curve is computed in `f64`. A result
/// that cannot be represented as a decimal is a calculation error.
pub fn riebesell_curve(curve: &IlfCurve, x: Decimal) -> EngineResult<Decimal> {
    let to_f64 = |name: &str, d: Decimal| {
        d.to_f64().ok_or_else(|| EngineError::CalculationError {
            message: format!("{} {} is out of range for the Riebesell curve", name, d),
        })
    };

    let base_limit = to_f64("base limit", curve.base_limit)?;
    let z = to_f64("z", curve.z)?;
    let x = to_f64("limit", x)?;

    let exponent = (1.0 + z).log2();
    let factor = (x / base_limit).powf(exponent);

    if !factor.is_finite() {
        return Err(EngineError::CalculationError {
            message: format!("Riebesell curve is not finite at x = {}", x),
        });
    }

    Decimal::from_f64(factor).ok_or_else(|| EngineError::CalculationError {
        message: format!("Riebesell curve value {} does not fit a decimal", factor),
    })
}

/// Returns the increased limit factor of the layer `excess .. excess + limit`.
///
/// # Examples
///
/// ```
/// use uav_rating_engine::calculation::tpl_ilf;
/// use uav_rating_engine::config::ConfigLoader;
/// use uav_rating_engine::models::Guarded;
/// use rust_decimal::Decimal;
///
/// let loader = ConfigLoader::load("./config/rates.yaml").unwrap();
/// let ilf = tpl_ilf(
///     loader.parameters(),
///     Decimal::from(10000),
///     Decimal::from(1_000_000),
///     Decimal::ZERO,
/// ).unwrap();
/// assert_eq!(ilf, Guarded::Value(Decimal::ONE));
/// ```
pub fn tpl_ilf(
    params: &RateParameters,
    value: Decimal,
    limit: Decimal,
    excess: Decimal,
) -> EngineResult<Guarded<Decimal>> {
    try_guard(value, || {
        let curve = params.curve();
        let layer_top = checked(limit.checked_add(excess), "layer limit plus excess")?;
        let top = riebesell_curve(curve, layer_top)?;
        let bottom = riebesell_curve(curve, excess)?;
        Ok(top - bottom)
    })
}

/// Returns the liability premium for the layer: base layer premium times ILF.
pub fn tpl_layer_premium(
    params: &RateParameters,
    value: Decimal,
    limit: Decimal,
    excess: Decimal,
) -> EngineResult<Guarded<Decimal>> {
    let base_layer = tpl_base_layer_premium(params, value)?;
    let ilf = tpl_ilf(params, value, limit, excess)?;
    base_layer
        .zip_with(ilf, |premium, factor| (premium, factor))
        .try_map(|(premium, factor)| checked(premium.checked_mul(factor), "layer premium"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AdjustmentRates, GrossBaseRates};
    use crate::models::WeightBand;
    use std::collections::BTreeMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_parameters() -> RateParameters {
        let mut weights = BTreeMap::new();
        weights.insert(WeightBand::UpTo5Kg, dec("1"));

        RateParameters {
            gross_base_rates: GrossBaseRates {
                hull: dec("0.6"),
                liability: dec("0.2"),
            },
            max_takeoff_weight_adj: weights,
            ilf_riebesell_curve: IlfCurve {
                base_limit: dec("1000000"),
                z: dec("0.2"),
            },
            adjustments: AdjustmentRates::default(),
        }
    }

    fn assert_close(actual: Decimal, expected: &str, tolerance: &str) {
        let diff = (actual - dec(expected)).abs();
        assert!(
            diff <= dec(tolerance),
            "expected {} within {}, got {}",
            expected,
            tolerance,
            actual
        );
    }

    #[test]
    fn test_tpl_base_rate() {
        let params = create_test_parameters();
        assert_eq!(
            tpl_base_rate(&params, dec("10000"), RateUnit::Fraction).unwrap(),
            Guarded::Value(dec("0.2"))
        );
        assert_eq!(
            tpl_base_rate(&params, dec("10000"), RateUnit::Percentage).unwrap(),
            Guarded::Value(dec("20"))
        );
    }

    #[test]
    fn test_tpl_base_layer_premium() {
        let params = create_test_parameters();
        assert_eq!(
            tpl_base_layer_premium(&params, dec("12000")).unwrap(),
            Guarded::Value(dec("2400"))
        );
    }

    #[test]
    fn test_curve_at_base_limit_is_one() {
        let params = create_test_parameters();
        assert_eq!(
            riebesell_curve(params.curve(), dec("1000000")).unwrap(),
            Decimal::ONE
        );
    }

    #[test]
    fn test_curve_at_zero_is_zero() {
        let params = create_test_parameters();
        assert_eq!(riebesell_curve(params.curve(), Decimal::ZERO).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_doubling_limit_scales_by_one_plus_z() {
        let params = create_test_parameters();
        let doubled = riebesell_curve(params.curve(), dec("2000000")).unwrap();
        assert_close(doubled, "1.2", "0.000000001");
    }

    #[test]
    fn test_ilf_at_base_limit_without_excess_is_one() {
        let params = create_test_parameters();
        let ilf = tpl_ilf(&params, dec("10000"), dec("1000000"), Decimal::ZERO).unwrap();
        assert_eq!(ilf.value().unwrap().round_dp(TPL_ILF_DECIMALS), dec("1.00"));
    }

    #[test]
    fn test_ilf_for_excess_layer() {
        let params = create_test_parameters();

        // 4M xs 1M: 5^log2(1.2) - 1
        let ilf = tpl_ilf(&params, dec("12000"), dec("4000000"), dec("1000000"))
            .unwrap()
            .value()
            .unwrap();
        assert_close(ilf, "0.52705", "0.00001");
        assert_eq!(ilf.round_dp(TPL_ILF_DECIMALS), dec("0.53"));

        // 5M xs 5M: 10^log2(1.2) - 5^log2(1.2)
        let ilf = tpl_ilf(&params, dec("15000"), dec("5000000"), dec("5000000"))
            .unwrap()
            .value()
            .unwrap();
        assert_eq!(ilf.round_dp(TPL_ILF_DECIMALS), dec("0.31"));
    }

    #[test]
    fn test_layer_premium_uses_unrounded_ilf() {
        let params = create_test_parameters();
        let premium = tpl_layer_premium(&params, dec("12000"), dec("4000000"), dec("1000000"))
            .unwrap()
            .value()
            .unwrap();

        // 2400 * 0.52705 = 1264.92, while 2400 * 0.53 would give 1272
        assert_eq!(premium.round_dp(TPL_LAYER_PREMIUM_DECIMALS), dec("1265"));
    }

    #[test]
    fn test_layer_top_beyond_decimal_range_is_calculation_error() {
        let params = create_test_parameters();
        let huge = dec("50000000000000000000000000000");

        let result = tpl_ilf(&params, dec("12000"), huge, huge);
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }

    #[test]
    fn test_base_layer_premium_beyond_decimal_range_is_calculation_error() {
        let mut params = create_test_parameters();
        params.gross_base_rates.liability = dec("10");

        let result = tpl_base_layer_premium(&params, Decimal::MAX);
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }

    #[test]
    fn test_zero_value_drone_tpl_fields_are_not_applicable() {
        let params = create_test_parameters();

        assert!(
            tpl_base_rate(&params, Decimal::ZERO, RateUnit::Percentage)
                .unwrap()
                .is_not_applicable()
        );
        assert!(
            tpl_base_layer_premium(&params, Decimal::ZERO)
                .unwrap()
                .is_not_applicable()
        );
        assert!(
            tpl_ilf(&params, Decimal::ZERO, dec("1000000"), Decimal::ZERO)
                .unwrap()
                .is_not_applicable()
        );
        assert!(
            tpl_layer_premium(&params, Decimal::ZERO, dec("1000000"), Decimal::ZERO)
                .unwrap()
                .is_not_applicable()
        );
    }
}
