//! Drone hull rating.
//!
//! The hull rate is the configured base rate scaled by the weight-band
//! multiplier; the premium prices the drone value at that rate.

use rust_decimal::Decimal;

use crate::config::RateParameters;
use crate::error::EngineResult;
use crate::models::{Guarded, WeightBand};

use super::zero_guard::{RateUnit, calculate_premium, checked, try_guard};

/// Decimal places kept on the published hull final rate (in percent).
pub const HULL_FINAL_RATE_DECIMALS: u32 = 1;

/// Returns the configured hull base rate for a drone.
pub fn hull_base_rate(
    params: &RateParameters,
    value: Decimal,
    unit: RateUnit,
) -> EngineResult<Guarded<Decimal>> {
    try_guard(value, || unit.express(params.hull_rate()))
}

/// Returns the hull multiplier for a drone's weight band.
///
/// Fails with `WeightBandNotFound` when the band is missing from the rate
/// table, unless the drone has zero value.
pub fn hull_weight_adjustment(
    params: &RateParameters,
    value: Decimal,
    band: WeightBand,
) -> EngineResult<Guarded<Decimal>> {
    try_guard(value, || params.weight_adjustment(band))
}

/// Returns the hull base rate multiplied by the weight adjustment.
///
/// # Examples
///
/// ```
/// use uav_rating_engine::calculation::{RateUnit, hull_final_rate};
/// use uav_rating_engine::config::ConfigLoader;
/// use uav_rating_engine::models::{Guarded, WeightBand};
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let loader = ConfigLoader::load("./config/rates.yaml").unwrap();
/// let rate = hull_final_rate(
///     loader.parameters(),
///     Decimal::from(15000),
///     WeightBand::From5To10Kg,
///     RateUnit::Fraction,
/// ).unwrap();
/// assert_eq!(rate, Guarded::Value(Decimal::from_str("0.72").unwrap()));
/// ```
pub fn hull_final_rate(
    params: &RateParameters,
    value: Decimal,
    band: WeightBand,
    unit: RateUnit,
) -> EngineResult<Guarded<Decimal>> {
    let base_rate = hull_base_rate(params, value, RateUnit::Fraction)?;
    let adjustment = hull_weight_adjustment(params, value, band)?;
    base_rate
        .zip_with(adjustment, |rate, multiplier| (rate, multiplier))
        .try_map(|(rate, multiplier)| {
            let rate = checked(rate.checked_mul(multiplier), "hull final rate")?;
            unit.express(rate)
        })
}

/// Returns the hull premium for a drone.
///
/// The premium is priced at the published final rate, i.e. the percentage
/// rounded to [`HULL_FINAL_RATE_DECIMALS`].
pub fn hull_premium(
    params: &RateParameters,
    value: Decimal,
    band: WeightBand,
) -> EngineResult<Guarded<Decimal>> {
    match hull_final_rate(params, value, band, RateUnit::Percentage)? {
        Guarded::Value(rate) => calculate_premium(rate.round_dp(HULL_FINAL_RATE_DECIMALS), value),
        Guarded::NotApplicable => Ok(Guarded::NotApplicable),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AdjustmentRates, GrossBaseRates, IlfCurve};
    use crate::error::EngineError;
    use std::collections::BTreeMap;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_parameters() -> RateParameters {
        let mut weights = BTreeMap::new();
        weights.insert(WeightBand::UpTo5Kg, dec("1"));
        weights.insert(WeightBand::From5To10Kg, dec("1.2"));
        weights.insert(WeightBand::From10To20Kg, dec("1.6"));

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

    #[test]
    fn test_hull_base_rate() {
        let params = create_test_parameters();
        assert_eq!(
            hull_base_rate(&params, dec("10000"), RateUnit::Fraction).unwrap(),
            Guarded::Value(dec("0.6"))
        );
        assert_eq!(
            hull_base_rate(&params, dec("10000"), RateUnit::Percentage).unwrap(),
            Guarded::Value(dec("60"))
        );
    }

    #[test]
    fn test_hull_weight_adjustment() {
        let params = create_test_parameters();
        let adjustment = hull_weight_adjustment(&params, dec("10000"), WeightBand::UpTo5Kg);
        assert_eq!(adjustment.unwrap(), Guarded::Value(dec("1")));
    }

    #[test]
    fn test_hull_final_rate() {
        let params = create_test_parameters();
        let rate = hull_final_rate(&params, dec("10000"), WeightBand::UpTo5Kg, RateUnit::Fraction);
        assert_eq!(rate.unwrap(), Guarded::Value(dec("0.6")));
    }

    #[test]
    fn test_hull_final_rate_is_product_of_base_and_adjustment() {
        let params = create_test_parameters();
        let value = dec("12000");
        let band = WeightBand::From10To20Kg;

        let base = hull_base_rate(&params, value, RateUnit::Fraction)
            .unwrap()
            .value()
            .unwrap();
        let adjustment = hull_weight_adjustment(&params, value, band)
            .unwrap()
            .value()
            .unwrap();
        let final_rate = hull_final_rate(&params, value, band, RateUnit::Fraction)
            .unwrap()
            .value()
            .unwrap();

        assert_eq!(final_rate, base * adjustment);
        assert_eq!(final_rate, dec("0.96"));
    }

    #[test]
    fn test_unknown_band_fails_lookup() {
        let params = create_test_parameters();
        let result = hull_final_rate(&params, dec("10000"), WeightBand::Over20Kg, RateUnit::Fraction);

        match result {
            Err(EngineError::WeightBandNotFound { band }) => assert_eq!(band, ">20kg"),
            other => panic!("Expected WeightBandNotFound, got {:?}", other),
        }
    }

    #[test]
    fn test_zero_value_drone_is_not_applicable_even_for_unknown_band() {
        let params = create_test_parameters();

        assert!(
            hull_base_rate(&params, Decimal::ZERO, RateUnit::Percentage)
                .unwrap()
                .is_not_applicable()
        );
        assert!(
            hull_weight_adjustment(&params, Decimal::ZERO, WeightBand::Over20Kg)
                .unwrap()
                .is_not_applicable()
        );
        assert!(
            hull_final_rate(&params, Decimal::ZERO, WeightBand::Over20Kg, RateUnit::Fraction)
                .unwrap()
                .is_not_applicable()
        );
        assert!(
            hull_premium(&params, Decimal::ZERO, WeightBand::Over20Kg)
                .unwrap()
                .is_not_applicable()
        );
    }

    #[test]
    fn test_hull_premium_uses_percentage_rate() {
        let params = create_test_parameters();

        // 60% of 10,000
        assert_eq!(
            hull_premium(&params, dec("10000"), WeightBand::UpTo5Kg).unwrap(),
            Guarded::Value(dec("6000"))
        );
        // 96% of 12,000
        assert_eq!(
            hull_premium(&params, dec("12000"), WeightBand::From10To20Kg).unwrap(),
            Guarded::Value(dec("11520"))
        );
    }

    #[test]
    fn test_hull_premium_prices_at_rounded_rate() {
        let mut params = create_test_parameters();
        params.gross_base_rates.hull = dec("0.00123");

        // 0.123% rounds to 0.1%
        assert_eq!(
            hull_premium(&params, dec("10000"), WeightBand::UpTo5Kg).unwrap(),
            Guarded::Value(dec("10"))
        );
    }

    #[test]
    fn test_hull_premium_beyond_decimal_range_is_calculation_error() {
        let params = create_test_parameters();

        let result = hull_premium(
            &params,
            dec("10000000000000000000000000000"),
            WeightBand::UpTo5Kg,
        );
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }
}
