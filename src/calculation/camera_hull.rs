//! Camera hull rating.
//!
//! Cameras have no rate formula of their own. The fleet-wide camera rate is
//! the highest hull final rate among drones that carry a detachable camera
//! and have a non-zero value, and every camera is priced at that one rate
//! regardless of which drone it is attached to.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateParameters;
use crate::error::{EngineError, EngineResult};
use crate::models::{Drone, Guarded};

use super::drone_hull::hull_final_rate;
use super::zero_guard::{RateUnit, calculate_premium};

/// Decimal places kept on the published camera hull rate (in percent).
pub const CAMERA_HULL_RATE_DECIMALS: u32 = 1;

/// Returns the fleet-wide camera hull rate.
///
/// # Returns
///
/// The highest hull final rate among eligible drones, or `NoEligibleDrone`
/// when no drone carries a detachable camera with a non-zero value.
///
/// # Examples
///
/// ```
/// use uav_rating_engine::calculation::{RateUnit, camera_hull_rate};
/// use uav_rating_engine::config::ConfigLoader;
/// use uav_rating_engine::error::EngineError;
///
/// let loader = ConfigLoader::load("./config/rates.yaml").unwrap();
/// let result = camera_hull_rate(loader.parameters(), &[], RateUnit::Fraction);
/// assert!(matches!(result, Err(EngineError::NoEligibleDrone)));
/// ```
pub fn camera_hull_rate(
    params: &RateParameters,
    drones: &[Drone],
    unit: RateUnit,
) -> EngineResult<Decimal> {
    let mut highest: Option<Decimal> = None;

    for drone in drones
        .iter()
        .filter(|drone| drone.has_detachable_camera && drone.value > Decimal::ZERO)
    {
        let rate = hull_final_rate(params, drone.value, drone.weight_band, RateUnit::Fraction)?;
        if let Guarded::Value(rate) = rate {
            highest = Some(highest.map_or(rate, |current| current.max(rate)));
        }
    }

    let rate = highest.ok_or(EngineError::NoEligibleDrone)?;
    debug!(camera_hull_rate = %rate, "Derived fleet-wide camera hull rate");
    unit.express(rate)
}

/// Returns a camera's hull premium at the fleet-wide rate given in percent.
pub fn camera_hull_premium(
    rate_as_percentage: Decimal,
    camera_value: Decimal,
) -> EngineResult<Guarded<Decimal>> {
    calculate_premium(rate_as_percentage, camera_value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AdjustmentRates, GrossBaseRates, IlfCurve};
    use crate::models::WeightBand;
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
        weights.insert(WeightBand::Over20Kg, dec("2.5"));

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

    fn create_drone(value: &str, band: WeightBand, has_camera: bool) -> Drone {
        Drone {
            serial_number: None,
            value: dec(value),
            weight_band: band,
            has_detachable_camera: has_camera,
            tpl_limit: dec("1000000"),
            tpl_excess: Decimal::ZERO,
        }
    }

    fn reference_drones() -> Vec<Drone> {
        vec![
            create_drone("10000", WeightBand::UpTo5Kg, true),
            create_drone("12000", WeightBand::From10To20Kg, false),
            create_drone("15000", WeightBand::From5To10Kg, true),
        ]
    }

    #[test]
    fn test_rate_is_highest_eligible_drone_rate() {
        let params = create_test_parameters();
        let rate = camera_hull_rate(&params, &reference_drones(), RateUnit::Fraction).unwrap();

        // 0.6 * 1.2; the 10 - 20kg drone has a higher rate but no camera
        assert_eq!(rate, dec("0.72"));
    }

    #[test]
    fn test_rate_in_percentage() {
        let params = create_test_parameters();
        let rate = camera_hull_rate(&params, &reference_drones(), RateUnit::Percentage).unwrap();
        assert_eq!(rate, dec("72"));
    }

    #[test]
    fn test_zero_value_drones_are_not_eligible() {
        let params = create_test_parameters();
        let drones = vec![
            create_drone("0", WeightBand::Over20Kg, true),
            create_drone("10000", WeightBand::UpTo5Kg, true),
        ];

        let rate = camera_hull_rate(&params, &drones, RateUnit::Fraction).unwrap();
        assert_eq!(rate, dec("0.6"));
    }

    #[test]
    fn test_no_camera_carrying_drone_is_an_error() {
        let params = create_test_parameters();
        let drones = vec![create_drone("12000", WeightBand::From10To20Kg, false)];

        let result = camera_hull_rate(&params, &drones, RateUnit::Fraction);
        assert!(matches!(result, Err(EngineError::NoEligibleDrone)));
    }

    #[test]
    fn test_only_zero_value_camera_drones_is_an_error() {
        let params = create_test_parameters();
        let drones = vec![create_drone("0", WeightBand::UpTo5Kg, true)];

        let result = camera_hull_rate(&params, &drones, RateUnit::Fraction);
        assert!(matches!(result, Err(EngineError::NoEligibleDrone)));
    }

    #[test]
    fn test_camera_premium_at_fleet_rate() {
        assert_eq!(
            camera_hull_premium(dec("72"), dec("5000")).unwrap(),
            Guarded::Value(dec("3600"))
        );
        assert_eq!(
            camera_hull_premium(dec("72"), dec("1500")).unwrap(),
            Guarded::Value(dec("1080"))
        );
        assert!(
            camera_hull_premium(dec("72"), Decimal::ZERO)
                .unwrap()
                .is_not_applicable()
        );
    }

    #[test]
    fn test_camera_premium_beyond_decimal_range_is_calculation_error() {
        let result = camera_hull_premium(dec("72"), Decimal::MAX);
        assert!(matches!(result, Err(EngineError::CalculationError { .. })));
    }
}
