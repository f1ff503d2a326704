//! Rate parameter types.
//!
//! This module contains the strongly-typed structures deserialized from the
//! rate parameter document. The document is loaded once and shared read-only
//! by every rating function.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{EngineError, EngineResult};
use crate::models::WeightBand;

/// Flat hull premium for drones beyond the operational capacity.
pub const DEFAULT_GROUNDED_DRONE_HULL_PREMIUM: i64 = 150;

/// Flat hull premium for cameras beyond the operational capacity.
pub const DEFAULT_GROUNDED_CAMERA_HULL_PREMIUM: i64 = 50;

/// Gross base rates, as fractions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GrossBaseRates {
    /// Hull base rate.
    pub hull: Decimal,
    /// Third-party-liability base rate.
    pub liability: Decimal,
}

/// Riebesell increased-limit curve parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IlfCurve {
    /// The limit at which the increased limit factor is 1.
    pub base_limit: Decimal,
    /// Fractional rate decay each time the limit doubles.
    pub z: Decimal,
}

/// Flat premiums used by the operational-capacity adjustment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdjustmentRates {
    /// Hull premium charged for each drone ranked beyond the capacity.
    #[serde(default = "default_grounded_drone_hull_premium")]
    pub grounded_drone_hull_premium: Decimal,
    /// Hull premium charged for each camera ranked beyond the capacity.
    #[serde(default = "default_grounded_camera_hull_premium")]
    pub grounded_camera_hull_premium: Decimal,
}

fn default_grounded_drone_hull_premium() -> Decimal {
    Decimal::from(DEFAULT_GROUNDED_DRONE_HULL_PREMIUM)
}

fn default_grounded_camera_hull_premium() -> Decimal {
    Decimal::from(DEFAULT_GROUNDED_CAMERA_HULL_PREMIUM)
}

impl Default for AdjustmentRates {
    fn default() -> Self {
        Self {
            grounded_drone_hull_premium: default_grounded_drone_hull_premium(),
            grounded_camera_hull_premium: default_grounded_camera_hull_premium(),
        }
    }
}

/// The complete rate parameter document.
///
/// # Example
///
/// ```
/// use uav_rating_engine::config::RateParameters;
/// use uav_rating_engine::models::WeightBand;
///
/// let params: RateParameters = serde_json::from_str(r#"{
///     "gross_base_rates": {"hull": 0.6, "liability": 0.2},
///     "max_takeoff_weight_adj": {"0 - 5kg": 1, "5 - 10kg": 1.2},
///     "ilf_riebesell_curve": {"base_limit": 1000000, "z": 0.2}
/// }"#).unwrap();
///
/// assert!(params.weight_adjustment(WeightBand::From5To10Kg).is_ok());
/// assert!(params.weight_adjustment(WeightBand::Over20Kg).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateParameters {
    /// Hull and liability base rates.
    pub gross_base_rates: GrossBaseRates,
    /// Hull-rate multiplier per weight band.
    pub max_takeoff_weight_adj: BTreeMap<WeightBand, Decimal>,
    /// Curve used to price liability layers.
    pub ilf_riebesell_curve: IlfCurve,
    /// Flat premiums for the capacity adjustment.
    #[serde(default)]
    pub adjustments: AdjustmentRates,
}

impl RateParameters {
    /// Returns the configured hull rate as a fraction.
    pub fn hull_rate(&self) -> Decimal {
        self.gross_base_rates.hull
    }

    /// Returns the configured liability rate as a fraction.
    pub fn liability_rate(&self) -> Decimal {
        self.gross_base_rates.liability
    }

    /// Looks up the hull multiplier for a weight band.
    ///
    /// Returns `WeightBandNotFound` when the band has no entry; there is no
    /// fallback multiplier.
    pub fn weight_adjustment(&self, band: WeightBand) -> EngineResult<Decimal> {
        self.max_takeoff_weight_adj
            .get(&band)
            .copied()
            .ok_or_else(|| EngineError::WeightBandNotFound {
                band: band.label().to_string(),
            })
    }

    /// Returns the increased-limit curve.
    pub fn curve(&self) -> &IlfCurve {
        &self.ilf_riebesell_curve
    }

    /// Returns the capacity adjustment premiums.
    pub fn adjustments(&self) -> &AdjustmentRates {
        &self.adjustments
    }

    /// Checks that the parameters describe a usable rate table.
    pub fn validate(&self) -> EngineResult<()> {
        non_negative("gross_base_rates.hull", self.gross_base_rates.hull)?;
        non_negative("gross_base_rates.liability", self.gross_base_rates.liability)?;

        for (band, multiplier) in &self.max_takeoff_weight_adj {
            non_negative(&format!("max_takeoff_weight_adj.{}", band), *multiplier)?;
        }

        if self.ilf_riebesell_curve.base_limit <= Decimal::ZERO {
            return Err(EngineError::InvalidConfig {
                field: "ilf_riebesell_curve.base_limit".to_string(),
                message: "must be positive".to_string(),
            });
        }

        let z = self.ilf_riebesell_curve.z;
        if z <= Decimal::ZERO || z >= Decimal::ONE {
            return Err(EngineError::InvalidConfig {
                field: "ilf_riebesell_curve.z".to_string(),
                message: format!("must be between 0 and 1 exclusive, got {}", z),
            });
        }

        non_negative(
            "adjustments.grounded_drone_hull_premium",
            self.adjustments.grounded_drone_hull_premium,
        )?;
        non_negative(
            "adjustments.grounded_camera_hull_premium",
            self.adjustments.grounded_camera_hull_premium,
        )
    }
}

fn non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidConfig {
            field: field.to_string(),
            message: format!("must not be negative, got {}", value),
        });
    }
    Ok(())
}
