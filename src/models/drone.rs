//! Drone records and their computed rating fields.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Guarded, WeightBand};

/// A drone as it appears in the fleet input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Drone {
    /// Optional identifier carried through to the output document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Insured hull value.
    pub value: Decimal,
    /// Maximum take-off weight band.
    #[serde(rename = "weight")]
    pub weight_band: WeightBand,
    /// Whether the drone carries a detachable camera.
    pub has_detachable_camera: bool,
    /// Third-party-liability limit of the layer.
    pub tpl_limit: Decimal,
    /// Attachment point of the third-party-liability layer.
    pub tpl_excess: Decimal,
}

/// The fields the rating pass adds to a drone.
///
/// Rates are expressed as percentages; `hull_final_rate` is rounded to one
/// decimal, `tpl_ilf` to two and `tpl_layer_premium` to whole units.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DroneRating {
    /// Configured hull rate, in percent.
    pub hull_base_rate: Guarded<Decimal>,
    /// Weight-band multiplier.
    pub hull_weight_adjustment: Guarded<Decimal>,
    /// Hull rate after the weight adjustment, in percent.
    pub hull_final_rate: Guarded<Decimal>,
    /// Hull premium.
    pub hull_premium: Guarded<Decimal>,
    /// Configured liability rate, in percent.
    pub tpl_base_rate: Guarded<Decimal>,
    /// Liability premium at the base limit.
    pub tpl_base_layer_premium: Guarded<Decimal>,
    /// Increased limit factor for the liability layer.
    pub tpl_ilf: Guarded<Decimal>,
    /// Liability premium for the layer.
    pub tpl_layer_premium: Guarded<Decimal>,
}

impl DroneRating {
    /// A rating where every field is NotApplicable.
    pub fn not_applicable() -> Self {
        Self::default()
    }

    /// Returns true when every field holds the NotApplicable sentinel.
    pub fn is_not_applicable(&self) -> bool {
        self.hull_base_rate.is_not_applicable()
            && self.hull_weight_adjustment.is_not_applicable()
            && self.hull_final_rate.is_not_applicable()
            && self.hull_premium.is_not_applicable()
            && self.tpl_base_rate.is_not_applicable()
            && self.tpl_base_layer_premium.is_not_applicable()
            && self.tpl_ilf.is_not_applicable()
            && self.tpl_layer_premium.is_not_applicable()
    }
}

/// A drone record with its computed rating fields merged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedDrone {
    /// The input record.
    #[serde(flatten)]
    pub drone: Drone,
    /// The computed fields.
    #[serde(flatten)]
    pub rating: DroneRating,
}
