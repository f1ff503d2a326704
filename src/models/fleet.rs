//! Fleet input and output documents.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{Camera, Drone, RatedCamera, RatedDrone};

/// A fleet submitted for rating.
///
/// # Example
///
/// ```
/// use uav_rating_engine::models::Fleet;
///
/// let fleet: Fleet = serde_json::from_str(r#"{
///     "drones": [],
///     "detachable_cameras": [],
///     "brokerage": 0.3,
///     "max_drones_in_air": 2
/// }"#).unwrap();
/// assert_eq!(fleet.max_drones_in_air, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fleet {
    /// Drones, in submission order.
    #[serde(default)]
    pub drones: Vec<Drone>,
    /// Detachable cameras, in submission order.
    #[serde(default)]
    pub detachable_cameras: Vec<Camera>,
    /// Fraction of gross premium retained by the broker.
    pub brokerage: Decimal,
    /// How many drones can be airborne at the same time.
    pub max_drones_in_air: u32,
}

/// Premium totals per coverage category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumSummary {
    /// Drone hull premium total.
    pub drones_hull: Decimal,
    /// Drone liability premium total.
    pub drones_tpl: Decimal,
    /// Camera hull premium total.
    pub cameras_hull: Decimal,
    /// Sum of the three categories.
    pub total: Decimal,
}

/// The fleet output document: the input with computed fields and summaries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedFleet {
    /// Rated drones, in submission order.
    pub drones: Vec<RatedDrone>,
    /// Rated cameras, in submission order.
    pub detachable_cameras: Vec<RatedCamera>,
    /// Fraction of gross premium retained by the broker.
    pub brokerage: Decimal,
    /// How many drones can be airborne at the same time.
    pub max_drones_in_air: u32,
    /// Totals before brokerage.
    pub net_prem: PremiumSummary,
    /// Totals including brokerage.
    pub gross_prem: PremiumSummary,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_item_lists_default_to_empty() {
        let fleet: Fleet =
            serde_json::from_str(r#"{"brokerage": 0.25, "max_drones_in_air": 1}"#).unwrap();
        assert!(fleet.drones.is_empty());
        assert!(fleet.detachable_cameras.is_empty());
    }

    #[test]
    fn test_negative_capacity_is_rejected_by_type() {
        let result: Result<Fleet, _> =
            serde_json::from_str(r#"{"brokerage": 0.25, "max_drones_in_air": -1}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_summary_serializes_category_labels() {
        let summary = PremiumSummary::default();
        let json = serde_json::to_value(summary).unwrap();
        for key in ["drones_hull", "drones_tpl", "cameras_hull", "total"] {
            assert!(json.get(key).is_some(), "missing {}", key);
        }
    }
}
