//! Fleet ingestion checks.
//!
//! A fleet is validated once before any rating begins, so a bad record never
//! yields a partially rated document.

use rust_decimal::Decimal;

use crate::config::RateParameters;
use crate::error::{EngineError, EngineResult};
use crate::models::{Camera, Drone, Fleet};

use super::aggregation::validate_brokerage;

fn negative_drone_field(index: usize, field: &str, value: Decimal) -> EngineError {
    EngineError::InvalidDrone {
        index,
        field: field.to_string(),
        message: format!("must not be negative, got {}", value),
    }
}

/// Checks a single drone record.
///
/// Zero-value drones are excluded from rating, so their weight band is not
/// looked up.
pub fn validate_drone(params: &RateParameters, index: usize, drone: &Drone) -> EngineResult<()> {
    for (field, value) in [
        ("value", drone.value),
        ("tpl_limit", drone.tpl_limit),
        ("tpl_excess", drone.tpl_excess),
    ] {
        if value < Decimal::ZERO {
            return Err(negative_drone_field(index, field, value));
        }
    }

    if !drone.value.is_zero() {
        params.weight_adjustment(drone.weight_band)?;
    }

    Ok(())
}

/// Checks a single camera record.
pub fn validate_camera(index: usize, camera: &Camera) -> EngineResult<()> {
    if camera.value < Decimal::ZERO {
        return Err(EngineError::InvalidCamera {
            index,
            field: "value".to_string(),
            message: format!("must not be negative, got {}", camera.value),
        });
    }
    Ok(())
}

/// Checks a whole fleet before rating.
///
/// # Returns
///
/// The first problem found, in document order: fleet-level fields, then
/// drones, then cameras.
pub fn validate_fleet(params: &RateParameters, fleet: &Fleet) -> EngineResult<()> {
    validate_brokerage(fleet.brokerage)?;

    if fleet.max_drones_in_air == 0 {
        return Err(EngineError::InvalidFleet {
            field: "max_drones_in_air".to_string(),
            message: "must be at least 1".to_string(),
        });
    }

    for (index, drone) in fleet.drones.iter().enumerate() {
        validate_drone(params, index, drone)?;
    }

    for (index, camera) in fleet.detachable_cameras.iter().enumerate() {
        validate_camera(index, camera)?;
    }

    Ok(())
}
