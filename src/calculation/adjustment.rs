//! Operational-capacity premium adjustment.
//!
//! Only `max_drones_in_air` items can be airborne at once. Items ranked
//! beyond that capacity are charged a flat grounded-equipment premium instead
//! of their computed hull premium:
//!
//! - drones are ranked by computed hull premium, highest first;
//! - cameras are ranked by value, highest first, and only when there are
//!   more cameras than the capacity.
//!
//! Ranking is stable, so ties keep their submission order. Zero-value items
//! keep their NotApplicable premium wherever they rank.

use rust_decimal::Decimal;
use tracing::debug;

use crate::config::RateParameters;
use crate::models::{Guarded, RatedCamera, RatedDrone};

/// Returns item indices ordered by `key` descending, ties in input order.
fn rank_descending<K: Ord>(keys: &[K]) -> Vec<usize> {
    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by(|&a, &b| keys[b].cmp(&keys[a]));
    order
}

fn ground(premium: &mut Guarded<Decimal>, flat_premium: Decimal) {
    if !premium.is_not_applicable() {
        *premium = Guarded::Value(flat_premium);
    }
}

/// Charges drones ranked beyond `max_drones_in_air` the grounded drone premium.
///
/// # Examples
///
/// ```
/// use uav_rating_engine::calculation::limited_drones_in_use;
/// use uav_rating_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/rates.yaml").unwrap();
/// let adjusted = limited_drones_in_use(loader.parameters(), Vec::new(), 2);
/// assert!(adjusted.is_empty());
/// ```
pub fn limited_drones_in_use(
    params: &RateParameters,
    mut drones: Vec<RatedDrone>,
    max_drones_in_air: u32,
) -> Vec<RatedDrone> {
    let flat_premium = params.adjustments().grounded_drone_hull_premium;
    let keys: Vec<Option<Decimal>> = drones
        .iter()
        .map(|drone| drone.rating.hull_premium.value())
        .collect();

    for index in rank_descending(&keys)
        .into_iter()
        .skip(max_drones_in_air as usize)
    {
        debug!(
            drone_index = index,
            flat_premium = %flat_premium,
            "Drone beyond operational capacity"
        );
        ground(&mut drones[index].rating.hull_premium, flat_premium);
    }

    drones
}

/// Charges cameras ranked beyond `max_drones_in_air` the grounded camera premium.
///
/// Leaves the cameras unchanged when there are no more of them than the
/// capacity.
pub fn limited_cameras_in_use(
    params: &RateParameters,
    mut cameras: Vec<RatedCamera>,
    max_drones_in_air: u32,
) -> Vec<RatedCamera> {
    let capacity = max_drones_in_air as usize;
    if cameras.len() <= capacity {
        return cameras;
    }

    let flat_premium = params.adjustments().grounded_camera_hull_premium;
    let keys: Vec<Decimal> = cameras.iter().map(|camera| camera.camera.value).collect();

    for index in rank_descending(&keys).into_iter().skip(capacity) {
        debug!(
            camera_index = index,
            flat_premium = %flat_premium,
            "Camera beyond operational capacity"
        );
        ground(&mut cameras[index].rating.hull_premium, flat_premium);
    }

    cameras
}
