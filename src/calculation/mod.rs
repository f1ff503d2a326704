//! Calculation logic for the UAV rating engine.
//!
//! This module contains the rating formulas as free functions over the rate
//! parameters: the zero-value guard, drone hull and third-party-liability
//! rating with the Riebesell increased-limit curve, the fleet-wide camera
//! hull rate, net and gross premium aggregation, the operational-capacity
//! premium adjustment and fleet ingestion checks.

mod adjustment;
mod aggregation;
mod camera_hull;
mod drone_hull;
mod drone_tpl;
mod validation;
mod zero_guard;

pub use adjustment::{limited_cameras_in_use, limited_drones_in_use};
pub use aggregation::{
    PremiumField, PremiumItem, TOTAL_DECIMALS, gross_up, premium_grand_total, total_gross,
    total_net, validate_brokerage,
};
pub use camera_hull::{CAMERA_HULL_RATE_DECIMALS, camera_hull_premium, camera_hull_rate};
pub use drone_hull::{
    HULL_FINAL_RATE_DECIMALS, hull_base_rate, hull_final_rate, hull_premium,
    hull_weight_adjustment,
};
pub use drone_tpl::{
    TPL_ILF_DECIMALS, TPL_LAYER_PREMIUM_DECIMALS, riebesell_curve, tpl_base_layer_premium,
    tpl_base_rate, tpl_ilf, tpl_layer_premium,
};
pub use validation::{validate_camera, validate_drone, validate_fleet};
pub use zero_guard::{RateUnit, calculate_premium, checked, guard, try_guard};
