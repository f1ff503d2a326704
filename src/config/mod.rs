//! Rate parameter loading and access.
//!
//! This module loads the read-only rate parameter document: hull and
//! liability base rates, the weight-band multiplier table, the Riebesell
//! curve parameters and the capacity adjustment premiums.
//!
//! # Example
//!
//! ```no_run
//! use uav_rating_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/rates.yaml").unwrap();
//! println!("Hull base rate: {}", loader.parameters().hull_rate());
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AdjustmentRates, DEFAULT_GROUNDED_CAMERA_HULL_PREMIUM, DEFAULT_GROUNDED_DRONE_HULL_PREMIUM,
    GrossBaseRates, IlfCurve, RateParameters,
};
