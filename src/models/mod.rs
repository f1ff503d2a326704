//! Core data models for the rating engine.
//!
//! This module contains the fleet input records, the rated records the engine
//! produces, premium summaries and the NotApplicable sentinel.

mod camera;
mod drone;
mod fleet;
mod guarded;
mod weight_band;

pub use camera::{Camera, CameraRating, RatedCamera};
pub use drone::{Drone, DroneRating, RatedDrone};
pub use fleet::{Fleet, PremiumSummary, RatedFleet};
pub use guarded::{Guarded, NOT_APPLICABLE_MARKER};
pub use weight_band::WeightBand;
