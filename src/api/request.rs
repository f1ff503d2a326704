//! Request types for the UAV rating engine API.
//!
//! This module defines the JSON request structure for the `/rate` endpoint.

use serde::{Deserialize, Serialize};

use crate::engine::RatingOptions;
use crate::models::Fleet;

/// Request body for the `/rate` endpoint.
///
/// The fleet input document, optionally carrying an `apply_adjustments`
/// flag next to the fleet fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RateRequest {
    /// The fleet to rate.
    #[serde(flatten)]
    pub fleet: Fleet,
    /// Whether to apply the operational-capacity adjustment.
    #[serde(default)]
    pub apply_adjustments: bool,
}

impl RateRequest {
    /// Returns the rating options carried by the request.
    pub fn options(&self) -> RatingOptions {
        RatingOptions {
            apply_adjustments: self.apply_adjustments,
        }
    }
}
