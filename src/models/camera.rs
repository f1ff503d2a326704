//! Detachable camera records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Guarded;

/// A detachable camera as it appears in the fleet input document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Optional identifier carried through to the output document.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
    /// Insured hull value.
    pub value: Decimal,
}

/// The fields the rating pass adds to a camera.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CameraRating {
    /// Fleet-wide camera hull rate, in percent, rounded to one decimal.
    pub hull_rate: Guarded<Decimal>,
    /// Hull premium.
    pub hull_premium: Guarded<Decimal>,
}

/// A camera record with its computed rating fields merged in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedCamera {
    /// The input record.
    #[serde(flatten)]
    pub camera: Camera,
    /// The computed fields.
    #[serde(flatten)]
    pub rating: CameraRating,
}
