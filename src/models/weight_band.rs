//! Maximum take-off weight bands.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorical drone weight classification driving the hull-rate multiplier.
///
/// The set is closed: labels outside it are rejected when a fleet document
/// or rate table is deserialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WeightBand {
    /// Up to 5 kg.
    #[serde(rename = "0 - 5kg")]
    UpTo5Kg,
    /// 5 to 10 kg.
    #[serde(rename = "5 - 10kg")]
    From5To10Kg,
    /// 10 to 20 kg.
    #[serde(rename = "10 - 20kg")]
    From10To20Kg,
    /// Over 20 kg.
    #[serde(rename = ">20kg")]
    Over20Kg,
}

impl WeightBand {
    /// Every band, lightest first.
    pub const ALL: [WeightBand; 4] = [
        WeightBand::UpTo5Kg,
        WeightBand::From5To10Kg,
        WeightBand::From10To20Kg,
        WeightBand::Over20Kg,
    ];

    /// Returns the label used in rate tables and fleet documents.
    pub fn label(&self) -> &'static str {
        match self {
            WeightBand::UpTo5Kg => "0 - 5kg",
            WeightBand::From5To10Kg => "5 - 10kg",
            WeightBand::From10To20Kg => "10 - 20kg",
            WeightBand::Over20Kg => ">20kg",
        }
    }
}

impl fmt::Display for WeightBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
