//! The NotApplicable sentinel for zero-value items.
//!
//! Every rate and premium derived for an item whose value is zero is
//! undefined by business rule. [`Guarded`] makes that outcome a visible
//! variant instead of a magic number, so "not applicable" can never be
//! confused with a computed zero premium or with an error.

use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize, Serializer};

/// The marker written to output documents in place of a NotApplicable field.
pub const NOT_APPLICABLE_MARKER: &str = "";

/// A derived rate or premium that is either computed or not applicable.
///
/// Serializes as the inner value, or as an empty string when not applicable,
/// which is what existing consumers of the output document expect.
///
/// # Example
///
/// ```
/// use uav_rating_engine::models::Guarded;
///
/// let rate = Guarded::Value(2);
/// assert_eq!(rate.map(|r| r * 10), Guarded::Value(20));
///
/// let excluded: Guarded<i32> = Guarded::NotApplicable;
/// assert!(excluded.map(|r| r * 10).is_not_applicable());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Guarded<T> {
    /// The formula was evaluated.
    Value(T),
    /// The item has zero value, so the formula does not apply.
    #[default]
    NotApplicable,
}

impl<T> Guarded<T> {
    /// Returns true for the NotApplicable sentinel.
    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Guarded::NotApplicable)
    }

    /// Returns the computed value, if any.
    pub fn value(self) -> Option<T> {
        match self {
            Guarded::Value(value) => Some(value),
            Guarded::NotApplicable => None,
        }
    }

    /// Applies `f` to a computed value, passing NotApplicable through.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Guarded<U> {
        match self {
            Guarded::Value(value) => Guarded::Value(f(value)),
            Guarded::NotApplicable => Guarded::NotApplicable,
        }
    }

    /// Combines two guarded values; NotApplicable if either side is.
    pub fn zip_with<U, R>(self, other: Guarded<U>, f: impl FnOnce(T, U) -> R) -> Guarded<R> {
        match (self, other) {
            (Guarded::Value(a), Guarded::Value(b)) => Guarded::Value(f(a, b)),
            _ => Guarded::NotApplicable,
        }
    }

    /// Applies a fallible `f` to a computed value.
    pub fn try_map<U, E>(self, f: impl FnOnce(T) -> Result<U, E>) -> Result<Guarded<U>, E> {
        match self {
            Guarded::Value(value) => f(value).map(Guarded::Value),
            Guarded::NotApplicable => Ok(Guarded::NotApplicable),
        }
    }
}

impl<T: Serialize> Serialize for Guarded<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Guarded::Value(value) => value.serialize(serializer),
            Guarded::NotApplicable => serializer.serialize_str(NOT_APPLICABLE_MARKER),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Guarded<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr<T> {
            Value(T),
            Marker(String),
        }

        match Repr::<T>::deserialize(deserializer)? {
            Repr::Value(value) => Ok(Guarded::Value(value)),
            Repr::Marker(marker) if marker == NOT_APPLICABLE_MARKER => Ok(Guarded::NotApplicable),
            Repr::Marker(other) => Err(de::Error::custom(format!(
                "expected a number or an empty string, got {:?}",
                other
            ))),
        }
    }
}
