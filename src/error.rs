//! Error types for the UAV rating engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while loading rate parameters,
//! validating a fleet, or rating it.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the rating engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use uav_rating_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/rates.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/rates.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds values the engine cannot rate with.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A weight band has no multiplier in the rate table.
    #[error("Weight band not found in rate table: {band}")]
    WeightBandNotFound {
        /// The band label that was looked up.
        band: String,
    },

    /// Camera rating needs at least one camera-carrying drone with a non-zero value.
    #[error("No eligible drone: camera hull rate requires a drone with a detachable camera and a non-zero value")]
    NoEligibleDrone,

    /// Brokerage must lie in `[0, 1)`.
    #[error("Invalid brokerage {brokerage}: must be at least 0 and less than 1")]
    InvalidBrokerage {
        /// The rejected brokerage fraction.
        brokerage: Decimal,
    },

    /// A drone record failed ingestion checks.
    #[error("Invalid drone #{index} field '{field}': {message}")]
    InvalidDrone {
        /// Position of the drone in the fleet.
        index: usize,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A camera record failed ingestion checks.
    #[error("Invalid camera #{index} field '{field}': {message}")]
    InvalidCamera {
        /// Position of the camera in the fleet.
        index: usize,
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A fleet-level field failed ingestion checks.
    #[error("Invalid fleet field '{field}': {message}")]
    InvalidFleet {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
