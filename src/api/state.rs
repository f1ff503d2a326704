//! Application state for the UAV rating engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::engine::RatingEngine;

/// Shared application state.
///
/// Holds the rating engine, which carries the loaded rate parameters.
#[derive(Clone)]
pub struct AppState {
    engine: Arc<RatingEngine>,
}

impl AppState {
    /// Creates a new application state around the given engine.
    pub fn new(engine: RatingEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Returns a reference to the rating engine.
    pub fn engine(&self) -> &RatingEngine {
        &self.engine
    }
}
