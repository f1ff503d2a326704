//! HTTP API module for the UAV rating engine.
//!
//! This module provides the REST API endpoints for rating fleets and for
//! inspecting the loaded rate parameters.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::RateRequest;
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
