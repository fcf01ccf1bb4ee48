//! HTTP API module for the punch clock.
//!
//! This module provides the REST endpoints the time-clock UI calls: one
//! punch per request, and the shift history view.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{PunchRequest, TIME_PUNCH_FORMAT};
pub use response::{ApiError, PunchResponse};
pub use state::AppState;
