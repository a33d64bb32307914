//! HTTP API module for the Reimbursement Engine.
//!
//! This module provides the REST API endpoints for calculating travel
//! reimbursements.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BatchCalculationRequest, CalculationRequest};
pub use response::{ApiError, BatchCalculationResponse};
pub use state::AppState;
