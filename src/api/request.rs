//! Request types for the Reimbursement Engine API.
//!
//! This module defines the JSON request structures for the `/calculate`
//! and `/calculate/batch` endpoints.

use serde::{Deserialize, Serialize};

use crate::models::Trip;

/// Request body for the `/calculate` endpoint.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CalculationRequest {
    /// Trip duration in days.
    pub trip_duration_days: i64,
    /// Total miles traveled.
    pub miles_traveled: f64,
    /// Total amount of receipts submitted.
    pub total_receipts_amount: f64,
}

/// Request body for the `/calculate/batch` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BatchCalculationRequest {
    /// The trips to calculate, in order.
    pub trips: Vec<CalculationRequest>,
}

impl From<CalculationRequest> for Trip {
    fn from(req: CalculationRequest) -> Self {
        Trip::new(
            req.trip_duration_days,
            req.miles_traveled,
            req.total_receipts_amount,
        )
    }
}
