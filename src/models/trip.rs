//! Trip model for the Reimbursement Engine.
//!
//! This module contains the [`Trip`] type, the three inputs every
//! reimbursement calculation is made from.

use serde::{Deserialize, Serialize};

/// A single business trip submitted for reimbursement.
///
/// Inputs are not validated: negative or zero values flow through the
/// formula and the final amount is floored at zero.
///
/// # Example
///
/// ```
/// use reimbursement_engine::models::Trip;
///
/// let trip = Trip::new(5, 1000.0, 400.0);
/// assert_eq!(trip.miles_per_day(), Some(200.0));
/// assert_eq!(trip.receipts_per_day(), Some(80.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    /// Trip duration in whole days.
    pub days: i64,
    /// Total miles traveled.
    pub miles: f64,
    /// Total amount of receipts submitted, in the output currency.
    pub receipts: f64,
}

impl Trip {
    /// Creates a new trip from its three inputs.
    pub fn new(days: i64, miles: f64, receipts: f64) -> Self {
        Self {
            days,
            miles,
            receipts,
        }
    }

    /// Returns the average miles traveled per day.
    ///
    /// Returns `None` when the trip has no positive day count, since the
    /// ratio is undefined.
    pub fn miles_per_day(&self) -> Option<f64> {
        self.per_day(self.miles)
    }

    /// Returns the average receipts submitted per day.
    ///
    /// Returns `None` when the trip has no positive day count.
    pub fn receipts_per_day(&self) -> Option<f64> {
        self.per_day(self.receipts)
    }

    /// Returns true if any input is negative.
    pub fn has_negative_input(&self) -> bool {
        self.days < 0 || self.miles < 0.0 || self.receipts < 0.0
    }

    fn per_day(&self, value: f64) -> Option<f64> {
        if self.days > 0 {
            Some(value / self.days as f64)
        } else {
            None
        }
    }
}
