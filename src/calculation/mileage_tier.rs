//! Tiered mileage calculation functionality.
//!
//! The first 100 miles earn the full mileage rate. Every mile past that
//! earns 8% less.

use crate::models::Trip;

use super::base_amount::MILEAGE_RATE;

/// Miles reimbursed at the full rate.
pub const FULL_RATE_MILES: f64 = 100.0;

/// Reduction on the mileage rate for miles past the full rate tier.
pub const EXCESS_MILEAGE_REDUCTION: f64 = 0.08;

/// Returns the (negative) mileage tier adjustment for a trip.
///
/// This is a direct amount, not a share of the base amount.
///
/// # Examples
///
/// ```
/// use reimbursement_engine::calculation::mileage_tier_reduction;
/// use reimbursement_engine::models::Trip;
///
/// assert_eq!(mileage_tier_reduction(&Trip::new(3, 100.0, 0.0), 0.0), None);
///
/// let delta = mileage_tier_reduction(&Trip::new(3, 200.0, 0.0), 0.0).unwrap();
/// assert!((delta + 4.72).abs() < 1e-9);
/// ```
pub fn mileage_tier_reduction(trip: &Trip, _base_amount: f64) -> Option<f64> {
    if trip.miles > FULL_RATE_MILES {
        let excess_miles = trip.miles - FULL_RATE_MILES;
        Some(-(excess_miles * MILEAGE_RATE * EXCESS_MILEAGE_REDUCTION))
    } else {
        None
    }
}
