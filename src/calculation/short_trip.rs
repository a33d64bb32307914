//! Short trip premium calculation functionality.
//!
//! One and two day trips are reimbursed slightly above the linear baseline.

use crate::models::Trip;

/// Premium for a one day trip, as a fraction of the base amount.
pub const ONE_DAY_PREMIUM: f64 = 0.08;

/// Premium for a two day trip, as a fraction of the base amount.
pub const TWO_DAY_PREMIUM: f64 = 0.04;

/// Returns the short trip premium for a trip, if any.
///
/// # Arguments
///
/// * `trip` - The trip being reimbursed
/// * `base_amount` - The unadjusted base amount for the trip
///
/// # Returns
///
/// `Some(delta)` for one and two day trips, `None` otherwise.
///
/// # Examples
///
/// ```
/// use reimbursement_engine::calculation::short_trip_premium;
/// use reimbursement_engine::models::Trip;
///
/// assert_eq!(short_trip_premium(&Trip::new(1, 0.0, 0.0), 100.0), Some(8.0));
/// assert_eq!(short_trip_premium(&Trip::new(3, 0.0, 0.0), 100.0), None);
/// ```
pub fn short_trip_premium(trip: &Trip, base_amount: f64) -> Option<f64> {
    match trip.days {
        1 => Some(base_amount * ONE_DAY_PREMIUM),
        2 => Some(base_amount * TWO_DAY_PREMIUM),
        _ => None,
    }
}
