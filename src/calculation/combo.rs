//! Combination bonus and penalty functionality.
//!
//! These rules look at the trip length together with the per-day mileage
//! and spending. A five day trip that covers ground cheaply is rewarded,
//! and a long trip with heavy daily spending is penalized.

use crate::models::Trip;

/// Trip length that qualifies for the efficient-trip bonus.
pub const EFFICIENT_TRIP_DAYS: i64 = 5;

/// Minimum miles per day for the efficient-trip bonus (inclusive).
pub const EFFICIENT_TRIP_MIN_MILES_PER_DAY: f64 = 180.0;

/// Receipts per day must stay below this for the efficient-trip bonus.
pub const EFFICIENT_TRIP_MAX_RECEIPTS_PER_DAY: f64 = 100.0;

/// Efficient-trip bonus, as a fraction of the base amount.
pub const EFFICIENT_TRIP_BONUS: f64 = 0.05;

/// Minimum trip length for the long-trip spending penalty (inclusive).
pub const LONG_TRIP_MIN_DAYS: i64 = 8;

/// Receipts per day above this trigger the long-trip spending penalty.
pub const LONG_TRIP_MAX_RECEIPTS_PER_DAY: f64 = 150.0;

/// Long-trip spending penalty, as a fraction of the base amount.
pub const LONG_TRIP_SPENDING_PENALTY: f64 = 0.05;

/// Returns the combination adjustment for a trip, if any.
///
/// The two combinations apply to disjoint trip lengths, so at most one fires.
/// Trips without a positive day count are skipped.
///
/// # Examples
///
/// ```
/// use reimbursement_engine::calculation::combo_adjustment;
/// use reimbursement_engine::models::Trip;
///
/// // 200 mpd and $80/day on a five day trip
/// assert_eq!(combo_adjustment(&Trip::new(5, 1000.0, 400.0), 100.0), Some(5.0));
/// // $250/day on an eight day trip
/// assert_eq!(combo_adjustment(&Trip::new(8, 500.0, 2000.0), 100.0), Some(-5.0));
/// ```
pub fn combo_adjustment(trip: &Trip, base_amount: f64) -> Option<f64> {
    let miles_per_day = trip.miles_per_day()?;
    let receipts_per_day = trip.receipts_per_day()?;

    if trip.days == EFFICIENT_TRIP_DAYS
        && miles_per_day >= EFFICIENT_TRIP_MIN_MILES_PER_DAY
        && receipts_per_day < EFFICIENT_TRIP_MAX_RECEIPTS_PER_DAY
    {
        Some(base_amount * EFFICIENT_TRIP_BONUS)
    } else if trip.days >= LONG_TRIP_MIN_DAYS && receipts_per_day > LONG_TRIP_MAX_RECEIPTS_PER_DAY
    {
        Some(-(base_amount * LONG_TRIP_SPENDING_PENALTY))
    } else {
        None
    }
}
