//! Mid-length trip bonus calculation functionality.

use crate::models::Trip;

/// Bonus for a five day trip, as a fraction of the base amount.
pub const FIVE_DAY_BONUS: f64 = 0.04;

/// Bonus for a six day trip, as a fraction of the base amount.
pub const SIX_DAY_BONUS: f64 = 0.02;

/// Returns the mid-length bonus for five and six day trips.
///
/// # Examples
///
/// ```
/// use reimbursement_engine::calculation::mid_length_bonus;
/// use reimbursement_engine::models::Trip;
///
/// assert_eq!(mid_length_bonus(&Trip::new(5, 0.0, 0.0), 100.0), Some(4.0));
/// assert_eq!(mid_length_bonus(&Trip::new(6, 0.0, 0.0), 100.0), Some(2.0));
/// assert_eq!(mid_length_bonus(&Trip::new(7, 0.0, 0.0), 100.0), None);
/// ```
pub fn mid_length_bonus(trip: &Trip, base_amount: f64) -> Option<f64> {
    match trip.days {
        5 => Some(base_amount * FIVE_DAY_BONUS),
        6 => Some(base_amount * SIX_DAY_BONUS),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_five_day_trip_bonus() {
        let delta = mid_length_bonus(&Trip::new(5, 1000.0, 400.0), 1076.0).unwrap();
        assert!((delta - 43.04).abs() < 1e-9);
    }

    #[test]
    fn test_six_day_trip_bonus() {
        let delta = mid_length_bonus(&Trip::new(6, 0.0, 0.0), 371.0).unwrap();
        assert!((delta - 7.42).abs() < 1e-9);
    }

    #[test]
    fn test_short_trips_get_no_mid_length_bonus() {
        assert_eq!(mid_length_bonus(&Trip::new(1, 0.0, 0.0), 66.0), None);
        assert_eq!(mid_length_bonus(&Trip::new(4, 0.0, 0.0), 249.0), None);
    }
}
