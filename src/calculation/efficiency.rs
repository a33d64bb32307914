//! Efficiency bonus calculation functionality.
//!
//! Trips that cover a steady daily distance are rewarded. The bands are
//! mutually exclusive:
//!
//! | Miles per day      | Bonus |
//! |--------------------|-------|
//! | 150 ≤ mpd < 180    | 1.5%  |
//! | 180 ≤ mpd ≤ 220    | 4%    |
//! | 220 < mpd ≤ 280    | 1.5%  |

use crate::models::Trip;

/// Lower bound of the peak efficiency band (inclusive).
pub const PEAK_EFFICIENCY_MIN: f64 = 180.0;

/// Upper bound of the peak efficiency band (inclusive).
pub const PEAK_EFFICIENCY_MAX: f64 = 220.0;

/// Lower bound of the low shoulder band (inclusive).
pub const SHOULDER_EFFICIENCY_MIN: f64 = 150.0;

/// Upper bound of the high shoulder band (inclusive).
pub const SHOULDER_EFFICIENCY_MAX: f64 = 280.0;

/// Bonus inside the peak band, as a fraction of the base amount.
pub const PEAK_EFFICIENCY_BONUS: f64 = 0.04;

/// Bonus inside either shoulder band, as a fraction of the base amount.
pub const SHOULDER_EFFICIENCY_BONUS: f64 = 0.015;

/// Returns the efficiency bonus for a trip based on its miles per day.
///
/// Trips without a positive day count are skipped.
///
/// # Examples
///
/// ```
/// use reimbursement_engine::calculation::efficiency_bonus;
/// use reimbursement_engine::models::Trip;
///
/// assert_eq!(efficiency_bonus(&Trip::new(5, 1000.0, 0.0), 100.0), Some(4.0));
/// assert_eq!(efficiency_bonus(&Trip::new(0, 1000.0, 0.0), 100.0), None);
/// ```
pub fn efficiency_bonus(trip: &Trip, base_amount: f64) -> Option<f64> {
    let miles_per_day = trip.miles_per_day()?;

    if (PEAK_EFFICIENCY_MIN..=PEAK_EFFICIENCY_MAX).contains(&miles_per_day) {
        Some(base_amount * PEAK_EFFICIENCY_BONUS)
    } else if (SHOULDER_EFFICIENCY_MIN..PEAK_EFFICIENCY_MIN).contains(&miles_per_day) {
        Some(base_amount * SHOULDER_EFFICIENCY_BONUS)
    } else if miles_per_day > PEAK_EFFICIENCY_MAX && miles_per_day <= SHOULDER_EFFICIENCY_MAX {
        Some(base_amount * SHOULDER_EFFICIENCY_BONUS)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bonus_at(miles_per_day: f64) -> Option<f64> {
        // One day trip so miles equals miles per day
        efficiency_bonus(&Trip::new(1, miles_per_day, 0.0), 1000.0)
    }

    #[test]
    fn test_peak_band_is_inclusive_on_both_ends() {
        assert_eq!(bonus_at(180.0), Some(40.0));
        assert_eq!(bonus_at(200.0), Some(40.0));
        assert_eq!(bonus_at(220.0), Some(40.0));
    }

    #[test]
    fn test_low_shoulder_band() {
        assert_eq!(bonus_at(150.0), Some(15.0));
        assert_eq!(bonus_at(179.99), Some(15.0));
    }

    #[test]
    fn test_high_shoulder_band() {
        assert_eq!(bonus_at(220.01), Some(15.0));
        assert_eq!(bonus_at(280.0), Some(15.0));
    }

    #[test]
    fn test_outside_all_bands() {
        assert_eq!(bonus_at(0.0), None);
        assert_eq!(bonus_at(149.99), None);
        assert_eq!(bonus_at(280.01), None);
        assert_eq!(bonus_at(1000.0), None);
    }

    #[test]
    fn test_ratio_uses_days() {
        // 600 miles over 3 days = 200 mpd
        assert_eq!(efficiency_bonus(&Trip::new(3, 600.0, 0.0), 1000.0), Some(40.0));
        // 600 miles over 4 days = 150 mpd
        assert_eq!(efficiency_bonus(&Trip::new(4, 600.0, 0.0), 1000.0), Some(15.0));
    }

    #[test]
    fn test_zero_day_trip_is_skipped() {
        assert_eq!(efficiency_bonus(&Trip::new(0, 200.0, 0.0), 1000.0), None);
    }
}
