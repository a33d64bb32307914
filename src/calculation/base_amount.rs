//! Base amount calculation functionality.
//!
//! The base amount is the linear baseline every rule adjustment is
//! measured against.

use crate::models::Trip;

/// Flat per-day allowance.
pub const PER_DIEM_RATE: f64 = 61.0;

/// Reimbursement per mile traveled.
pub const MILEAGE_RATE: f64 = 0.59;

/// Share of submitted receipts that is reimbursed.
pub const RECEIPT_RATE: f64 = 0.44;

/// Flat amount added to every trip.
pub const FLAT_AMOUNT: f64 = 5.0;

/// Calculates the base amount for a trip before any rule adjustment.
///
/// `base = 61 × days + 0.59 × miles + 0.44 × receipts + 5`
///
/// # Examples
///
/// ```
/// use reimbursement_engine::calculation::calculate_base_amount;
/// use reimbursement_engine::models::Trip;
///
/// assert_eq!(calculate_base_amount(&Trip::new(1, 0.0, 0.0)), 66.0);
/// assert_eq!(calculate_base_amount(&Trip::new(1, 0.0, 2000.0)), 946.0);
/// ```
pub fn calculate_base_amount(trip: &Trip) -> f64 {
    PER_DIEM_RATE * trip.days as f64 + MILEAGE_RATE * trip.miles + RECEIPT_RATE * trip.receipts
        + FLAT_AMOUNT
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {}, got {}",
            expected,
            actual
        );
    }

    #[test]
    fn test_base_amount_for_one_day_no_miles_no_receipts() {
        assert_close(calculate_base_amount(&Trip::new(1, 0.0, 0.0)), 66.0);
    }

    #[test]
    fn test_base_amount_combines_all_terms() {
        // 305 + 590 + 176 + 5
        assert_close(calculate_base_amount(&Trip::new(5, 1000.0, 400.0)), 1076.0);
    }

    #[test]
    fn test_base_amount_zero_days_keeps_other_terms() {
        // 0 + 59 + 44 + 5
        assert_close(calculate_base_amount(&Trip::new(0, 100.0, 100.0)), 108.0);
    }

    #[test]
    fn test_base_amount_can_go_negative() {
        // -183 + 5
        assert_close(calculate_base_amount(&Trip::new(-3, 0.0, 0.0)), -178.0);
    }
}
