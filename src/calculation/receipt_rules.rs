//! Receipt-based adjustment functionality.
//!
//! Three independent rules look at the receipts submitted for a trip:
//! a sweet spot bonus, a penalty for multi-day trips with almost no
//! receipts, and a cap that claws back part of very large receipt totals.

use crate::models::Trip;

use super::base_amount::RECEIPT_RATE;

/// Lower bound of the receipt sweet spot (inclusive).
pub const RECEIPT_SWEET_SPOT_MIN: f64 = 600.0;

/// Upper bound of the receipt sweet spot (inclusive).
pub const RECEIPT_SWEET_SPOT_MAX: f64 = 800.0;

/// Bonus inside the receipt sweet spot, as a fraction of the base amount.
pub const RECEIPT_SWEET_SPOT_BONUS: f64 = 0.03;

/// Receipt totals below this on a multi-day trip are penalized.
pub const LOW_RECEIPT_THRESHOLD: f64 = 50.0;

/// Low receipt penalty, as a fraction of the base amount.
pub const LOW_RECEIPT_PENALTY: f64 = 0.02;

/// Receipt totals above this have part of the excess clawed back.
pub const HIGH_RECEIPT_THRESHOLD: f64 = 1500.0;

/// Share of the receipt contribution above the threshold that is clawed back.
pub const HIGH_RECEIPT_REDUCTION: f64 = 0.35;

/// Returns the receipt sweet spot bonus when receipts fall in `[600, 800]`.
///
/// # Examples
///
/// ```
/// use reimbursement_engine::calculation::receipt_sweet_spot_bonus;
/// use reimbursement_engine::models::Trip;
///
/// assert!(receipt_sweet_spot_bonus(&Trip::new(4, 400.0, 700.0), 793.0).is_some());
/// assert!(receipt_sweet_spot_bonus(&Trip::new(4, 400.0, 900.0), 881.0).is_none());
/// ```
pub fn receipt_sweet_spot_bonus(trip: &Trip, base_amount: f64) -> Option<f64> {
    if (RECEIPT_SWEET_SPOT_MIN..=RECEIPT_SWEET_SPOT_MAX).contains(&trip.receipts) {
        Some(base_amount * RECEIPT_SWEET_SPOT_BONUS)
    } else {
        None
    }
}

/// Returns the low receipt penalty for multi-day trips with receipts under $50.
///
/// Single day trips are never penalized.
pub fn low_receipt_penalty(trip: &Trip, base_amount: f64) -> Option<f64> {
    if trip.days > 1 && trip.receipts < LOW_RECEIPT_THRESHOLD {
        Some(-(base_amount * LOW_RECEIPT_PENALTY))
    } else {
        None
    }
}

/// Returns the (negative) high receipt cap adjustment.
///
/// For receipts above $1500, 35% of the receipt contribution on the excess
/// is removed. This is a direct amount, not a share of the base amount.
///
/// # Examples
///
/// ```
/// use reimbursement_engine::calculation::high_receipt_cap;
/// use reimbursement_engine::models::Trip;
///
/// // 500 excess * 0.44 * 0.35 = 77
/// let delta = high_receipt_cap(&Trip::new(1, 0.0, 2000.0), 946.0).unwrap();
/// assert!((delta + 77.0).abs() < 1e-9);
/// ```
pub fn high_receipt_cap(trip: &Trip, _base_amount: f64) -> Option<f64> {
    if trip.receipts > HIGH_RECEIPT_THRESHOLD {
        let excess = trip.receipts - HIGH_RECEIPT_THRESHOLD;
        Some(-(excess * RECEIPT_RATE * HIGH_RECEIPT_REDUCTION))
    } else {
        None
    }
}
