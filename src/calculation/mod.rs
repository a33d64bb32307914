//! Calculation logic for the Reimbursement Engine.
//!
//! This module contains the base amount formula, one module per
//! reimbursement rule (short trip premium, mid-length bonus, efficiency
//! bonus, tiered mileage, receipt rules and trip combinations), the ordered
//! rule table, and the engine that folds the table into a final amount.

mod base_amount;
mod combo;
mod efficiency;
mod engine;
mod mileage_tier;
mod receipt_rules;
mod rules;
mod short_trip;
mod trip_length;

pub use base_amount::{
    FLAT_AMOUNT, MILEAGE_RATE, PER_DIEM_RATE, RECEIPT_RATE, calculate_base_amount,
};
pub use combo::combo_adjustment;
pub use efficiency::efficiency_bonus;
pub use engine::{
    WARNING_AMOUNT_CLAMPED, WARNING_NEGATIVE_INPUT, WARNING_ZERO_DAY_TRIP,
    calculate_reimbursement, calculate_with_audit, to_currency,
};
pub use mileage_tier::mileage_tier_reduction;
pub use receipt_rules::{high_receipt_cap, low_receipt_penalty, receipt_sweet_spot_bonus};
pub use rules::{RULES, Rule, find_rule};
pub use short_trip::short_trip_premium;
pub use trip_length::mid_length_bonus;
