//! The ordered reimbursement rule table.
//!
//! Every rule is a pure function of the trip and the unadjusted base amount.
//! Rules never see each other's output, so percentage rules do not compound.
//! The table order is the order deltas are summed in.

use crate::models::Trip;

use super::combo::combo_adjustment;
use super::efficiency::efficiency_bonus;
use super::mileage_tier::mileage_tier_reduction;
use super::receipt_rules::{high_receipt_cap, low_receipt_penalty, receipt_sweet_spot_bonus};
use super::short_trip::short_trip_premium;
use super::trip_length::mid_length_bonus;

/// A single reimbursement rule.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    /// Stable identifier used in adjustments and audit steps.
    pub id: &'static str,
    /// Human-readable name.
    pub name: &'static str,
    /// What the rule rewards or penalizes.
    pub description: &'static str,
    /// Returns `Some(delta)` when the rule fires.
    pub evaluate: fn(&Trip, f64) -> Option<f64>,
}

impl Rule {
    /// Evaluates this rule against a trip and its unadjusted base amount.
    pub fn apply(&self, trip: &Trip, base_amount: f64) -> Option<f64> {
        (self.evaluate)(trip, base_amount)
    }
}

/// All reimbursement rules in evaluation order.
pub const RULES: &[Rule] = &[
    Rule {
        id: "short_trip_premium",
        name: "Short Trip Premium",
        description: "+8% for 1 day trips, +4% for 2 day trips",
        evaluate: short_trip_premium,
    },
    Rule {
        id: "mid_length_bonus",
        name: "Mid-Length Trip Bonus",
        description: "+4% for 5 day trips, +2% for 6 day trips",
        evaluate: mid_length_bonus,
    },
    Rule {
        id: "efficiency_bonus",
        name: "Efficiency Bonus",
        description: "+4% at 180-220 miles/day, +1.5% at 150-180 or 220-280 miles/day",
        evaluate: efficiency_bonus,
    },
    Rule {
        id: "mileage_tier",
        name: "Tiered Mileage",
        description: "8% lower mileage rate past the first 100 miles",
        evaluate: mileage_tier_reduction,
    },
    Rule {
        id: "receipt_sweet_spot",
        name: "Receipt Sweet Spot",
        description: "+3% for receipts between $600 and $800",
        evaluate: receipt_sweet_spot_bonus,
    },
    Rule {
        id: "low_receipt_penalty",
        name: "Low Receipt Penalty",
        description: "-2% for multi-day trips with receipts under $50",
        evaluate: low_receipt_penalty,
    },
    Rule {
        id: "high_receipt_cap",
        name: "High Receipt Cap",
        description: "35% of the receipt contribution above $1500 is removed",
        evaluate: high_receipt_cap,
    },
    Rule {
        id: "combo_adjustment",
        name: "Trip Combination Adjustment",
        description: "+5% for 5 day trips at 180+ miles/day under $100/day, \
                      -5% for 8+ day trips over $150/day",
        evaluate: combo_adjustment,
    },
];

/// Looks up a rule by its identifier.
pub fn find_rule(id: &str) -> Option<&'static Rule> {
    RULES.iter().find(|rule| rule.id == id)
}
