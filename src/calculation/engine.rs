//! Reimbursement calculation engine.
//!
//! This module folds the rule table over a trip. [`calculate_reimbursement`]
//! is the bare formula; [`calculate_with_audit`] runs the same fold and
//! records every decision it makes.

use std::time::Instant;

use chrono::Utc;
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    Adjustment, AuditStep, AuditTrace, AuditWarning, ReimbursementResult, ReimbursementTotals,
    Trip,
};

use super::base_amount::calculate_base_amount;
use super::rules::RULES;

/// Warning raised when the trip has no positive day count.
pub const WARNING_ZERO_DAY_TRIP: &str = "ZERO_DAY_TRIP";

/// Warning raised when any input is negative.
pub const WARNING_NEGATIVE_INPUT: &str = "NEGATIVE_INPUT";

/// Warning raised when the final amount was floored at zero.
pub const WARNING_AMOUNT_CLAMPED: &str = "AMOUNT_CLAMPED";

/// Calculates the reimbursement for a trip.
///
/// Starts from the base amount, adds the delta of every rule that fires
/// (each measured against the unadjusted base amount) and floors the result
/// at zero. Trips with no positive day count skip the per-day rules instead
/// of dividing by zero. Non-finite inputs propagate through the arithmetic.
///
/// # Arguments
///
/// * `days` - Trip duration in days
/// * `miles` - Total miles traveled
/// * `receipts` - Total amount of receipts submitted
///
/// # Returns
///
/// The reimbursement at full floating-point precision. Rounding for display
/// is left to the caller.
///
/// # Examples
///
/// ```
/// use reimbursement_engine::calculation::calculate_reimbursement;
///
/// let amount = calculate_reimbursement(1, 0.0, 0.0);
/// assert!((amount - 71.28).abs() < 1e-9);
///
/// let amount = calculate_reimbursement(1, 0.0, 2000.0);
/// assert!((amount - 944.68).abs() < 1e-9);
/// ```
pub fn calculate_reimbursement(days: i64, miles: f64, receipts: f64) -> f64 {
    let trip = Trip::new(days, miles, receipts);
    let base_amount = calculate_base_amount(&trip);

    let adjustments = RULES
        .iter()
        .filter_map(|rule| rule.apply(&trip, base_amount))
        .fold(0.0, |total, delta| total + delta);

    floor_at_zero(base_amount + adjustments)
}

/// Calculates the reimbursement for a trip and records a full audit trace.
///
/// The resulting `totals.amount` is bit-identical to
/// [`calculate_reimbursement`] for the same inputs.
///
/// # Errors
///
/// Returns [`EngineError::NonFiniteAmount`] when the amount cannot be
/// represented as a currency value (NaN or infinite inputs).
///
/// # Examples
///
/// ```
/// use reimbursement_engine::calculation::calculate_with_audit;
/// use reimbursement_engine::models::Trip;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let result = calculate_with_audit(&Trip::new(5, 1000.0, 400.0)).unwrap();
/// assert_eq!(result.totals.reimbursement, Decimal::from_str("1173.40").unwrap());
/// assert_eq!(result.adjustments.len(), 4);
/// ```
pub fn calculate_with_audit(trip: &Trip) -> EngineResult<ReimbursementResult> {
    let start_time = Instant::now();
    let mut steps: Vec<AuditStep> = Vec::with_capacity(RULES.len() + 2);
    let mut warnings: Vec<AuditWarning> = Vec::new();
    let mut adjustments: Vec<Adjustment> = Vec::new();
    let mut step_number: u32 = 1;

    if trip.days <= 0 {
        warnings.push(AuditWarning {
            code: WARNING_ZERO_DAY_TRIP.to_string(),
            message: format!(
                "Trip has {} days - per-day rules were skipped",
                trip.days
            ),
            severity: "medium".to_string(),
        });
    }

    if trip.has_negative_input() {
        warnings.push(AuditWarning {
            code: WARNING_NEGATIVE_INPUT.to_string(),
            message: "One or more inputs are negative".to_string(),
            severity: "high".to_string(),
        });
    }

    let base_amount = calculate_base_amount(trip);
    steps.push(AuditStep {
        step_number,
        rule_id: "base_amount".to_string(),
        rule_name: "Base Amount".to_string(),
        input: serde_json::json!({
            "days": trip.days,
            "miles": trip.miles,
            "receipts": trip.receipts
        }),
        output: serde_json::json!({
            "base_amount": base_amount
        }),
        reasoning: format!(
            "$61 x {} days + $0.59 x {} miles + 44% x ${} receipts + $5 = ${}",
            trip.days, trip.miles, trip.receipts, base_amount
        ),
    });
    step_number += 1;

    let mut adjustments_total = 0.0;
    for rule in RULES {
        let delta = rule.apply(trip, base_amount);

        let reasoning = match delta {
            Some(delta) => format!("{} - applied {:+}", rule.description, delta),
            None => format!("{} - not applicable", rule.description),
        };

        steps.push(AuditStep {
            step_number,
            rule_id: rule.id.to_string(),
            rule_name: rule.name.to_string(),
            input: serde_json::json!({
                "base_amount": base_amount,
                "miles_per_day": trip.miles_per_day(),
                "receipts_per_day": trip.receipts_per_day()
            }),
            output: serde_json::json!({
                "applied": delta.is_some(),
                "delta": delta.unwrap_or(0.0)
            }),
            reasoning,
        });
        step_number += 1;

        if let Some(delta) = delta {
            adjustments_total += delta;
            adjustments.push(Adjustment {
                rule_id: rule.id.to_string(),
                rule_name: rule.name.to_string(),
                amount: delta,
            });
        }
    }

    let unclamped = base_amount + adjustments_total;
    let amount = floor_at_zero(unclamped);
    let clamped = unclamped < 0.0;

    if clamped {
        warnings.push(AuditWarning {
            code: WARNING_AMOUNT_CLAMPED.to_string(),
            message: format!("Calculated amount {} was below zero and floored", unclamped),
            severity: "medium".to_string(),
        });
    }

    steps.push(AuditStep {
        step_number,
        rule_id: "finalize".to_string(),
        rule_name: "Finalize".to_string(),
        input: serde_json::json!({
            "base_amount": base_amount,
            "adjustments_total": adjustments_total
        }),
        output: serde_json::json!({
            "unclamped": unclamped,
            "amount": amount,
            "clamped": clamped
        }),
        reasoning: if clamped {
            format!("${} + {} is negative - floored at $0", base_amount, adjustments_total)
        } else {
            format!("${} + {} = ${}", base_amount, adjustments_total, amount)
        },
    });

    let reimbursement = to_currency(amount)?;
    let duration_us = start_time.elapsed().as_micros() as u64;

    debug!(
        days = trip.days,
        miles = trip.miles,
        receipts = trip.receipts,
        adjustments = adjustments.len(),
        reimbursement = %reimbursement,
        "Reimbursement calculated"
    );

    Ok(ReimbursementResult {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        trip: *trip,
        adjustments,
        totals: ReimbursementTotals {
            base_amount,
            adjustments_total,
            amount,
            reimbursement,
        },
        audit_trace: AuditTrace {
            steps,
            warnings,
            duration_us,
        },
    })
}

/// Rounds a full-precision amount to cents.
///
/// # Errors
///
/// Returns [`EngineError::NonFiniteAmount`] for NaN, infinite, or
/// out-of-range amounts.
pub fn to_currency(amount: f64) -> EngineResult<Decimal> {
    Decimal::from_f64_retain(amount)
        .map(|value| value.round_dp(2))
        .ok_or(EngineError::NonFiniteAmount { amount })
}

// NaN compares false and passes through unchanged.
fn floor_at_zero(amount: f64) -> f64 {
    if amount < 0.0 { 0.0 } else { amount }
}
