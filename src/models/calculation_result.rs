//! Calculation result models for the Reimbursement Engine.
//!
//! This module contains the [`ReimbursementResult`] type and its associated
//! structures that capture all outputs from a reimbursement calculation,
//! including triggered adjustments, totals, and audit traces.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::Trip;

/// A signed delta contributed by a single rule that fired.
///
/// # Example
///
/// ```
/// use reimbursement_engine::models::Adjustment;
///
/// let adjustment = Adjustment {
///     rule_id: "short_trip_premium".to_string(),
///     rule_name: "Short Trip Premium".to_string(),
///     amount: 5.28,
/// };
/// assert!(adjustment.amount > 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Adjustment {
    /// The unique identifier of the rule that produced this adjustment.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The signed amount added to the base amount.
    pub amount: f64,
}

/// Aggregated totals for a reimbursement calculation.
///
/// `amount` carries full floating-point precision; `reimbursement` is the
/// same value rounded to cents for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReimbursementTotals {
    /// The linear baseline before any rule adjustment.
    pub base_amount: f64,
    /// The sum of all rule adjustments.
    pub adjustments_total: f64,
    /// The final amount after the zero floor, at full precision.
    pub amount: f64,
    /// The final amount rounded to two decimal places.
    pub reimbursement: Decimal,
}

/// A single step in the audit trace recording a calculation decision.
///
/// Each step captures the input, output, and reasoning for a rule evaluation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was evaluated.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A warning generated during calculation.
///
/// Warnings flag unusual inputs or outcomes that don't prevent calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The complete audit trace for a calculation.
///
/// # Example
///
/// ```
/// use reimbursement_engine::models::AuditTrace;
///
/// let trace = AuditTrace {
///     steps: vec![],
///     warnings: vec![],
///     duration_us: 12,
/// };
/// assert!(trace.steps.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditTrace {
    /// The sequence of calculation steps.
    pub steps: Vec<AuditStep>,
    /// Any warnings generated during calculation.
    pub warnings: Vec<AuditWarning>,
    /// The total calculation duration in microseconds.
    pub duration_us: u64,
}

impl AuditTrace {
    /// Returns true if a warning with the given code was raised.
    pub fn has_warning(&self, code: &str) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }
}

/// The complete result of a reimbursement calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReimbursementResult {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The trip the calculation is for.
    pub trip: Trip,
    /// Adjustments from every rule that fired, in evaluation order.
    pub adjustments: Vec<Adjustment>,
    /// Aggregated totals for the calculation.
    pub totals: ReimbursementTotals,
    /// Complete audit trace of calculation decisions.
    pub audit_trace: AuditTrace,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_sample_result() -> ReimbursementResult {
        ReimbursementResult {
            calculation_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            engine_version: "0.1.0".to_string(),
            trip: Trip::new(1, 0.0, 0.0),
            adjustments: vec![Adjustment {
                rule_id: "short_trip_premium".to_string(),
                rule_name: "Short Trip Premium".to_string(),
                amount: 5.28,
            }],
            totals: ReimbursementTotals {
                base_amount: 66.0,
                adjustments_total: 5.28,
                amount: 71.28,
                reimbursement: dec("71.28"),
            },
            audit_trace: AuditTrace {
                steps: vec![],
                warnings: vec![AuditWarning {
                    code: "AMOUNT_CLAMPED".to_string(),
                    message: "clamped".to_string(),
                    severity: "medium".to_string(),
                }],
                duration_us: 3,
            },
        }
    }

    #[test]
    fn test_reimbursement_serializes_as_string() {
        let result = create_sample_result();
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["totals"]["reimbursement"], "71.28");
        assert_eq!(json["totals"]["base_amount"], 66.0);
        assert_eq!(json["adjustments"][0]["rule_id"], "short_trip_premium");
    }

    #[test]
    fn test_result_round_trips_through_json() {
        let result = create_sample_result();
        let json = serde_json::to_string(&result).unwrap();
        let parsed: ReimbursementResult = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed.calculation_id, result.calculation_id);
        assert_eq!(parsed.totals.reimbursement, dec("71.28"));
        assert_eq!(parsed.trip, result.trip);
    }

    #[test]
    fn test_has_warning() {
        let result = create_sample_result();
        assert!(result.audit_trace.has_warning("AMOUNT_CLAMPED"));
        assert!(!result.audit_trace.has_warning("ZERO_DAY_TRIP"));
    }
}
