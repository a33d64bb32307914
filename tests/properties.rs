//! Property tests for the reimbursement formula.

use proptest::prelude::*;

use reimbursement_engine::calculation::{
    RULES, calculate_base_amount, calculate_reimbursement, calculate_with_audit,
};
use reimbursement_engine::models::Trip;

fn trip_strategy() -> impl Strategy<Value = (i64, f64, f64)> {
    (0i64..=30, 0u32..=5000, 0.0f64..5000.0)
        .prop_map(|(days, miles, receipts)| (days, f64::from(miles), receipts))
}

proptest! {
    #[test]
    fn amount_is_never_negative((days, miles, receipts) in trip_strategy()) {
        prop_assert!(calculate_reimbursement(days, miles, receipts) >= 0.0);
    }

    #[test]
    fn amount_is_deterministic((days, miles, receipts) in trip_strategy()) {
        let first = calculate_reimbursement(days, miles, receipts);
        let second = calculate_reimbursement(days, miles, receipts);
        prop_assert_eq!(first.to_bits(), second.to_bits());
    }

    #[test]
    fn negative_inputs_are_floored(
        days in -30i64..=30,
        miles in -5000.0f64..5000.0,
        receipts in -5000.0f64..5000.0,
    ) {
        prop_assert!(calculate_reimbursement(days, miles, receipts) >= 0.0);
    }

    #[test]
    fn audited_amount_matches_formula((days, miles, receipts) in trip_strategy()) {
        let result = calculate_with_audit(&Trip::new(days, miles, receipts)).unwrap();
        let bare = calculate_reimbursement(days, miles, receipts);
        prop_assert_eq!(result.totals.amount.to_bits(), bare.to_bits());
    }

    #[test]
    fn rules_only_see_the_unadjusted_base((days, miles, receipts) in trip_strategy()) {
        let trip = Trip::new(days, miles, receipts);
        let base = calculate_base_amount(&trip);
        let result = calculate_with_audit(&trip).unwrap();

        // Every recorded delta is what the rule yields in isolation
        for adjustment in &result.adjustments {
            let rule = RULES.iter().find(|r| r.id == adjustment.rule_id).unwrap();
            prop_assert_eq!(rule.apply(&trip, base), Some(adjustment.amount));
        }
    }
}
