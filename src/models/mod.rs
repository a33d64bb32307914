//! Core data models for the Reimbursement Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod calculation_result;
mod trip;

pub use calculation_result::{
    Adjustment, AuditStep, AuditTrace, AuditWarning, ReimbursementResult, ReimbursementTotals,
};
pub use trip::Trip;
