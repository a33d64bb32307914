//! Travel Reimbursement Engine
//!
//! This crate calculates travel expense reimbursements from trip duration,
//! miles traveled and submitted receipts, using a fixed set of business
//! rules layered over a linear base formula.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
