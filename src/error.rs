//! Error types for the Reimbursement Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! The reimbursement formula itself never fails; errors come from loading
//! service configuration, enforcing API limits, and converting amounts to
//! currency values.

use thiserror::Error;

/// The main error type for the Reimbursement Engine.
///
/// # Example
///
/// ```
/// use reimbursement_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/service.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/service.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// A configuration value was out of range.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A batch request contained more trips than allowed.
    #[error("Batch of {size} trips exceeds the maximum of {max}")]
    BatchTooLarge {
        /// The number of trips submitted.
        size: usize,
        /// The configured maximum.
        max: usize,
    },

    /// A calculated amount could not be represented as a currency value.
    #[error("Calculated amount {amount} is not a finite currency value")]
    NonFiniteAmount {
        /// The amount produced by the formula.
        amount: f64,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
