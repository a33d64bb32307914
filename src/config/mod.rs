//! Configuration loading for the reimbursement service.
//!
//! This module loads the service settings (bind address, log filter, request
//! limits) from a YAML file. The reimbursement formula is not configurable.
//!
//! # Example
//!
//! ```no_run
//! use reimbursement_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/service.yaml").unwrap();
//! println!("Max batch size: {}", loader.config().limits.max_batch_size);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{LimitsConfig, LoggingConfig, ServerConfig, ServiceConfig};
