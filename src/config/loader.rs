//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the service
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::ServiceConfig;

/// Loads and validates the service configuration.
///
/// # File Format
///
/// ```text
/// server:
///   host: 0.0.0.0
///   port: 8080
/// logging:
///   filter: reimbursement_engine=info
/// limits:
///   max_batch_size: 1000
/// ```
///
/// # Example
///
/// ```no_run
/// use reimbursement_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/service.yaml").unwrap();
/// println!("Binding to {}", loader.config().server.bind_address());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: ServiceConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - The file is missing
    /// - The file contains invalid YAML
    /// - A value is out of range
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content, &path_str)
    }

    /// Parses configuration from a YAML string.
    ///
    /// `source` is used in error messages only.
    pub fn from_yaml_str(content: &str, source: &str) -> EngineResult<Self> {
        let config: ServiceConfig =
            serde_yaml::from_str(content).map_err(|e| EngineError::ConfigParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        Self::validate(&config)?;

        Ok(Self { config })
    }

    /// Loads configuration from an optional path, falling back to defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> EngineResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(config: &ServiceConfig) -> EngineResult<()> {
        if config.server.host.trim().is_empty() {
            return Err(EngineError::InvalidConfig {
                field: "server.host".to_string(),
                message: "must not be empty".to_string(),
            });
        }

        if config.server.port == 0 {
            return Err(EngineError::InvalidConfig {
                field: "server.port".to_string(),
                message: "must be non-zero".to_string(),
            });
        }

        if config.limits.max_batch_size == 0 {
            return Err(EngineError::InvalidConfig {
                field: "limits.max_batch_size".to_string(),
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }

    /// Returns the underlying service configuration.
    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    /// Consumes the loader and returns the service configuration.
    pub fn into_config(self) -> ServiceConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config_path() -> &'static str {
        "./config/service.yaml"
    }

    #[test]
    fn test_load_bundled_configuration() {
        let result = ConfigLoader::load(config_path());
        assert!(result.is_ok(), "Failed to load config: {:?}", result.err());

        let loader = result.unwrap();
        assert_eq!(loader.config().server.host, "127.0.0.1");
        assert_eq!(loader.config().server.port, 8080);
        assert_eq!(loader.config().limits.max_batch_size, 1000);
    }

    #[test]
    fn test_load_missing_file_returns_error() {
        let result = ConfigLoader::load("/nonexistent/service.yaml");

        match result {
            Err(EngineError::ConfigNotFound { path }) => {
                assert!(path.contains("service.yaml"));
            }
            _ => panic!("Expected ConfigNotFound error"),
        }
    }

    #[test]
    fn test_invalid_yaml_returns_parse_error() {
        let result = ConfigLoader::from_yaml_str("server: [unclosed", "inline");

        match result {
            Err(EngineError::ConfigParseError { path, .. }) => {
                assert_eq!(path, "inline");
            }
            _ => panic!("Expected ConfigParseError error"),
        }
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let loader = ConfigLoader::from_yaml_str("server:\n  port: 9090\n", "inline").unwrap();

        assert_eq!(loader.config().server.port, 9090);
        assert_eq!(loader.config().server.host, "127.0.0.1");
        assert_eq!(loader.config().logging.filter, "reimbursement_engine=info");
        assert_eq!(loader.config().limits.max_batch_size, 1000);
    }

    #[test]
    fn test_zero_port_is_rejected() {
        let result = ConfigLoader::from_yaml_str("server:\n  port: 0\n", "inline");

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "server.port");
            }
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_zero_batch_size_is_rejected() {
        let result = ConfigLoader::from_yaml_str("limits:\n  max_batch_size: 0\n", "inline");

        match result {
            Err(EngineError::InvalidConfig { field, .. }) => {
                assert_eq!(field, "limits.max_batch_size");
            }
            _ => panic!("Expected InvalidConfig error"),
        }
    }

    #[test]
    fn test_load_or_default_without_path() {
        let loader = ConfigLoader::load_or_default(None::<&str>).unwrap();
        assert_eq!(loader.config(), &ServiceConfig::default());
    }

    #[test]
    fn test_bind_address() {
        let loader = ConfigLoader::default();
        assert_eq!(loader.config().server.bind_address(), "127.0.0.1:8080");
    }
}
