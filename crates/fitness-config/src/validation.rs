//! Configuration validation.
//!
//! Fails fast on values that would only blow up later at startup.

use crate::{AppConfig, DatabaseBackend};
use std::fmt;

/// Configuration validation error variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    /// Port number is invalid (must be 1-65535).
    InvalidPort { value: u16 },
    /// SQLite backend selected without a URL.
    MissingDatabaseUrl,
    /// Pool size configuration is invalid (min must be <= max, max > 0).
    InvalidPoolSize { min: u32, max: u32 },
    /// Timeout value must be positive.
    NonPositiveTimeout { name: String },
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPort { value } => {
                write!(f, "Invalid server port: {} (must be 1-65535)", value)
            }
            Self::MissingDatabaseUrl => {
                write!(f, "Database URL is required for the sqlite backend")
            }
            Self::InvalidPoolSize { min, max } => {
                write!(f, "Invalid pool size: min {} max {}", min, max)
            }
            Self::NonPositiveTimeout { name } => {
                write!(f, "Timeout {} must be greater than zero", name)
            }
        }
    }
}

impl std::error::Error for ConfigValidationError {}

/// Validates an [`AppConfig`].
pub struct ConfigValidator;

impl ConfigValidator {
    /// Returns every problem found, not just the first.
    pub fn validate(config: &AppConfig) -> Result<(), Vec<ConfigValidationError>> {
        let mut errors = Vec::new();

        if config.server.port == 0 {
            errors.push(ConfigValidationError::InvalidPort {
                value: config.server.port,
            });
        }

        let db = &config.database;
        if db.backend == DatabaseBackend::Sqlite {
            if db.url.trim().is_empty() {
                errors.push(ConfigValidationError::MissingDatabaseUrl);
            }
            if db.max_connections == 0 || db.min_connections > db.max_connections {
                errors.push(ConfigValidationError::InvalidPoolSize {
                    min: db.min_connections,
                    max: db.max_connections,
                });
            }
            if db.connect_timeout_secs == 0 {
                errors.push(ConfigValidationError::NonPositiveTimeout {
                    name: "database.connect_timeout_secs".to_string(),
                });
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DatabaseConfig;

    #[test]
    fn test_default_config_is_valid() {
        assert!(ConfigValidator::validate(&AppConfig::default()).is_ok());
    }

    #[test]
    fn test_zero_port_rejected() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors, vec![ConfigValidationError::InvalidPort { value: 0 }]);
    }

    #[test]
    fn test_sqlite_requires_url() {
        let mut config = AppConfig::default();
        config.database = DatabaseConfig {
            backend: DatabaseBackend::Sqlite,
            url: "  ".to_string(),
            ..DatabaseConfig::default()
        };
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert!(errors.contains(&ConfigValidationError::MissingDatabaseUrl));
    }

    #[test]
    fn test_memory_backend_ignores_database_settings() {
        let mut config = AppConfig::default();
        config.database.url = String::new();
        config.database.max_connections = 0;
        assert!(ConfigValidator::validate(&config).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        config.database = DatabaseConfig {
            backend: DatabaseBackend::Sqlite,
            min_connections: 4,
            max_connections: 2,
            connect_timeout_secs: 0,
            ..DatabaseConfig::default()
        };
        let errors = ConfigValidator::validate(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[1].to_string().contains("min 4 max 2"));
    }
}
