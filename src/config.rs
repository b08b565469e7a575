//! Configuration management for the contact book.
//!
//! Settings come from environment variables, optionally seeded from a `.env`
//! file, and can be overridden by command-line flags.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::path::PathBuf;

/// Default location of the saved address book.
pub const DEFAULT_DATA_FILE: &str = "addressbook.json";

/// Default log filter.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Configuration for the contact book.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Path of the JSON file the address book is loaded from and saved to
    pub data_file: PathBuf,

    /// Log level (default: "warn")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `CONTACT_BOOK_DATA_FILE`: Address book file (default: "addressbook.json")
    /// - `LOG_LEVEL`: Logging level (default: "warn")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is fine
        let _ = dotenvy::dotenv();

        let data_file = match env::var("CONTACT_BOOK_DATA_FILE") {
            Ok(path) => Self::validate_data_file("CONTACT_BOOK_DATA_FILE", path)?,
            Err(_) => PathBuf::from(DEFAULT_DATA_FILE),
        };

        let log_level = match env::var("LOG_LEVEL") {
            Ok(level) => Self::validate_log_level("LOG_LEVEL", level)?,
            Err(_) => DEFAULT_LOG_LEVEL.to_string(),
        };

        Ok(Config {
            data_file,
            log_level,
        })
    }

    /// Apply command-line overrides on top of this configuration.
    pub fn with_overrides(
        mut self,
        data_file: Option<String>,
        log_level: Option<String>,
    ) -> ConfigResult<Self> {
        if let Some(path) = data_file {
            self.data_file = Self::validate_data_file("--data-file", path)?;
        }
        if let Some(level) = log_level {
            self.log_level = Self::validate_log_level("--log-level", level)?;
        }
        Ok(self)
    }

    fn validate_data_file(var_name: &str, path: String) -> ConfigResult<PathBuf> {
        if path.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: "Cannot be empty".to_string(),
            });
        }
        Ok(PathBuf::from(path))
    }

    fn validate_log_level(var_name: &str, level: String) -> ConfigResult<String> {
        let normalized = level.trim().to_lowercase();
        if !LOG_LEVELS.contains(&normalized.as_str()) {
            return Err(ConfigError::InvalidValue {
                var: var_name.to_string(),
                reason: format!("Must be one of {}, got: {}", LOG_LEVELS.join("/"), level),
            });
        }
        Ok(normalized)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    // Helper to set and unset env vars for testing
    struct EnvGuard {
        vars: Vec<String>,
    }

    impl EnvGuard {
        fn new() -> Self {
            EnvGuard { vars: Vec::new() }
        }

        fn set(&mut self, key: &str, value: &str) {
            env::set_var(key, value);
            self.vars.push(key.to_string());
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            for var in &self.vars {
                env::remove_var(var);
            }
        }
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.data_file, PathBuf::from("addressbook.json"));
        assert_eq!(config.log_level, "warn");
    }

    #[test]
    #[serial]
    fn test_config_from_env_valid() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_DATA_FILE", "/tmp/contacts.json");
        guard.set("LOG_LEVEL", "DEBUG");

        let config = Config::from_env().unwrap();
        assert_eq!(config.data_file, PathBuf::from("/tmp/contacts.json"));
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_config_from_env_empty_data_file() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_DATA_FILE", "  ");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => {
                assert_eq!(var, "CONTACT_BOOK_DATA_FILE");
            }
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    #[serial]
    fn test_config_from_env_invalid_log_level() {
        let mut guard = EnvGuard::new();
        guard.set("CONTACT_BOOK_DATA_FILE", "book.json");
        guard.set("LOG_LEVEL", "loud");

        match Config::from_env() {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "LOG_LEVEL"),
            other => panic!("Expected InvalidValue error, got: {:?}", other),
        }
    }

    #[test]
    fn test_overrides() {
        let config = Config::default()
            .with_overrides(Some("other.json".to_string()), Some("info".to_string()))
            .unwrap();
        assert_eq!(config.data_file, PathBuf::from("other.json"));
        assert_eq!(config.log_level, "info");

        let unchanged = Config::default().with_overrides(None, None).unwrap();
        assert_eq!(unchanged, Config::default());
    }

    #[test]
    fn test_overrides_reject_invalid() {
        let result = Config::default().with_overrides(None, Some("verbose".to_string()));
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { ref var, .. }) if var == "--log-level"
        ));
    }
}
