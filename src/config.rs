//! Configuration management for scriptpack
//!
//! Settings are loaded from environment variables with defaults and can be
//! overridden by command-line flags before validation.
//!
//! # Environment Variables
//!
//! - `SCRIPTPACK_OUTPUT`: Manifest path - default: "scripts.yaml" (relative to
//!   the working directory)
//! - `SCRIPTPACK_ON_DUPLICATE`: Duplicate app handling (skip|merge) - default: "skip"
//! - `SCRIPTPACK_FILENAME_RULES`: Enable filename overrides such as `on-linux`
//!   (true|false) - default: "true"
//! - `SCRIPTPACK_LOG_LEVEL`: Logging level - default: "info"
//!
//! # Example
//!
//! ```no_run
//! use scriptpack::ScriptpackConfig;
//!
//! let config = ScriptpackConfig::default();
//! config.validate().expect("Invalid configuration");
//! ```

use crate::manifest::DuplicatePolicy;
use std::collections::HashMap;
use std::env;
use std::path::PathBuf;
use thiserror::Error;

pub const DEFAULT_OUTPUT_FILE: &str = "scripts.yaml";
const DEFAULT_LOG_LEVEL: &str = "info";
const DEFAULT_FILENAME_RULES: bool = true;

/// Configuration errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Unknown duplicate policy name
    #[error("Invalid duplicate policy: {0}. Valid options: skip, merge")]
    InvalidDuplicatePolicy(String),

    /// Configuration validation failed
    #[error("Configuration validation failed: {0}")]
    ValidationFailed(String),
}

/// Runtime settings for one aggregation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptpackConfig {
    /// Where the manifest is written
    pub output_path: PathBuf,

    /// Handling of scripts whose application name was already seen
    pub duplicate_policy: DuplicatePolicy,

    /// Apply filename rules before inspecting content
    pub filename_rules: bool,

    /// Logging level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Default for ScriptpackConfig {
    /// Loads from `SCRIPTPACK_*` environment variables; unparseable values fall
    /// back to the defaults.
    fn default() -> Self {
        let output_path = env::var("SCRIPTPACK_OUTPUT")
            .ok()
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_FILE));

        let duplicate_policy = env::var("SCRIPTPACK_ON_DUPLICATE")
            .ok()
            .and_then(|v| v.parse::<DuplicatePolicy>().ok())
            .unwrap_or_default();

        let filename_rules = env::var("SCRIPTPACK_FILENAME_RULES")
            .ok()
            .and_then(|v| v.to_lowercase().parse::<bool>().ok())
            .unwrap_or(DEFAULT_FILENAME_RULES);

        let log_level = env::var("SCRIPTPACK_LOG_LEVEL")
            .unwrap_or_else(|_| DEFAULT_LOG_LEVEL.to_string())
            .to_lowercase();

        Self {
            output_path,
            duplicate_policy,
            filename_rules,
            log_level,
        }
    }
}

impl ScriptpackConfig {
    /// Validates the configuration
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::ValidationFailed` when the output path is empty or
    /// names an existing directory, or the log level is unknown.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.output_path.as_os_str().is_empty() {
            return Err(ConfigError::ValidationFailed(
                "Output path must not be empty".to_string(),
            ));
        }
        if self.output_path.is_dir() {
            return Err(ConfigError::ValidationFailed(format!(
                "Output path is a directory: {}",
                self.output_path.display()
            )));
        }

        match self.log_level.as_str() {
            "trace" | "debug" | "info" | "warn" | "error" => {}
            _ => {
                return Err(ConfigError::ValidationFailed(format!(
                    "Invalid log level: {}. Valid options: trace, debug, info, warn, error",
                    self.log_level
                )))
            }
        }

        Ok(())
    }

    /// Converts configuration to a display map for logging
    pub fn to_display_map(&self) -> HashMap<String, String> {
        let mut map = HashMap::new();

        map.insert(
            "output_path".to_string(),
            self.output_path.display().to_string(),
        );
        map.insert(
            "duplicate_policy".to_string(),
            self.duplicate_policy.to_string(),
        );
        map.insert(
            "filename_rules".to_string(),
            self.filename_rules.to_string(),
        );
        map.insert("log_level".to_string(), self.log_level.clone());

        map
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::TempDir;

    /// Helper to temporarily set environment variables for testing
    struct EnvGuard {
        key: String,
        old_value: Option<String>,
    }

    impl EnvGuard {
        fn set(key: &str, value: &str) -> Self {
            let old_value = env::var(key).ok();
            env::set_var(key, value);
            Self {
                key: key.to_string(),
                old_value,
            }
        }

        fn unset(key: &str) -> Self {
            let old_value = env::var(key).ok();
            env::remove_var(key);
            Self {
                key: key.to_string(),
                old_value,
            }
        }
    }

    impl Drop for EnvGuard {
        fn drop(&mut self) {
            match &self.old_value {
                Some(v) => env::set_var(&self.key, v),
                None => env::remove_var(&self.key),
            }
        }
    }

    #[test]
    #[serial]
    fn test_default_configuration() {
        let _guards = vec![
            EnvGuard::unset("SCRIPTPACK_OUTPUT"),
            EnvGuard::unset("SCRIPTPACK_ON_DUPLICATE"),
            EnvGuard::unset("SCRIPTPACK_FILENAME_RULES"),
            EnvGuard::unset("SCRIPTPACK_LOG_LEVEL"),
        ];

        let config = ScriptpackConfig::default();

        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Skip);
        assert!(config.filename_rules);
        assert_eq!(config.log_level, DEFAULT_LOG_LEVEL);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_environment_variable_parsing() {
        let _guards = vec![
            EnvGuard::set("SCRIPTPACK_OUTPUT", "out/apps.yaml"),
            EnvGuard::set("SCRIPTPACK_ON_DUPLICATE", "merge"),
            EnvGuard::set("SCRIPTPACK_FILENAME_RULES", "FALSE"),
            EnvGuard::set("SCRIPTPACK_LOG_LEVEL", "DEBUG"),
        ];

        let config = ScriptpackConfig::default();

        assert_eq!(config.output_path, PathBuf::from("out/apps.yaml"));
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Merge);
        assert!(!config.filename_rules);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    #[serial]
    fn test_invalid_environment_values_fall_back() {
        let _guards = vec![
            EnvGuard::set("SCRIPTPACK_OUTPUT", ""),
            EnvGuard::set("SCRIPTPACK_ON_DUPLICATE", "replace"),
            EnvGuard::set("SCRIPTPACK_FILENAME_RULES", "maybe"),
        ];

        let config = ScriptpackConfig::default();

        assert_eq!(config.output_path, PathBuf::from(DEFAULT_OUTPUT_FILE));
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Skip);
        assert!(config.filename_rules);
    }

    fn base_config() -> ScriptpackConfig {
        ScriptpackConfig {
            output_path: PathBuf::from(DEFAULT_OUTPUT_FILE),
            duplicate_policy: DuplicatePolicy::Skip,
            filename_rules: true,
            log_level: "info".to_string(),
        }
    }

    #[test]
    fn test_validate_rejects_empty_output() {
        let config = ScriptpackConfig {
            output_path: PathBuf::new(),
            ..base_config()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::ValidationFailed(_))
        ));
    }

    #[test]
    fn test_validate_rejects_directory_output() {
        let temp = TempDir::new().unwrap();
        let config = ScriptpackConfig {
            output_path: temp.path().to_path_buf(),
            ..base_config()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("is a directory"));
    }

    #[test]
    fn test_validate_rejects_unknown_log_level() {
        let config = ScriptpackConfig {
            log_level: "verbose".to_string(),
            ..base_config()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("Invalid log level"));
    }

    #[test]
    fn test_display_map() {
        let config = ScriptpackConfig {
            duplicate_policy: DuplicatePolicy::Merge,
            ..base_config()
        };

        let map = config.to_display_map();
        assert_eq!(map.get("output_path").unwrap(), "scripts.yaml");
        assert_eq!(map.get("duplicate_policy").unwrap(), "merge");
        assert_eq!(map.get("filename_rules").unwrap(), "true");
    }
}
