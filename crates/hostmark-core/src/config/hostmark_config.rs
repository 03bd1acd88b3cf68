//! Top-level hostmark configuration with 4-layer resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{AnnotationConfig, StorageConfig};
use crate::errors::ConfigError;
use crate::types::Category;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`HOSTMARK_*`)
/// 3. Project config (`hostmark.toml` in project root)
/// 4. User config (`~/.hostmark/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct HostmarkConfig {
    pub annotation: AnnotationConfig,
    pub storage: StorageConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub category_attribute: Option<String>,
    pub mark_attribute: Option<String>,
    pub transaction_name: Option<String>,
}

impl HostmarkConfig {
    /// Load configuration with 4-layer resolution rooted at `root`.
    pub fn load(root: &Path, cli_overrides: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        tracing::warn!(error = %e, "ignoring unreadable user config");
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join("hostmark.toml");
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): CLI flags
        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &HostmarkConfig) -> Result<(), ConfigError> {
        let annotation = &config.annotation;
        for (field, value) in [
            ("annotation.category_attribute", &annotation.category_attribute),
            ("annotation.mark_attribute", &annotation.mark_attribute),
            ("annotation.transaction_name", &annotation.transaction_name),
        ] {
            if matches!(value, Some(v) if v.trim().is_empty()) {
                return Err(ConfigError::ValidationFailed {
                    field: field.to_string(),
                    message: "must not be empty".to_string(),
                });
            }
        }

        if annotation.effective_category_attribute() == annotation.effective_mark_attribute() {
            return Err(ConfigError::ValidationFailed {
                field: "annotation.mark_attribute".to_string(),
                message: "must differ from annotation.category_attribute".to_string(),
            });
        }

        for (name, label) in &annotation.category_labels {
            if let Err(e) = name.parse::<Category>() {
                return Err(ConfigError::InvalidValue {
                    field: format!("annotation.category_labels.{name}"),
                    message: e.to_string(),
                });
            }
            if label.trim().is_empty() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("annotation.category_labels.{name}"),
                    message: "label must not be empty".to_string(),
                });
            }
        }

        if config.storage.busy_timeout_ms == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "storage.busy_timeout_ms".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| h.join(".hostmark").join("config.toml"))
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored.
    fn merge_toml_file(config: &mut HostmarkConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: HostmarkConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`; `other` wins wherever it sets a value.
    /// Label overrides merge per category.
    fn merge(base: &mut HostmarkConfig, other: &HostmarkConfig) {
        if other.annotation.category_attribute.is_some() {
            base.annotation.category_attribute = other.annotation.category_attribute.clone();
        }
        if other.annotation.mark_attribute.is_some() {
            base.annotation.mark_attribute = other.annotation.mark_attribute.clone();
        }
        if other.annotation.transaction_name.is_some() {
            base.annotation.transaction_name = other.annotation.transaction_name.clone();
        }
        for (name, label) in &other.annotation.category_labels {
            base.annotation
                .category_labels
                .insert(name.clone(), label.clone());
        }

        if other.storage.busy_timeout_ms.is_some() {
            base.storage.busy_timeout_ms = other.storage.busy_timeout_ms;
        }
    }

    /// Apply environment variable overrides (`HOSTMARK_*`).
    fn apply_env_overrides(config: &mut HostmarkConfig) {
        if let Ok(val) = std::env::var("HOSTMARK_CATEGORY_ATTRIBUTE") {
            config.annotation.category_attribute = Some(val);
        }
        if let Ok(val) = std::env::var("HOSTMARK_MARK_ATTRIBUTE") {
            config.annotation.mark_attribute = Some(val);
        }
        if let Ok(val) = std::env::var("HOSTMARK_TRANSACTION_NAME") {
            config.annotation.transaction_name = Some(val);
        }
        if let Ok(val) = std::env::var("HOSTMARK_STORAGE_BUSY_TIMEOUT_MS") {
            if let Ok(v) = val.parse::<u32>() {
                config.storage.busy_timeout_ms = Some(v);
            }
        }
    }

    fn apply_cli_overrides(config: &mut HostmarkConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.category_attribute {
            config.annotation.category_attribute = Some(v.clone());
        }
        if let Some(ref v) = cli.mark_attribute {
            config.annotation.mark_attribute = Some(v.clone());
        }
        if let Some(ref v) = cli.transaction_name {
            config.annotation.transaction_name = Some(v.clone());
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
