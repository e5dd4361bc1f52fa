//! Configuration management for the PR label check CLI.
//!
//! The configuration is an optional TOML file that tunes how the check runs. The
//! label taxonomy itself is fixed and cannot be configured.
//!
//! Values are resolved with the following precedence: command-line flags, then
//! the configuration file, then built-in defaults.

use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use pr_label_check_core::{check::DEFAULT_PROPAGATION_DELAY, CheckOptions};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::Error;

/// Configuration file picked up from the working directory when no path is given.
pub const DEFAULT_CONFIG_PATH: &str = ".github/pr-label-check.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the PR label check CLI.
///
/// # Example TOML Configuration
///
/// ```toml
/// [labeling]
/// auto_label = true
/// propagation_delay_ms = 2000
/// ```
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Settings for the auto-label step
    #[serde(default)]
    pub labeling: LabelingConfig,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist, cannot be read, or does
    /// not match the configuration schema.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use std::path::Path;
    /// use pr_label_check_cli::config::AppConfig;
    ///
    /// let config_path = Path::new(".github/pr-label-check.toml");
    /// match AppConfig::load(config_path) {
    ///     Ok(config) => println!("Auto-label: {}", config.labeling.auto_label),
    ///     Err(e) => eprintln!("Failed to load config: {}", e),
    /// }
    /// ```
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Loads the configuration for a run.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is used
    /// if present in the working directory, and the defaults otherwise.
    pub fn resolve(config_path: Option<&Path>) -> Result<Self, Error> {
        let base_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::resolve_in(config_path, &base_dir)
    }

    /// Same as [`AppConfig::resolve`], looking for [`DEFAULT_CONFIG_PATH`]
    /// under `base_dir` instead of the working directory.
    pub fn resolve_in(config_path: Option<&Path>, base_dir: &Path) -> Result<Self, Error> {
        match config_path {
            Some(path) => Self::load(path),
            None => {
                let default_path = default_config_path(base_dir);
                if default_path.exists() {
                    Self::load(&default_path)
                } else {
                    debug!(
                        "No configuration file at {:?}, using defaults",
                        default_path
                    );
                    Ok(Self::default())
                }
            }
        }
    }

    /// Builds the check options, letting command-line values override the file.
    pub fn check_options(
        &self,
        disable_auto_label: bool,
        propagation_delay_ms: Option<u64>,
    ) -> CheckOptions {
        CheckOptions {
            auto_label: self.labeling.auto_label && !disable_auto_label,
            propagation_delay: Duration::from_millis(
                propagation_delay_ms.unwrap_or(self.labeling.propagation_delay_ms),
            ),
        }
    }
}

/// Settings for the auto-label step.
#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LabelingConfig {
    /// Apply a primary label inferred from a semantic commit prefix when none is set.
    #[serde(default = "LabelingConfig::default_auto_label")]
    pub auto_label: bool,

    /// Milliseconds to wait after adding a label before reading the labels again.
    #[serde(default = "LabelingConfig::default_propagation_delay_ms")]
    pub propagation_delay_ms: u64,
}

impl LabelingConfig {
    fn default_auto_label() -> bool {
        true
    }

    fn default_propagation_delay_ms() -> u64 {
        DEFAULT_PROPAGATION_DELAY.as_millis() as u64
    }
}

impl Default for LabelingConfig {
    fn default() -> Self {
        Self {
            auto_label: LabelingConfig::default_auto_label(),
            propagation_delay_ms: LabelingConfig::default_propagation_delay_ms(),
        }
    }
}

fn default_config_path(base_dir: &Path) -> PathBuf {
    base_dir.join(DEFAULT_CONFIG_PATH)
}
