//! Configuration file support for Bolus.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/bolus/config.toml`.
//! Recognized sections: telemetry credentials, generator endpoint and
//! credentials, and dosing-parameter bounds.

use crate::{DosingParameters, Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub telemetry: TelemetryConfig,

    #[serde(default)]
    pub generator: GeneratorConfig,

    #[serde(default)]
    pub bounds: DosingBounds,
}

/// Glucose telemetry service credentials
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct TelemetryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

/// Text generation service endpoint and credentials
///
/// Consumed by network-backed generator implementations; the file-backed
/// implementations in this crate ignore it.
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct GeneratorConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
}

/// Accepted ranges for user-supplied dosing parameters
///
/// Defaults match the input ranges of the original interface. A value
/// outside its range fails validation rather than being clamped.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DosingBounds {
    #[serde(default = "default_ratio_max")]
    pub insulin_carb_ratio_max: f64,

    #[serde(default = "default_correction_min")]
    pub correction_factor_min: f64,

    #[serde(default = "default_correction_max")]
    pub correction_factor_max: f64,

    #[serde(default = "default_target_min")]
    pub target_glucose_min: f64,

    #[serde(default = "default_target_max")]
    pub target_glucose_max: f64,
}

impl Default for DosingBounds {
    fn default() -> Self {
        Self {
            insulin_carb_ratio_max: default_ratio_max(),
            correction_factor_min: default_correction_min(),
            correction_factor_max: default_correction_max(),
            target_glucose_min: default_target_min(),
            target_glucose_max: default_target_max(),
        }
    }
}

fn default_ratio_max() -> f64 {
    20.0
}

fn default_correction_min() -> f64 {
    10.0
}

fn default_correction_max() -> f64 {
    100.0
}

fn default_target_min() -> f64 {
    70.0
}

fn default_target_max() -> f64 {
    150.0
}

impl DosingBounds {
    /// Validate user-supplied parameters against these bounds
    ///
    /// Strict positivity of the ratio and correction factor is checked
    /// first; division by zero in the dose formula is a precondition
    /// violation, not a runtime edge case.
    pub fn validate(&self, params: &DosingParameters) -> Result<()> {
        if params.insulin_carb_ratio <= 0.0 {
            return Err(Error::InvalidParameters(
                "insulin-to-carb ratio must be strictly positive".into(),
            ));
        }
        if params.correction_factor <= 0.0 {
            return Err(Error::InvalidParameters(
                "correction factor must be strictly positive".into(),
            ));
        }
        if params.target_glucose <= 0.0 {
            return Err(Error::InvalidParameters(
                "target glucose must be strictly positive".into(),
            ));
        }
        if params.insulin_carb_ratio > self.insulin_carb_ratio_max {
            return Err(Error::InvalidParameters(format!(
                "insulin-to-carb ratio {} exceeds maximum {}",
                params.insulin_carb_ratio, self.insulin_carb_ratio_max
            )));
        }
        if params.correction_factor < self.correction_factor_min
            || params.correction_factor > self.correction_factor_max
        {
            return Err(Error::InvalidParameters(format!(
                "correction factor {} outside accepted range {}..{}",
                params.correction_factor, self.correction_factor_min, self.correction_factor_max
            )));
        }
        if params.target_glucose < self.target_glucose_min
            || params.target_glucose > self.target_glucose_max
        {
            return Err(Error::InvalidParameters(format!(
                "target glucose {} outside accepted range {}..{}",
                params.target_glucose, self.target_glucose_min, self.target_glucose_max
            )));
        }
        Ok(())
    }
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> PathBuf {
        let base = dirs::config_dir().unwrap_or_else(|| {
            let home = std::env::var("HOME")
                .expect("HOME environment variable not set");
            PathBuf::from(home).join(".config")
        });
        base.join("bolus").join("config.toml")
    }
}
