//! Error types for the bolus_core library.

use std::io;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for bolus_core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// IO error occurred
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// Configuration validation error
    #[error("Configuration error: {0}")]
    Config(String),

    /// No meal description was supplied
    #[error("No meal description supplied")]
    MissingInput,

    /// A current glucose reading could not be obtained
    #[error("Glucose telemetry unavailable: {0}")]
    TelemetryUnavailable(String),

    /// Fewer than seven nutrient fields could be parsed.
    ///
    /// Carries the first missing field name and the raw generator text so
    /// the caller can show it for manual inspection.
    #[error("Incomplete nutrition data: missing '{field}'")]
    IncompleteNutritionData { field: &'static str, raw_text: String },

    /// User-supplied dosing parameters failed validation
    #[error("Invalid dosing parameters: {0}")]
    InvalidParameters(String),

    /// Generic error
    #[error("{0}")]
    Other(String),
}
