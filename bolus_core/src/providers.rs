//! Boundary collaborator traits and file-backed implementations.
//!
//! The dosing engine consumes three external collaborators:
//! - glucose telemetry (a CGM service)
//! - a nutrition text generator
//! - a tips generator
//!
//! All three are modeled as synchronous traits so the engine can be wired
//! with network clients, file-backed exports, or test stubs. The file-backed
//! implementations here read a CGM export (JSON) and pre-generated text
//! files; they are what the CLI ships with.

use crate::{Error, GlucoseReading, Result};
use chrono::{Duration, Utc};
use std::path::{Path, PathBuf};

/// Source of blood glucose readings
pub trait GlucoseTelemetry {
    /// Fetch readings within the last `window_minutes`, most-recent-last
    fn fetch_readings(&self, window_minutes: u32) -> Result<Vec<GlucoseReading>>;

    /// Fetch the most recent reading, if any
    fn fetch_latest(&self) -> Result<Option<GlucoseReading>> {
        Ok(self.fetch_readings(5)?.pop())
    }
}

/// Generates nutrition-facts text for a meal description
///
/// Output is untrusted free-form text; the extractor must not assume it is
/// well-formed.
pub trait NutritionTextGenerator {
    fn describe(&self, meal_description: &str) -> Result<String>;
}

/// Generates advisory tips text for a meal description
///
/// Best-effort: callers treat failure as non-fatal.
pub trait TipsGenerator {
    fn suggest(&self, meal_description: &str) -> Result<String>;
}

// ============================================================================
// File-backed implementations
// ============================================================================

/// Telemetry backed by a JSON export of readings
///
/// The file holds an array of `{ "value": <mg/dL>, "timestamp": <RFC3339> }`
/// objects in any order. A missing or malformed file surfaces as
/// `TelemetryUnavailable`, never as a silent empty series.
pub struct FileTelemetry {
    path: PathBuf,
}

impl FileTelemetry {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl GlucoseTelemetry for FileTelemetry {
    fn fetch_readings(&self, window_minutes: u32) -> Result<Vec<GlucoseReading>> {
        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            Error::TelemetryUnavailable(format!(
                "cannot read readings file {:?}: {}",
                self.path, e
            ))
        })?;

        let mut readings: Vec<GlucoseReading> =
            serde_json::from_str(&contents).map_err(|e| {
                Error::TelemetryUnavailable(format!(
                    "malformed readings file {:?}: {}",
                    self.path, e
                ))
            })?;

        let cutoff = Utc::now() - Duration::minutes(i64::from(window_minutes));
        readings.retain(|r| r.timestamp >= cutoff);
        readings.sort_by_key(|r| r.timestamp);

        tracing::debug!(
            "Loaded {} readings within the last {} minutes from {:?}",
            readings.len(),
            window_minutes,
            self.path
        );
        Ok(readings)
    }
}

/// Text generator backed by a pre-generated file
///
/// Stands in for a network language-model client: the file holds the
/// generator's output for the current meal.
pub struct FileTextSource {
    path: PathBuf,
}

impl FileTextSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read(&self) -> Result<String> {
        let text = std::fs::read_to_string(&self.path)?;
        Ok(text.trim().to_string())
    }
}

impl NutritionTextGenerator for FileTextSource {
    fn describe(&self, _meal_description: &str) -> Result<String> {
        self.read()
    }
}

impl TipsGenerator for FileTextSource {
    fn suggest(&self, _meal_description: &str) -> Result<String> {
        self.read()
    }
}

/// A tips source that is always unavailable
///
/// Used when no tips collaborator is configured; the engine degrades to an
/// empty tips field.
pub struct NoTips;

impl TipsGenerator for NoTips {
    fn suggest(&self, _meal_description: &str) -> Result<String> {
        Err(Error::Other("no tips generator configured".into()))
    }
}

/// Write a readings export file in the format `FileTelemetry` consumes
pub fn write_readings_file(path: &Path, readings: &[GlucoseReading]) -> Result<()> {
    let json = serde_json::to_string_pretty(readings)?;
    std::fs::write(path, json)?;
    Ok(())
}
