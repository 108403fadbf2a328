//! Core domain types for the Bolus dosing system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Glucose readings and advisory bands
//! - Nutrition facts extracted from generator text
//! - Per-request dosing parameters
//! - The final dose recommendation bundle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ============================================================================
// Glucose Types
// ============================================================================

/// A single blood glucose reading in mg/dL
///
/// Produced by the telemetry provider. `value` is always a positive
/// integer in a valid reading.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GlucoseReading {
    pub value: u32,
    pub timestamp: DateTime<Utc>,
}

/// Advisory band for a glucose reading
///
/// Five mutually exclusive categories; the exact boundaries encode a
/// clinical threshold convention and must not be adjusted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GlucoseBand {
    /// value > 250 mg/dL
    VeryHigh,
    /// 200 < value <= 250 mg/dL
    High,
    /// 140 < value <= 200 mg/dL
    SlightlyHigh,
    /// 90 <= value <= 140 mg/dL
    InRange,
    /// value < 90 mg/dL
    Low,
}

// ============================================================================
// Nutrition Types
// ============================================================================

/// Nutrition facts for one meal
///
/// Constructed only by the extractor, and only when all seven fields were
/// found in the source text. Nutrients are grams, calories kcal, sodium mg,
/// per the upstream prompt contract.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq)]
pub struct NutritionFacts {
    pub carbohydrates_g: f64,
    pub protein_g: f64,
    pub fat_g: f64,
    pub calories_kcal: f64,
    pub sodium_mg: f64,
    pub sugar_g: f64,
    pub fiber_g: f64,
}

// ============================================================================
// Dosing Parameter Types
// ============================================================================

/// Expected physical activity level around the meal
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    Low,
    Moderate,
    High,
}

impl ActivityLevel {
    /// Multiplier applied to the carb-coverage portion of the dose.
    ///
    /// Higher activity reduces the carb dose. These values are fixed.
    pub fn factor(self) -> f64 {
        match self {
            ActivityLevel::Low => 1.2,
            ActivityLevel::Moderate => 1.0,
            ActivityLevel::High => 0.8,
        }
    }

    /// Parse an activity level string, case-insensitively
    pub fn from_str_lossy(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "low" => Some(ActivityLevel::Low),
            "moderate" => Some(ActivityLevel::Moderate),
            "high" => Some(ActivityLevel::High),
            _ => None,
        }
    }
}

/// Insulin formulation, used for injection lead time lookup
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum InsulinType {
    Novolog,
    Fiasp,
    Humalog,
    Regular,
    Unknown,
}

impl InsulinType {
    /// Parse an insulin type string, mapping anything unrecognized to Unknown
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "novolog" => InsulinType::Novolog,
            "fiasp" => InsulinType::Fiasp,
            "humalog" => InsulinType::Humalog,
            "regular" => InsulinType::Regular,
            _ => InsulinType::Unknown,
        }
    }
}

/// User-supplied dosing parameters for one request
///
/// Scoped to a single request; never persisted.
#[derive(Clone, Copy, Debug, Serialize, Deserialize)]
pub struct DosingParameters {
    /// Insulin-to-carb ratio (grams covered per unit); strictly positive
    pub insulin_carb_ratio: f64,
    /// Correction factor (mg/dL dropped per unit); strictly positive
    pub correction_factor: f64,
    pub activity_level: ActivityLevel,
    /// Target blood glucose in mg/dL
    pub target_glucose: f64,
    pub insulin_type: InsulinType,
}

// ============================================================================
// Recommendation Type
// ============================================================================

/// The terminal output of the dosing pipeline
///
/// Computed fresh per request and never mutated after construction.
#[derive(Clone, Debug, Serialize)]
pub struct DoseRecommendation {
    /// Suggested insulin dose, rounded to one decimal place
    pub units: f64,
    /// Minutes to wait between injection and eating
    pub injection_lead_minutes: u32,
    /// Advisory band for the current reading
    pub band: GlucoseBand,
    /// The fixed advisory message for the band
    pub band_advice: &'static str,
    /// Generated tips text; empty when the tips collaborator was unavailable
    pub tips: String,
    /// The glucose reading the correction term was computed from
    pub reading: GlucoseReading,
    /// The nutrition facts the carb term was computed from
    pub nutrition: NutritionFacts,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_activity_factors() {
        assert_eq!(ActivityLevel::Low.factor(), 1.2);
        assert_eq!(ActivityLevel::Moderate.factor(), 1.0);
        assert_eq!(ActivityLevel::High.factor(), 0.8);
    }

    #[test]
    fn test_activity_level_parse() {
        assert_eq!(ActivityLevel::from_str_lossy("LOW"), Some(ActivityLevel::Low));
        assert_eq!(
            ActivityLevel::from_str_lossy("moderate"),
            Some(ActivityLevel::Moderate)
        );
        assert_eq!(ActivityLevel::from_str_lossy("sedentary"), None);
    }

    #[test]
    fn test_insulin_type_parse_lossy() {
        assert_eq!(InsulinType::from_str_lossy("Fiasp"), InsulinType::Fiasp);
        assert_eq!(InsulinType::from_str_lossy("HUMALOG"), InsulinType::Humalog);
        assert_eq!(InsulinType::from_str_lossy("lantus"), InsulinType::Unknown);
    }
}
