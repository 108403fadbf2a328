//! Glucose band classification and advisory messages.
//!
//! Maps a single mg/dL reading to one of five ordered bands. The predicates
//! are evaluated high to low; the partition is total over all positive
//! integers with no gap and no overlap.

use crate::GlucoseBand;

/// Classify a glucose value (mg/dL) into its advisory band
pub fn classify(value: u32) -> GlucoseBand {
    if value > 250 {
        GlucoseBand::VeryHigh
    } else if value > 200 {
        GlucoseBand::High
    } else if value > 140 {
        GlucoseBand::SlightlyHigh
    } else if value >= 90 {
        GlucoseBand::InRange
    } else {
        GlucoseBand::Low
    }
}

/// The fixed advisory message for a band
///
/// Message wording is part of the external contract; do not reword.
pub fn advisory_message(band: GlucoseBand) -> &'static str {
    match band {
        GlucoseBand::VeryHigh => {
            "Your blood sugar levels are very high. Consider consulting your healthcare provider immediately."
        }
        GlucoseBand::High => {
            "Your blood sugar levels are high. Consider reducing your carb intake, increasing your physical activity, or consulting your healthcare provider."
        }
        GlucoseBand::SlightlyHigh => {
            "Your blood sugar levels are slightly high. Consider moderate physical activity and balanced meals."
        }
        GlucoseBand::InRange => {
            "Your blood sugar levels are within range. Keep up the good work! Consider eating balanced meals with greens to maintain this level."
        }
        GlucoseBand::Low => {
            "Your blood sugar levels are low. Consider consuming fast-acting carbohydrates like juice or glucose tablets and consulting your healthcare provider."
        }
    }
}
