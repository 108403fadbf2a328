//! Nutrition facts extraction from generator text.
//!
//! The nutrition text generator returns free-form prose that is expected to
//! contain seven named nutrient values. Extraction is all-or-nothing: a
//! `NutritionFacts` value exists only when every field was found. Partial
//! records are never constructed, because an undercounted carbohydrate
//! value would silently produce a dangerously wrong dose.

use crate::{Error, NutritionFacts, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// The seven recognized nutrient field names, in canonical order
pub const NUTRIENT_FIELDS: [&str; 7] = [
    "carbohydrates",
    "protein",
    "fat",
    "calories",
    "sodium",
    "sugar",
    "fiber",
];

static NUTRIENT_PATTERNS: Lazy<[Regex; 7]> = Lazy::new(|| {
    NUTRIENT_FIELDS.map(|name| {
        // Case-insensitive `<name> : <digits>` with flexible separator
        // punctuation and whitespace. Only integer values are recognized;
        // a non-digit value means "field not found".
        Regex::new(&format!(r"(?i){}\s*[:=\-]?\s*(\d+)", name))
            .unwrap_or_else(|e| panic!("invalid nutrient pattern for {}: {}", name, e))
    })
});

/// Extract all seven nutrition fields from free-form text
///
/// Matching is independent of field order and tolerant of surrounding
/// prose; only the first occurrence of each field name is used. Fails
/// with [`Error::IncompleteNutritionData`] naming the first missing field
/// if any of the seven is absent.
pub fn extract(text: &str) -> Result<NutritionFacts> {
    let mut values = [0.0_f64; 7];

    for (i, pattern) in NUTRIENT_PATTERNS.iter().enumerate() {
        let captured = pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .and_then(|m| m.as_str().parse::<f64>().ok());

        match captured {
            Some(value) => values[i] = value,
            None => {
                tracing::warn!(
                    "Nutrition field '{}' not found in generator text",
                    NUTRIENT_FIELDS[i]
                );
                return Err(Error::IncompleteNutritionData {
                    field: NUTRIENT_FIELDS[i],
                    raw_text: text.to_string(),
                });
            }
        }
    }

    Ok(NutritionFacts {
        carbohydrates_g: values[0],
        protein_g: values[1],
        fat_g: values[2],
        calories_kcal: values[3],
        sodium_mg: values[4],
        sugar_g: values[5],
        fiber_g: values[6],
    })
}
