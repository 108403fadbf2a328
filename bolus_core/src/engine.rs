//! Dosing orchestration.
//!
//! Sequences one dosing request end to end:
//! 1. Require a non-empty meal description
//! 2. Validate user parameters against configured bounds
//! 3. Fetch the current glucose reading
//! 4. Generate and extract nutrition facts
//! 5. Compute dose, injection lead time, and advisory band
//! 6. Best-effort tips, then assemble the recommendation
//!
//! No step is retried; each externally dependent step fails fast with its
//! own error kind so the caller can decide how to recover.

use crate::{
    bands, dose, nutrition, timing, Config, DoseRecommendation, DosingParameters, Error,
    GlucoseReading, GlucoseTelemetry, NutritionTextGenerator, Result, TipsGenerator,
};

/// The dosing decision engine
///
/// Owns the three boundary collaborators plus configuration. Holds no
/// per-request state: each `evaluate` call re-fetches the glucose reading
/// and re-generates nutrition text, since both are time-sensitive.
pub struct DosingEngine<T, N, S>
where
    T: GlucoseTelemetry,
    N: NutritionTextGenerator,
    S: TipsGenerator,
{
    telemetry: T,
    nutrition_gen: N,
    tips_gen: S,
    config: Config,
}

impl<T, N, S> DosingEngine<T, N, S>
where
    T: GlucoseTelemetry,
    N: NutritionTextGenerator,
    S: TipsGenerator,
{
    pub fn new(telemetry: T, nutrition_gen: N, tips_gen: S, config: Config) -> Self {
        Self {
            telemetry,
            nutrition_gen,
            tips_gen,
            config,
        }
    }

    /// Evaluate one dosing request
    ///
    /// Returns the full recommendation bundle, or the first failure in the
    /// sequence. Tips generation is the only step that degrades silently:
    /// on failure the bundle is returned with an empty tips field.
    pub fn evaluate(
        &self,
        meal_description: &str,
        params: &DosingParameters,
    ) -> Result<DoseRecommendation> {
        if meal_description.trim().is_empty() {
            return Err(Error::MissingInput);
        }

        self.config.bounds.validate(params)?;

        let reading = self
            .telemetry
            .fetch_latest()?
            .ok_or_else(|| {
                Error::TelemetryUnavailable("no recent glucose reading available".into())
            })?;
        tracing::info!("Current blood glucose: {} mg/dL", reading.value);

        let nutrition_text = self.nutrition_gen.describe(meal_description)?;
        let facts = nutrition::extract(&nutrition_text)?;
        tracing::info!(
            "Extracted nutrition facts: {} g carbs, {} kcal",
            facts.carbohydrates_g,
            facts.calories_kcal
        );

        let units = dose::calculate(
            facts.carbohydrates_g,
            params.insulin_carb_ratio,
            params.activity_level.factor(),
            f64::from(reading.value),
            params.target_glucose,
            params.correction_factor,
        );
        let band = bands::classify(reading.value);

        // Tips are supplementary, not safety-critical.
        let tips = match self.tips_gen.suggest(meal_description) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!("Tips generation failed, continuing without: {}", e);
                String::new()
            }
        };

        Ok(DoseRecommendation {
            units: dose::round_units(units),
            injection_lead_minutes: timing::lead_minutes(params.insulin_type),
            band,
            band_advice: bands::advisory_message(band),
            tips,
            reading,
            nutrition: facts,
        })
    }

    /// Fetch the recent reading series for display, most-recent-last
    pub fn recent_readings(&self, window_minutes: u32) -> Result<Vec<GlucoseReading>> {
        self.telemetry.fetch_readings(window_minutes)
    }
}
