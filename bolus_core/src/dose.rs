//! Insulin dose arithmetic.
//!
//! The dose is a carb-coverage term scaled by activity plus a correction
//! term for the gap between current and target glucose:
//!
//! ```text
//! units = (carbs / ic_ratio) * activity_factor
//!       + (current - target) / correction_factor
//! ```
//!
//! No clamping is applied here: a reading below target can reduce or even
//! negate the total. Whether to floor the dose at zero is caller policy.

/// Compute the insulin dose in units, at full precision
///
/// Callers must have validated that `ic_ratio` and `correction_factor`
/// are strictly positive before calling.
pub fn calculate(
    carbs: f64,
    ic_ratio: f64,
    activity_factor: f64,
    current_glucose: f64,
    target_glucose: f64,
    correction_factor: f64,
) -> f64 {
    let insulin_for_carbs = (carbs / ic_ratio) * activity_factor;
    let correction_dose = (current_glucose - target_glucose) / correction_factor;
    insulin_for_carbs + correction_dose
}

/// Round a dose to one decimal place for presentation
pub fn round_units(units: f64) -> f64 {
    (units * 10.0).round() / 10.0
}
