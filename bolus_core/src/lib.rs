#![forbid(unsafe_code)]

//! Core domain model and business logic for the Bolus dosing system.
//!
//! This crate provides:
//! - Domain types (glucose readings, nutrition facts, dosing parameters)
//! - Nutrition facts extraction from generator text
//! - Glucose band classification and advisory messages
//! - The insulin dose formula and injection timing table
//! - The dosing orchestration engine and its collaborator traits

pub mod types;
pub mod error;
pub mod config;
pub mod logging;
pub mod nutrition;
pub mod bands;
pub mod dose;
pub mod timing;
pub mod providers;
pub mod engine;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use config::Config;
pub use nutrition::extract as extract_nutrition;
pub use bands::{advisory_message, classify};
pub use dose::{calculate as calculate_dose, round_units};
pub use timing::lead_minutes;
pub use providers::{
    FileTelemetry, FileTextSource, GlucoseTelemetry, NoTips, NutritionTextGenerator,
    TipsGenerator,
};
pub use engine::DosingEngine;
