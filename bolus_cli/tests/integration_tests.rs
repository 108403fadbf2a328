//! Integration tests for the bolus binary.
//!
//! These tests verify end-to-end behavior including:
//! - The full dose evaluation flow against fixture files
//! - Failure reporting for each pipeline step
//! - The readings listing command

use assert_cmd::Command;
use chrono::{Duration, Utc};
use predicates::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const TURKEY_SANDWICH: &str = "Carbohydrates: 45 grams, Protein: 20 grams, \
    Fat: 10 grams, Calories: 350 kcal, Sodium: 600 mg, Sugar: 5 grams, \
    Fiber: 3 grams";

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("bolus"))
}

/// Write a readings fixture with the given mg/dL values, newest last,
/// spaced five minutes apart ending now.
fn write_readings(dir: &Path, values: &[u32]) -> PathBuf {
    let path = dir.join("readings.json");
    let entries: Vec<String> = values
        .iter()
        .rev()
        .enumerate()
        .map(|(i, value)| {
            let timestamp = Utc::now() - Duration::minutes(5 * i as i64);
            format!(
                r#"{{"value": {}, "timestamp": "{}"}}"#,
                value,
                timestamp.to_rfc3339()
            )
        })
        .collect();
    fs::write(&path, format!("[{}]", entries.join(","))).unwrap();
    path
}

fn write_text(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Insulin dosing decision support"));
}

#[test]
fn test_dose_end_to_end() {
    let temp_dir = TempDir::new().unwrap();
    let readings = write_readings(temp_dir.path(), &[120, 125, 130]);
    let nutrition = write_text(temp_dir.path(), "nutrition.txt", TURKEY_SANDWICH);
    let tips = write_text(temp_dir.path(), "tips.txt", "Eat greens first.");

    cli()
        .arg("dose")
        .arg("--meal")
        .arg("turkey sandwich")
        .arg("--readings-file")
        .arg(&readings)
        .arg("--nutrition-file")
        .arg(&nutrition)
        .arg("--tips-file")
        .arg(&tips)
        .arg("--ratio")
        .arg("9")
        .arg("--correction")
        .arg("40")
        .arg("--insulin")
        .arg("fiasp")
        .assert()
        .success()
        .stdout(predicate::str::contains("Current blood sugar: 130 mg/dL"))
        .stdout(predicate::str::contains("Suggested insulin dose: 5.8 units"))
        .stdout(predicate::str::contains("Inject 10 minutes before your meal."))
        .stdout(predicate::str::contains("within range"))
        .stdout(predicate::str::contains("Eat greens first."));
}

#[test]
fn test_dose_without_tips_file_still_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let readings = write_readings(temp_dir.path(), &[130]);
    let nutrition = write_text(temp_dir.path(), "nutrition.txt", TURKEY_SANDWICH);

    cli()
        .arg("dose")
        .arg("--meal")
        .arg("turkey sandwich")
        .arg("--readings-file")
        .arg(&readings)
        .arg("--nutrition-file")
        .arg(&nutrition)
        .assert()
        .success()
        .stdout(predicate::str::contains("Suggested insulin dose:"))
        .stdout(predicate::str::contains("Tips").not());
}

#[test]
fn test_missing_meal_fails() {
    let temp_dir = TempDir::new().unwrap();
    let readings = write_readings(temp_dir.path(), &[130]);
    let nutrition = write_text(temp_dir.path(), "nutrition.txt", TURKEY_SANDWICH);

    cli()
        .arg("dose")
        .arg("--readings-file")
        .arg(&readings)
        .arg("--nutrition-file")
        .arg(&nutrition)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No meal description supplied"));
}

#[test]
fn test_missing_readings_file_is_telemetry_error() {
    let temp_dir = TempDir::new().unwrap();
    let nutrition = write_text(temp_dir.path(), "nutrition.txt", TURKEY_SANDWICH);

    cli()
        .arg("dose")
        .arg("--meal")
        .arg("turkey sandwich")
        .arg("--readings-file")
        .arg(temp_dir.path().join("absent.json"))
        .arg("--nutrition-file")
        .arg(&nutrition)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Glucose telemetry unavailable"));
}

#[test]
fn test_incomplete_nutrition_surfaces_raw_text() {
    let temp_dir = TempDir::new().unwrap();
    let readings = write_readings(temp_dir.path(), &[130]);
    let nutrition = write_text(
        temp_dir.path(),
        "nutrition.txt",
        "Carbohydrates: 45 grams, Protein: 20 grams",
    );

    cli()
        .arg("dose")
        .arg("--meal")
        .arg("turkey sandwich")
        .arg("--readings-file")
        .arg(&readings)
        .arg("--nutrition-file")
        .arg(&nutrition)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing 'fat'"))
        .stderr(predicate::str::contains("Protein: 20 grams"));
}

#[test]
fn test_invalid_parameters_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let readings = write_readings(temp_dir.path(), &[130]);
    let nutrition = write_text(temp_dir.path(), "nutrition.txt", TURKEY_SANDWICH);

    cli()
        .arg("dose")
        .arg("--meal")
        .arg("turkey sandwich")
        .arg("--readings-file")
        .arg(&readings)
        .arg("--nutrition-file")
        .arg(&nutrition)
        .arg("--correction")
        .arg("0")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid dosing parameters"));
}

#[test]
fn test_recipe_file_input() {
    let temp_dir = TempDir::new().unwrap();
    let readings = write_readings(temp_dir.path(), &[130]);
    let nutrition = write_text(temp_dir.path(), "nutrition.txt", TURKEY_SANDWICH);
    let recipe = write_text(
        temp_dir.path(),
        "recipe.txt",
        "Two slices of bread, turkey, lettuce.",
    );

    cli()
        .arg("dose")
        .arg("--recipe")
        .arg(&recipe)
        .arg("--readings-file")
        .arg(&readings)
        .arg("--nutrition-file")
        .arg(&nutrition)
        .assert()
        .success()
        .stdout(predicate::str::contains("Extracted recipe text:"))
        .stdout(predicate::str::contains("Two slices of bread"));
}

#[test]
fn test_docx_recipe_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let readings = write_readings(temp_dir.path(), &[130]);
    let nutrition = write_text(temp_dir.path(), "nutrition.txt", TURKEY_SANDWICH);
    let recipe = write_text(temp_dir.path(), "recipe.docx", "binary-ish");

    cli()
        .arg("dose")
        .arg("--recipe")
        .arg(&recipe)
        .arg("--readings-file")
        .arg(&readings)
        .arg("--nutrition-file")
        .arg(&nutrition)
        .assert()
        .failure()
        .stderr(predicate::str::contains("plain text"));
}

#[test]
fn test_readings_command_lists_series() {
    let temp_dir = TempDir::new().unwrap();
    let readings = write_readings(temp_dir.path(), &[110, 118, 126]);

    cli()
        .arg("readings")
        .arg("--readings-file")
        .arg(&readings)
        .arg("--window")
        .arg("120")
        .assert()
        .success()
        .stdout(predicate::str::contains("past 120 minutes"))
        .stdout(predicate::str::contains("110 mg/dL"))
        .stdout(predicate::str::contains("126 mg/dL"));
}

#[test]
fn test_readings_command_empty_window() {
    let temp_dir = TempDir::new().unwrap();
    let readings = temp_dir.path().join("readings.json");
    fs::write(&readings, "[]").unwrap();

    cli()
        .arg("readings")
        .arg("--readings-file")
        .arg(&readings)
        .assert()
        .success()
        .stdout(predicate::str::contains("No readings"));
}
