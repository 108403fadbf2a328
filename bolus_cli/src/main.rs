use bolus_core::*;
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "bolus")]
#[command(about = "Insulin dosing decision support", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Override config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate one meal and recommend an insulin dose
    Dose {
        /// Meal description, entered directly
        #[arg(long, conflicts_with = "recipe")]
        meal: Option<String>,

        /// Read the meal description from a plain-text recipe file
        #[arg(long)]
        recipe: Option<PathBuf>,

        /// JSON export of recent glucose readings
        #[arg(long)]
        readings_file: PathBuf,

        /// File holding the generated nutrition-facts text for this meal
        #[arg(long)]
        nutrition_file: PathBuf,

        /// File holding generated tips text (optional; tips are best-effort)
        #[arg(long)]
        tips_file: Option<PathBuf>,

        /// Insulin-to-carb ratio (grams per unit)
        #[arg(long, default_value_t = 10.0)]
        ratio: f64,

        /// Correction factor (mg/dL per unit)
        #[arg(long, default_value_t = 50.0)]
        correction: f64,

        /// Activity level (low, moderate, high)
        #[arg(long, default_value = "moderate")]
        activity: String,

        /// Target blood glucose (mg/dL)
        #[arg(long, default_value_t = 100.0)]
        target: f64,

        /// Insulin type (novolog, fiasp, humalog, regular)
        #[arg(long, default_value = "novolog")]
        insulin: String,
    },

    /// Show recent glucose readings
    Readings {
        /// JSON export of recent glucose readings
        #[arg(long)]
        readings_file: PathBuf,

        /// Window in minutes
        #[arg(long, default_value_t = 120)]
        window: u32,
    },
}

fn main() -> ExitCode {
    logging::init();

    let cli = Cli::parse();

    let result = match load_config(cli.config.as_deref()) {
        Ok(config) => run(cli.command, config),
        Err(e) => Err(e),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Error::IncompleteNutritionData { ref raw_text, .. } = e {
                eprintln!("Generated nutrition text (for manual inspection):");
                eprintln!("  {}", raw_text);
            }
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(p) => Config::load_from(p),
        None => Config::load(),
    }
}

fn run(command: Commands, config: Config) -> Result<()> {
    match command {
        Commands::Dose {
            meal,
            recipe,
            readings_file,
            nutrition_file,
            tips_file,
            ratio,
            correction,
            activity,
            target,
            insulin,
        } => {
            let meal_description = resolve_meal(meal, recipe.as_deref())?;
            let params = build_parameters(ratio, correction, &activity, target, &insulin)?;
            cmd_dose(
                &meal_description,
                &params,
                &readings_file,
                &nutrition_file,
                tips_file.as_deref(),
                config,
            )
        }
        Commands::Readings {
            readings_file,
            window,
        } => cmd_readings(&readings_file, window),
    }
}

/// Resolve the meal description from direct input or a recipe file
fn resolve_meal(meal: Option<String>, recipe: Option<&Path>) -> Result<String> {
    match (meal, recipe) {
        (Some(text), _) if !text.trim().is_empty() => Ok(text),
        (_, Some(path)) => {
            // Word-processor decoding belongs to an external collaborator;
            // only plain text is read here.
            if path.extension().is_some_and(|ext| ext == "docx") {
                return Err(Error::Other(format!(
                    "cannot read {:?}: convert word-processor documents to plain text first",
                    path
                )));
            }
            let text = std::fs::read_to_string(path)?;
            if text.trim().is_empty() {
                return Err(Error::MissingInput);
            }
            println!("Extracted recipe text:");
            println!("{}", text.trim());
            println!();
            Ok(text)
        }
        _ => Err(Error::MissingInput),
    }
}

fn build_parameters(
    ratio: f64,
    correction: f64,
    activity: &str,
    target: f64,
    insulin: &str,
) -> Result<DosingParameters> {
    let activity_level = ActivityLevel::from_str_lossy(activity).ok_or_else(|| {
        Error::InvalidParameters(format!(
            "unknown activity level '{}' (expected low, moderate, or high)",
            activity
        ))
    })?;

    let insulin_type = InsulinType::from_str_lossy(insulin);
    if insulin_type == InsulinType::Unknown {
        eprintln!(
            "Unknown insulin type '{}'; using the default injection lead time.",
            insulin
        );
    }

    Ok(DosingParameters {
        insulin_carb_ratio: ratio,
        correction_factor: correction,
        activity_level,
        target_glucose: target,
        insulin_type,
    })
}

fn cmd_dose(
    meal_description: &str,
    params: &DosingParameters,
    readings_file: &Path,
    nutrition_file: &Path,
    tips_file: Option<&Path>,
    config: Config,
) -> Result<()> {
    let telemetry = FileTelemetry::new(readings_file);
    let nutrition_gen = FileTextSource::new(nutrition_file);

    let recommendation = match tips_file {
        Some(path) => DosingEngine::new(telemetry, nutrition_gen, FileTextSource::new(path), config)
            .evaluate(meal_description, params)?,
        None => DosingEngine::new(telemetry, nutrition_gen, NoTips, config)
            .evaluate(meal_description, params)?,
    };

    display_recommendation(&recommendation);
    Ok(())
}

fn cmd_readings(readings_file: &Path, window: u32) -> Result<()> {
    let telemetry = FileTelemetry::new(readings_file);
    let readings = telemetry.fetch_readings(window)?;

    if readings.is_empty() {
        println!("No readings in the last {} minutes.", window);
        return Ok(());
    }

    println!("Blood sugar levels (past {} minutes):", window);
    println!();
    for reading in &readings {
        println!(
            "  {}  {:>4} mg/dL",
            reading.timestamp.format("%I:%M %p"),
            reading.value
        );
    }
    Ok(())
}

fn display_recommendation(rec: &DoseRecommendation) {
    println!("Current blood sugar: {} mg/dL", rec.reading.value);
    println!();

    println!("Nutritional information:");
    println!("  Carbohydrates  {:>6} grams", rec.nutrition.carbohydrates_g);
    println!("  Protein        {:>6} grams", rec.nutrition.protein_g);
    println!("  Fat            {:>6} grams", rec.nutrition.fat_g);
    println!("  Calories       {:>6} kcal", rec.nutrition.calories_kcal);
    println!("  Sodium         {:>6} mg", rec.nutrition.sodium_mg);
    println!("  Sugar          {:>6} grams", rec.nutrition.sugar_g);
    println!("  Fiber          {:>6} grams", rec.nutrition.fiber_g);
    println!();

    println!("Suggested insulin dose: {:.1} units", rec.units);
    if rec.units <= 0.0 {
        println!("  Note: the correction term outweighs the carb dose; no insulin may be needed. Confirm with your care plan.");
    }
    println!("Inject {} minutes before your meal.", rec.injection_lead_minutes);
    println!();

    println!("Blood sugar advisory ({:?}):", rec.band);
    println!("  {}", rec.band_advice);

    if !rec.tips.is_empty() {
        println!();
        println!("Tips to avoid blood sugar spikes:");
        println!("  {}", rec.tips);
    }
}
