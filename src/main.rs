mod domain;
mod error;
mod formulas;
mod meals;
mod nutrition;
mod plan;
mod server;
mod workout;

use std::net::IpAddr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;

use crate::domain::ClientProfile;
use crate::plan::{PlanGenerator, PlanOptions};
use crate::server::AppState;

/// Personalized fitness plan generator.
#[derive(Parser, Debug)]
#[command(name = "fitplan")]
#[command(about = "Calorie target, macro split, workout schedule and meals from a client profile")]
#[command(version)]
struct Args {
    /// Address to bind the web server to.
    /// Can also be set via FITPLAN_HOST environment variable.
    #[arg(long, env = "FITPLAN_HOST", default_value = "0.0.0.0")]
    host: IpAddr,

    /// Port number for the web server.
    /// Can also be set via FITPLAN_PORT environment variable.
    #[arg(long, env = "FITPLAN_PORT", default_value = "8000")]
    port: u16,

    /// Raise negative carbohydrate targets to zero instead of reporting them.
    /// Can also be set via FITPLAN_CLAMP_NEGATIVE_CARBS environment variable.
    #[arg(long, env = "FITPLAN_CLAMP_NEGATIVE_CARBS")]
    clamp_negative_carbs: bool,

    /// Generate a plan for the profile in this JSON file, print it and exit
    /// instead of starting the server.
    #[arg(long, value_name = "FILE", env = "FITPLAN_PROFILE")]
    profile: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    let options = PlanOptions {
        clamp_negative_carbs: args.clamp_negative_carbs,
    };
    let generator = PlanGenerator::new(options);

    if let Some(path) = &args.profile {
        return print_plan(&generator, path);
    }

    println!("Starting fitplan server");
    if options.clamp_negative_carbs {
        println!("Negative carbohydrate targets will be clamped to 0 g");
    }

    let state = Arc::new(AppState { generator });
    server::run_server(state, args.host, args.port).await?;

    Ok(())
}

/// Generates a plan for a profile file and prints it as JSON.
fn print_plan(generator: &PlanGenerator, path: &Path) -> Result<()> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile from {}", path.display()))?;
    let profile: ClientProfile = serde_json::from_str(&contents)
        .with_context(|| format!("Invalid profile in {}", path.display()))?;

    let plan = generator
        .generate(&profile)
        .context("Failed to generate plan")?;

    println!("{}", serde_json::to_string_pretty(&plan)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROFILE_JSON: &str = r#"{
        "age": 25,
        "sex": "male",
        "height_cm": 175,
        "weight_kg": 70,
        "goal": "fat_loss",
        "activity_level": "sedentary",
        "diet_preference": "none",
        "workouts_per_week": 3
    }"#;

    #[test]
    fn test_print_plan_valid_profile() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, PROFILE_JSON).unwrap();

        assert!(print_plan(&PlanGenerator::default(), &path).is_ok());
    }

    #[test]
    fn test_print_plan_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing.json");

        let err = print_plan(&PlanGenerator::default(), &path).unwrap_err();
        assert!(err.to_string().contains("Failed to read profile"));
    }

    #[test]
    fn test_print_plan_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, r#"{"age": 25, "sex": "male"}"#).unwrap();

        let err = print_plan(&PlanGenerator::default(), &path).unwrap_err();
        assert!(err.to_string().contains("Invalid profile"));
    }

    #[test]
    fn test_print_plan_generation_failure() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("profile.json");
        std::fs::write(&path, PROFILE_JSON.replace("\"weight_kg\": 70", "\"weight_kg\": 1e308"))
            .unwrap();

        let err = print_plan(&PlanGenerator::default(), &path).unwrap_err();
        assert!(err.to_string().contains("Failed to generate plan"));
    }
}
