use anyhow::{Context, Result};

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::model::ScoringModel;
use crate::observability::{set_phase, AppPhase};
use crate::output::format_model;

/// Train a fresh model and print its weights with the training summary.
pub fn show_model(config: &AppConfig, format: OutputFormat) -> Result<()> {
    let _phase = set_phase(AppPhase::TrainingModel);
    let (model, summary) =
        ScoringModel::train_with_summary(&config.model).context("Failed to train scoring model")?;

    print!("{}", format_model(&model, summary, format)?);
    if format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
