use anyhow::{Context, Result};

use crate::cli::OutputFormat;
use crate::config::AppConfig;
use crate::model::shared_model;
use crate::observability::{set_phase, AppPhase};
use crate::output::format_prediction;
use crate::wizard::Ratings;

pub struct PredictConfig {
    pub sql: i64,
    pub python: i64,
    pub strategy: i64,
    pub vibe: i64,
    pub format: OutputFormat,
}

impl PredictConfig {
    pub fn ratings(&self) -> Ratings {
        Ratings::new(self.sql, self.python, self.strategy, self.vibe)
    }
}

/// Score one set of ratings and print the result.
pub fn predict(config: &AppConfig, request: PredictConfig) -> Result<()> {
    let model = {
        let _phase = set_phase(AppPhase::TrainingModel);
        shared_model(&config.model).context("Failed to train scoring model")?
    };

    let _phase = set_phase(AppPhase::Scoring);
    let ratings = request.ratings();
    let prediction = model.predict(&ratings);
    tracing::debug!(probability = prediction.probability, "scored ratings");

    print!("{}", format_prediction(ratings, &prediction, request.format)?);
    if request.format == OutputFormat::Json {
        println!();
    }
    Ok(())
}
