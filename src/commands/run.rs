use anyhow::{Context, Result};

use crate::config::AppConfig;
use crate::model::shared_model;
use crate::observability::{set_phase, AppPhase};
use crate::tui::WizardExplorer;
use crate::wizard::{Session, Stage};

/// Train the shared model and hand the terminal to the wizard.
pub fn run_wizard(config: &AppConfig, stage: Option<&str>) -> Result<()> {
    let start = stage.map(Stage::from_name).unwrap_or_default();
    if let Some(name) = stage {
        if !start.name().eq_ignore_ascii_case(name.trim()) {
            tracing::warn!("Unknown stage '{}', opening {}", name, start);
        }
    }

    let model = {
        let _phase = set_phase(AppPhase::TrainingModel);
        shared_model(&config.model).context("Failed to train scoring model")?
    };

    let _phase = set_phase(AppPhase::Interactive);
    let mut explorer = WizardExplorer::new(model, Session::starting_at(start), config)?;
    let session = explorer.run()?;
    tracing::debug!(stage = %session.stage, ratings = ?session.ratings, "wizard closed");

    Ok(())
}
