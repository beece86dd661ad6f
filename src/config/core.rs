use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{FitError, Result};
use crate::model::SolverSettings;

/// Root configuration loaded from `.candidate-fit.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub model: ModelConfig,
    pub resume: ResumeConfig,
    pub ui: UiConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Check every section, reporting the first invalid value.
    pub fn validate(&self) -> Result<()> {
        self.model.validate()?;
        self.ui.validate()?;
        Ok(())
    }
}

/// Synthetic dataset and solver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelConfig {
    /// RNG seed for the synthetic sample.
    pub seed: u64,
    /// Number of synthetic records.
    pub samples: usize,
    /// Gradient descent step on standardized ratings.
    pub learning_rate: f64,
    /// Gradient descent iteration cap.
    pub max_iterations: usize,
    /// Stop once the loss improves by less than this.
    pub tolerance: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            seed: default_seed(),
            samples: default_samples(),
            learning_rate: default_learning_rate(),
            max_iterations: default_max_iterations(),
            tolerance: default_tolerance(),
        }
    }
}

impl ModelConfig {
    pub fn validate(&self) -> Result<()> {
        if self.samples == 0 {
            return Err(FitError::config("model.samples must be greater than 0"));
        }
        if !(self.learning_rate.is_finite() && self.learning_rate > 0.0) {
            return Err(FitError::config(
                "model.learning_rate must be a positive number",
            ));
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(FitError::config(
                "model.tolerance must be a non-negative number",
            ));
        }
        if self.max_iterations == 0 {
            return Err(FitError::config(
                "model.max_iterations must be greater than 0",
            ));
        }
        Ok(())
    }

    pub fn solver_settings(&self) -> SolverSettings {
        SolverSettings {
            learning_rate: self.learning_rate,
            max_iterations: self.max_iterations,
            tolerance: self.tolerance,
        }
    }
}

pub fn default_seed() -> u64 {
    42
}

pub fn default_samples() -> usize {
    200
}

pub fn default_learning_rate() -> f64 {
    0.1
}

pub fn default_max_iterations() -> usize {
    2000
}

pub fn default_tolerance() -> f64 {
    1e-6
}

/// Where to look for the resume and where to save downloads.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeConfig {
    /// Directory probed for `resume.pdf`.
    pub directory: PathBuf,
    /// Directory the download action writes into. Defaults to the user's
    /// download directory.
    pub download_dir: Option<PathBuf>,
}

impl Default for ResumeConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("."),
            download_dir: None,
        }
    }
}

impl ResumeConfig {
    /// Resolve the download directory: explicit setting, then the platform
    /// download directory, then the working directory.
    pub fn resolved_download_dir(&self) -> PathBuf {
        self.download_dir
            .clone()
            .or_else(dirs::download_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Redraw interval when no key is pressed.
    pub tick_ms: u64,
    /// Play the celebration animation on a match.
    pub animations: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            tick_ms: 100,
            animations: true,
        }
    }
}

impl UiConfig {
    pub fn validate(&self) -> Result<()> {
        if !(10..=2000).contains(&self.tick_ms) {
            return Err(FitError::config("ui.tick_ms must be within 10..=2000"));
        }
        Ok(())
    }
}

/// Logging settings. `CANDIDATE_FIT_LOG` overrides `level`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    /// Log file used while the TUI owns the terminal.
    pub file: Option<PathBuf>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
            file: None,
        }
    }
}
