// Export modules for library usage
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod observability;
pub mod output;
pub mod resume;
pub mod tui;
pub mod wizard;

// Re-export commonly used types
pub use crate::error::{ErrorCode, FitError, Result};

pub use crate::model::{
    shared_model, FeatureImpact, Prediction, ScoringModel, TrainingSummary, Verdict,
};

pub use crate::resume::ResumeAsset;

pub use crate::wizard::{Rating, Ratings, Session, Stage, Topic, WizardAction};
