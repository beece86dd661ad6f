//! CLI command implementations.
//!
//! Available commands:
//! - **run**: the interactive questionnaire (default)
//! - **predict**: score four ratings and print the verdict
//! - **model**: print the trained coefficients
//! - **init**: write a starter `.candidate-fit.toml`

pub mod init;
pub mod model;
pub mod predict;
pub mod run;

pub use init::init_config;
pub use model::show_model;
pub use predict::{predict, PredictConfig};
pub use run::run_wizard;
