//! Configuration loaded from `.candidate-fit.toml`.
//!
//! Every section is optional; missing keys take their defaults.

mod core;
mod loader;

pub use self::core::{
    default_learning_rate, default_max_iterations, default_samples, default_seed,
    default_tolerance, AppConfig, LoggingConfig, ModelConfig, ResumeConfig, UiConfig,
};
pub use self::loader::{
    directory_ancestors, discover_config, load_config, load_config_from,
    parse_and_validate_config, CONFIG_FILE_NAME,
};
