use crate::config::CONFIG_FILE_NAME;
use crate::error::FitError;
use anyhow::Result;
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# Candidate Fit configuration

[model]
# Seed for the synthetic training sample
seed = 42
samples = 200
# Gradient descent on standardized ratings
learning_rate = 0.1
max_iterations = 2000
tolerance = 1e-6

[resume]
# Directory searched for resume.pdf
directory = "."
# Where "Download My Resume" saves the file (defaults to the Downloads folder)
# download_dir = "~/Downloads"

[ui]
tick_ms = 100
animations = true

[logging]
level = "warn"
# file = "candidate-fit.log"
"#;

/// Write a starter config into `dir`.
pub fn init_config(dir: &Path, force: bool) -> Result<()> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!("Configuration file already exists. Use --force to overwrite.");
    }

    std::fs::write(&config_path, DEFAULT_CONFIG)
        .map_err(|e| FitError::from_io_error(e, Some(config_path.clone())))?;
    println!("Created {} configuration file", CONFIG_FILE_NAME);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::load_config_from;
    use tempfile::TempDir;

    #[test]
    fn template_parses_to_defaults() {
        let dir = TempDir::new().unwrap();
        init_config(dir.path(), false).unwrap();

        let config = load_config_from(&dir.path().join(CONFIG_FILE_NAME)).unwrap();
        assert_eq!(config.model, crate::config::ModelConfig::default());
        assert_eq!(config.ui.tick_ms, 100);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let dir = TempDir::new().unwrap();
        init_config(dir.path(), false).unwrap();

        assert!(init_config(dir.path(), false).is_err());
        assert!(init_config(dir.path(), true).is_ok());
    }
}
