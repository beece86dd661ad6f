use anyhow::{Context, Result};
use candidate_fit::cli::{Cli, Commands};
use candidate_fit::commands::{self, PredictConfig};
use candidate_fit::config::load_config;
use candidate_fit::observability::{
    bootstrap_subscriber, init_tracing, install_panic_hook, set_phase, AppPhase,
};
use clap::Parser;

fn main() -> Result<()> {
    install_panic_hook();
    let cli = Cli::parse();
    let command = cli.command_or_default();

    let config = {
        let _phase = set_phase(AppPhase::LoadingConfig);
        tracing::subscriber::with_default(bootstrap_subscriber(), || {
            load_config(cli.config.as_deref())
        })
        .context("Failed to load configuration")?
    };

    let interactive = matches!(command, Commands::Run { .. });
    init_tracing(&config.logging, cli.verbosity, interactive)?;
    tracing::debug!(?command, "starting");

    match command {
        Commands::Run { stage } => commands::run_wizard(&config, stage.as_deref()),
        Commands::Predict {
            sql,
            python,
            strategy,
            vibe,
            format,
        } => commands::predict(
            &config,
            PredictConfig {
                sql,
                python,
                strategy,
                vibe,
                format,
            },
        ),
        Commands::Model { format } => commands::show_model(&config, format),
        Commands::Init { force } => {
            let dir = std::env::current_dir().context("Failed to get current directory")?;
            commands::init_config(&dir, force)
        }
    }
}
