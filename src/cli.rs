use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "candidate-fit")]
#[command(about = "Candidate fit questionnaire with a logistic match score", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a .candidate-fit.toml (defaults to searching upward from the
    /// current directory)
    #[arg(long, global = true, env = "CANDIDATE_FIT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (can be repeated: -v, -vv, -vvv)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count, global = true)]
    pub verbosity: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// The subcommand, with a bare invocation meaning `run`.
    pub fn command_or_default(&self) -> Commands {
        self.command
            .clone()
            .unwrap_or(Commands::Run { stage: None })
    }
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Walk through the questionnaire in the terminal (default)
    Run {
        /// Stage to open on (Introduction, SQL, Python, Strategy, Vibe,
        /// Results); unknown names open the Introduction
        #[arg(long)]
        stage: Option<String>,
    },

    /// Score a set of ratings without the interactive wizard
    Predict {
        /// Need for SQL / data wrangling
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..=10))]
        sql: i64,

        /// Need for Python / modeling
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..=10))]
        python: i64,

        /// Need for business strategy
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..=10))]
        strategy: i64,

        /// Tolerance for bad stats jokes
        #[arg(long, value_parser = clap::value_parser!(i64).range(0..=10))]
        vibe: i64,

        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Show the trained coefficients and training summary
    Model {
        /// Output format
        #[arg(short, long, value_enum, default_value = "terminal")]
        format: OutputFormat,
    },

    /// Initialize a configuration file
    Init {
        /// Overwrite an existing configuration file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Terminal,
    Json,
}
