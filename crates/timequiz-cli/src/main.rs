//! timequiz CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(
    name = "timequiz",
    version,
    about = "Timed terminal quiz from a CSV file",
    args_conflicts_with_subcommands = true
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    run: RunArgs,
}

/// Flags for taking a quiz (the default command).
#[derive(Args, Debug)]
pub struct RunArgs {
    /// CSV file of prompt,answer rows [default: ./problems.csv]
    #[arg(long, alias = "filePath")]
    pub file_path: Option<PathBuf>,

    /// Time limit for the whole quiz in seconds [default: 30]
    #[arg(long, alias = "timeOut", value_parser = clap::value_parser!(u64).range(1..))]
    pub time_out: Option<u64>,

    /// Shuffle the questions
    #[arg(long)]
    pub shuffle: bool,

    /// Seed for --shuffle, for a reproducible order
    #[arg(long)]
    pub seed: Option<u64>,

    /// Config file path
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How to print the final result
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Subcommand)]
enum Commands {
    /// Check a question file without starting a quiz
    Validate {
        /// CSV file to check [default: file_path from config, or ./problems.csv]
        #[arg(long, alias = "filePath")]
        file_path: Option<PathBuf>,

        /// Print every question as a table
        #[arg(long)]
        list: bool,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Create a sample question file and config
    Init,
}

#[tokio::main]
async fn main() {
    // Stdout carries the quiz itself; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("timequiz=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        None => commands::run::execute(cli.run).await,
        Some(Commands::Validate {
            file_path,
            list,
            config,
        }) => commands::validate::execute(file_path, list, config),
        Some(Commands::Init) => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
