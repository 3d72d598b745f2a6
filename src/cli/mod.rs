//! Command-line interface for job-profile

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod resume;
mod show;
mod utils;

/// Inspect the resolved job-applier profile and resume facts
#[derive(Parser)]
#[command(name = "job-profile")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Application root holding `.env` and `config/profiles/` (default: current directory)
    #[arg(long, global = true, value_name = "DIR")]
    root: Option<PathBuf>,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved profile path
    Path,

    /// Print resolved settings as JSON
    Show(show::ShowArgs),

    /// List required personal fields that are missing
    Check,

    /// Print years of experience per skill inferred from the resume
    Skills,

    /// Print years of experience for a question label
    Years(resume::YearsArgs),

    /// Print the user information block with resume highlights appended
    Compose(resume::ComposeArgs),
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG in the environment always takes precedence; --verbose falls back to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::WARN.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let profile = utils::open_profile(cli.root)?;

    match cli.command {
        Commands::Path => show::run_path(&profile),
        Commands::Show(args) => show::run(args, &profile),
        Commands::Check => show::run_check(&profile),
        Commands::Skills => resume::run_skills(&profile),
        Commands::Years(args) => resume::run_years(args, &profile),
        Commands::Compose(args) => resume::run_compose(args, &profile),
    }
}
