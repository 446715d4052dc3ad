//! Formica CLI - ant colony optimization from the command line.

mod commands;
mod config;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "formica")]
#[command(author, version, about = "Formica - Ant colony optimization for the TSP", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a new Formica project
    Init {
        /// Project directory (default: current directory)
        #[arg(short, long)]
        path: Option<String>,
    },

    /// Run generations, continuing the current session if there is one
    Run {
        /// Number of generations to run (default: from formica.toml)
        #[arg(short, long)]
        generations: Option<u64>,

        /// Print a report line every N generations (default: from formica.toml)
        #[arg(short, long)]
        report_every: Option<u64>,

        /// Number of random cities for a new session (default: from formica.toml)
        #[arg(short, long)]
        cities: Option<usize>,

        /// Master seed for a new session (default: from formica.toml)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Discard the current session and start over
        #[arg(long)]
        fresh: bool,
    },

    /// Brute-force the shortest and longest path over the session's cities
    Baseline,

    /// Show colony statistics
    Stats,

    /// Export the pheromone map
    Export {
        /// Output file path
        output: String,
    },
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Init { path } => commands::init::run(path),
        Commands::Run {
            generations,
            report_every,
            cities,
            seed,
            fresh,
        } => commands::run::run(
            commands::run::RunArgs {
                generations,
                report_every,
                cities,
                seed,
                fresh,
            },
            cli.verbose,
        ),
        Commands::Baseline => commands::baseline::run(),
        Commands::Stats => commands::stats::run(),
        Commands::Export { output } => commands::export::run(&output),
    }
}
