//! Command-line interface for the ferro lattice spin simulator.

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod run;
mod sweep;

#[derive(Parser)]
#[command(name = "ferro")]
#[command(version)]
#[command(about = "Thermal lattice spin simulator with a mean-field oracle", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a fixed-temperature simulation and print lattice frames
    Run(run::RunArgs),

    /// Sweep a temperature range and export CSV and/or a chart
    Sweep(sweep::SweepArgs),
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match Cli::parse().command {
        Commands::Run(args) => run::execute(args),
        Commands::Sweep(args) => sweep::execute(args),
    }
}
