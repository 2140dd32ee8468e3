//! The `ferro run` subcommand: a fixed-temperature simulation with
//! periodic lattice frames.

use anyhow::Context;
use clap::Args;
use ferro::prelude::*;
use tracing::info;

#[derive(Args)]
pub struct RunArgs {
    /// Lattice width in cells
    #[arg(long, default_value_t = 20)]
    pub width: u32,

    /// Lattice height in cells
    #[arg(long, default_value_t = 20)]
    pub height: u32,

    /// Temperature the lattice is held at
    #[arg(short, long, default_value_t = 1.5)]
    pub temperature: f64,

    /// Number of steps to run
    #[arg(short, long, default_value_t = 100)]
    pub steps: usize,

    /// RNG seed
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Coupling constant J
    #[arg(long, default_value_t = 1.0)]
    pub coupling: f64,

    /// Boltzmann constant k
    #[arg(long, default_value_t = 1.0)]
    pub boltzmann: f64,

    /// Interaction model
    #[arg(long, default_value = "nearest-neighbour")]
    pub interaction: Interaction,

    /// Print a lattice frame every N steps (0 disables frames)
    #[arg(long, default_value_t = 25)]
    pub frame_every: usize,
}

pub fn execute(args: RunArgs) -> anyhow::Result<()> {
    let config = SimConfig {
        width: args.width,
        height: args.height,
        interaction: args.interaction,
        constants: PhysicalConstants {
            coupling: args.coupling,
            boltzmann: args.boltzmann,
        },
        seed: args.seed,
    };
    let mut sim = Simulation::new(config).context("building the simulation")?;

    info!(
        width = args.width,
        height = args.height,
        temperature = args.temperature,
        steps = args.steps,
        seed = args.seed,
        "starting run"
    );

    for step in 1..=args.steps {
        sim.step(args.temperature)
            .with_context(|| format!("step {step}"))?;
        if args.frame_every > 0 && step % args.frame_every == 0 {
            let smoothed = moving_average(sim.history(), 10);
            println!(
                "step {:>4}  mean spin {:+.4}  smoothed {:+.4}",
                step,
                sim.average_spin(),
                smoothed.last().copied().unwrap_or(0.0)
            );
            print!("{}", lattice_frame(sim.lattice()));
        }
    }

    let tail = tail_mean(sim.history(), args.steps.min(50)).unwrap_or(0.0);
    let predicted = mean_field_magnetization(args.temperature, &sim.constants());
    println!("final mean spin {:+.4}", sim.average_spin());
    println!("tail mean {:+.4}  (|m| = {:.4})", tail, tail.abs());
    println!("mean-field prediction {predicted:.4}");
    Ok(())
}
