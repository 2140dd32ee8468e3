//! Ferro quickstart — a complete, minimal run from scratch.
//!
//! Demonstrates:
//!   1. Configuring and building a simulation
//!   2. Stepping it and watching the lattice order
//!   3. Measuring magnetization against the mean-field prediction
//!   4. Sweeping temperature and saving a chart
//!
//! Run with:
//!   cargo run --example quickstart

use ferro::prelude::*;
use std::error::Error;
use std::path::Path;

const WIDTH: u32 = 12;
const HEIGHT: u32 = 12;
const TEMPERATURE: f64 = 1.5;
const STEPS: usize = 60;
const FRAME_EVERY: usize = 20;

fn main() -> Result<(), Box<dyn Error>> {
    println!("=== Ferro quickstart ===\n");

    // 1. Configure a small lattice with a fixed seed.
    let mut config = SimConfig::new(WIDTH, HEIGHT);
    config.seed = 42;
    let mut sim = Simulation::new(config)?;
    println!(
        "Lattice: {}x{}, interaction: {}, seed: {}",
        WIDTH,
        HEIGHT,
        sim.interaction(),
        sim.seed()
    );

    // 2. Step well below the critical temperature; the lattice orders.
    println!("\nRunning {STEPS} steps at T = {TEMPERATURE}...");
    for step in 1..=STEPS {
        sim.step(TEMPERATURE)?;
        if step % FRAME_EVERY == 0 {
            println!("\nstep {:>3}: mean spin {:+.4}", step, sim.average_spin());
            print!("{}", lattice_frame(sim.lattice()));
        }
    }

    // 3. Compare the measured tail against the mean-field prediction.
    let measured = tail_mean(sim.history(), 20).unwrap_or(0.0);
    let predicted = mean_field_magnetization(TEMPERATURE, &sim.constants());
    println!("\nmeasured |m| = {:.4}", measured.abs());
    println!("mean-field m = {predicted:.4}");
    println!(
        "critical temperature = {:.2}",
        critical_temperature(&sim.constants())
    );

    // 4. Sweep a coarse temperature range and chart it.
    let sweep = SweepConfig {
        samples: 25,
        steps_per_temperature: 60,
        tail_window: 30,
        width: 10,
        height: 10,
        seed: 42,
        ..SweepConfig::default()
    };
    let points = run_sweep(&sweep)?;
    let theory =
        ferro::analysis::magnetization_curve(sweep.t_start, sweep.t_stop, 200, &sweep.constants);

    std::fs::create_dir_all("target")?;
    let chart_path = Path::new("target/quickstart_magnetization.png");
    save_magnetization_chart(
        chart_path,
        &points,
        &theory,
        critical_temperature(&sweep.constants),
    )?;
    println!(
        "\nSaved {} sweep points to {}",
        points.len(),
        chart_path.display()
    );

    Ok(())
}
