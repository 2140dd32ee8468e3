//! The `ferro sweep` subcommand: magnetization across a temperature
//! range, exported as CSV and/or a chart.

use anyhow::Context;
use clap::Args;
use ferro::prelude::*;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::info;

#[derive(Args)]
pub struct SweepArgs {
    /// Lowest sampled temperature
    #[arg(long, default_value_t = 0.1)]
    pub t_start: f64,

    /// Highest sampled temperature
    #[arg(long, default_value_t = 5.0)]
    pub t_stop: f64,

    /// Number of evenly spaced temperatures
    #[arg(long, default_value_t = 1000)]
    pub samples: usize,

    /// Steps per temperature
    #[arg(long, default_value_t = 100)]
    pub steps: usize,

    /// Lattice width in cells
    #[arg(long, default_value_t = 20)]
    pub width: u32,

    /// Lattice height in cells
    #[arg(long, default_value_t = 20)]
    pub height: u32,

    /// History entries averaged per measurement
    #[arg(long, default_value_t = 50)]
    pub tail_window: usize,

    /// Base RNG seed
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Write measurements to this CSV file
    #[arg(long, value_name = "PATH")]
    pub csv: Option<PathBuf>,

    /// Save a magnetization chart to this PNG file
    #[arg(long, value_name = "PATH")]
    pub chart: Option<PathBuf>,
}

pub fn execute(args: SweepArgs) -> anyhow::Result<()> {
    let config = SweepConfig {
        t_start: args.t_start,
        t_stop: args.t_stop,
        samples: args.samples,
        steps_per_temperature: args.steps,
        tail_window: args.tail_window,
        width: args.width,
        height: args.height,
        seed: args.seed,
        ..SweepConfig::default()
    };

    let points = run_sweep(&config).context("running the sweep")?;
    let tc = critical_temperature(&config.constants);

    if let Some(path) = &args.csv {
        write_csv(path, &points, &config.constants)
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), "wrote sweep CSV");
    }

    if let Some(path) = &args.chart {
        let theory =
            ferro::analysis::magnetization_curve(args.t_start, args.t_stop, 256, &config.constants);
        save_magnetization_chart(path, &points, &theory, tc)
            .map_err(|e| anyhow::anyhow!("{e}"))
            .with_context(|| format!("saving {}", path.display()))?;
        info!(path = %path.display(), "saved magnetization chart");
    }

    println!(
        "sweep complete: {} points over T = {}..{}",
        points.len(),
        args.t_start,
        args.t_stop
    );
    println!("mean-field critical temperature: {tc:.3}");
    Ok(())
}

fn write_csv(
    path: &Path,
    points: &[SweepPoint],
    constants: &PhysicalConstants,
) -> std::io::Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "temperature,mean_spin,mean_field")?;
    for point in points {
        writeln!(
            out,
            "{},{},{}",
            point.temperature,
            point.mean_spin,
            mean_field_magnetization(point.temperature, constants)
        )?;
    }
    out.flush()
}
