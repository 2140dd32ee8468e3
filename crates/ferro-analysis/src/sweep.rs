//! Temperature sweep campaigns over fresh simulations.

use crate::series::{linspace, tail_mean};
use ferro_core::{PhysicalConstants, StepError};
use ferro_dynamics::{ConfigError, Interaction, SimConfig, Simulation};
use std::error::Error;
use std::fmt;
use tracing::{debug, info};

// ── SweepError ─────────────────────────────────────────────────────

/// Errors raised while validating or running a sweep.
#[derive(Clone, Debug, PartialEq)]
pub enum SweepError {
    /// The temperature range is empty, inverted, or non-physical.
    InvalidRange {
        /// Requested start temperature.
        start: f64,
        /// Requested stop temperature.
        stop: f64,
    },
    /// A count field that must be at least one was zero.
    ZeroCount {
        /// Which field was rejected.
        name: &'static str,
    },
    /// The per-temperature simulation configuration was invalid.
    Config(ConfigError),
    /// A simulation step failed mid-sweep.
    Step(StepError),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRange { start, stop } => {
                write!(f, "temperature range [{start}, {stop}] is not a valid sweep")
            }
            Self::ZeroCount { name } => write!(f, "{name} must be at least 1"),
            Self::Config(e) => write!(f, "simulation config: {e}"),
            Self::Step(e) => write!(f, "simulation step: {e}"),
        }
    }
}

impl Error for SweepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Step(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigError> for SweepError {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<StepError> for SweepError {
    fn from(e: StepError) -> Self {
        Self::Step(e)
    }
}

// ── SweepConfig ────────────────────────────────────────────────────

/// Configuration for a temperature sweep.
///
/// Each sampled temperature gets its own freshly seeded simulation, so
/// the measured points are independent of sweep direction and of each
/// other. The per-temperature seed is `seed ^ index`, which keeps the
/// whole campaign reproducible from a single seed while giving every
/// temperature a distinct stream.
#[derive(Clone, Debug, PartialEq)]
pub struct SweepConfig {
    /// Lowest sampled temperature.
    pub t_start: f64,
    /// Highest sampled temperature.
    pub t_stop: f64,
    /// Number of temperatures, spaced evenly over the closed range.
    pub samples: usize,
    /// Steps to run at each temperature before measuring.
    pub steps_per_temperature: usize,
    /// How many trailing history entries the measurement averages.
    pub tail_window: usize,
    /// Lattice width in cells.
    pub width: u32,
    /// Lattice height in cells.
    pub height: u32,
    /// Interaction model for every simulation in the sweep.
    pub interaction: Interaction,
    /// Physical constants for every simulation in the sweep.
    pub constants: PhysicalConstants,
    /// Base seed; temperature `index` runs with `seed ^ index`.
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            t_start: 0.1,
            t_stop: 5.0,
            samples: 1000,
            steps_per_temperature: 100,
            tail_window: 50,
            width: 20,
            height: 20,
            interaction: Interaction::default(),
            constants: PhysicalConstants::default(),
            seed: 0,
        }
    }
}

impl SweepConfig {
    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), SweepError> {
        // 1. The range must be finite, positive, and ascending. Equal
        //    endpoints are fine when only one sample is requested.
        let ascending = if self.samples == 1 {
            self.t_start <= self.t_stop
        } else {
            self.t_start < self.t_stop
        };
        if !self.t_start.is_finite()
            || !self.t_stop.is_finite()
            || self.t_start <= 0.0
            || !ascending
        {
            return Err(SweepError::InvalidRange {
                start: self.t_start,
                stop: self.t_stop,
            });
        }

        // 2. Every count drives a loop that must run at least once.
        if self.samples == 0 {
            return Err(SweepError::ZeroCount { name: "samples" });
        }
        if self.steps_per_temperature == 0 {
            return Err(SweepError::ZeroCount {
                name: "steps_per_temperature",
            });
        }
        if self.tail_window == 0 {
            return Err(SweepError::ZeroCount { name: "tail_window" });
        }

        // 3. The embedded simulation config must be constructible.
        self.sim_config(0).validate()?;

        Ok(())
    }

    fn sim_config(&self, index: usize) -> SimConfig {
        SimConfig {
            width: self.width,
            height: self.height,
            interaction: self.interaction,
            constants: self.constants,
            seed: self.seed ^ index as u64,
        }
    }
}

// ── SweepPoint ─────────────────────────────────────────────────────

/// One measured point of a sweep.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SweepPoint {
    /// The temperature this point was simulated at.
    pub temperature: f64,
    /// Tail-averaged mean spin of the equilibrated lattice.
    pub mean_spin: f64,
}

// ── run_sweep ──────────────────────────────────────────────────────

/// Run a full temperature sweep and return one point per temperature.
///
/// For each temperature a fresh simulation is constructed, stepped
/// [`steps_per_temperature`](SweepConfig::steps_per_temperature) times,
/// and measured as the mean of the last
/// [`tail_window`](SweepConfig::tail_window) history entries (or of the
/// whole history when it is shorter than the window).
///
/// The returned points are ordered by ascending temperature.
pub fn run_sweep(config: &SweepConfig) -> Result<Vec<SweepPoint>, SweepError> {
    config.validate()?;

    let temperatures = linspace(config.t_start, config.t_stop, config.samples);
    info!(
        samples = config.samples,
        t_start = config.t_start,
        t_stop = config.t_stop,
        width = config.width,
        height = config.height,
        "starting temperature sweep"
    );

    let mut points = Vec::with_capacity(temperatures.len());
    for (index, &temperature) in temperatures.iter().enumerate() {
        let mut simulation = Simulation::new(config.sim_config(index))?;
        for _ in 0..config.steps_per_temperature {
            simulation.step(temperature)?;
        }
        let mean_spin = tail_mean(simulation.history(), config.tail_window).unwrap_or(0.0);
        debug!(index, temperature, mean_spin, "sweep point measured");
        points.push(SweepPoint {
            temperature,
            mean_spin,
        });
    }

    info!(points = points.len(), "temperature sweep complete");
    Ok(points)
}
