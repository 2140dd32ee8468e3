//! Simulation configuration, validation, and error types.

use ferro_core::PhysicalConstants;
use ferro_lattice::{LatticeError, SpinLattice};
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use tracing::warn;

// ── Interaction ────────────────────────────────────────────────────

/// Spin interaction model.
///
/// Only the 4-connected nearest-neighbour interaction is implemented;
/// the enum is the seam where longer-range models would plug in.
/// Unknown names are rejected when parsed, so an unsupported model can
/// never reach a running simulation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Interaction {
    /// Each cell couples to its cardinal neighbours only.
    #[default]
    NearestNeighbour,
}

impl Interaction {
    /// Canonical name, as accepted by the [`FromStr`] impl.
    pub fn name(self) -> &'static str {
        match self {
            Self::NearestNeighbour => "nearest-neighbour",
        }
    }
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Interaction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "nearest-neighbour" | "nearest_neighbour" => Ok(Self::NearestNeighbour),
            _ => Err(ConfigError::UnsupportedInteraction {
                name: s.to_string(),
            }),
        }
    }
}

// ── ConfigError ────────────────────────────────────────────────────

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// Lattice dimensions failed validation.
    Lattice(LatticeError),
    /// The named interaction model is not implemented.
    UnsupportedInteraction {
        /// The requested model name.
        name: String,
    },
    /// A physical constant is outside its legal range.
    InvalidConstant {
        /// Which constant was rejected.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lattice(e) => write!(f, "lattice: {e}"),
            Self::UnsupportedInteraction { name } => {
                write!(f, "unsupported interaction model '{name}'")
            }
            Self::InvalidConstant { name, value } => {
                write!(f, "constant {name} has invalid value {value}")
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Lattice(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LatticeError> for ConfigError {
    fn from(e: LatticeError) -> Self {
        Self::Lattice(e)
    }
}

// ── SimConfig ──────────────────────────────────────────────────────

/// Complete configuration for constructing a [`Simulation`](crate::Simulation).
///
/// Plain data with public fields; [`validate()`](SimConfig::validate)
/// checks every invariant before the simulation allocates anything.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Lattice width in cells.
    pub width: u32,
    /// Lattice height in cells.
    pub height: u32,
    /// Interaction model.
    pub interaction: Interaction,
    /// Physical constants for the dynamics.
    pub constants: PhysicalConstants,
    /// RNG seed. A fixed seed with a fixed temperature schedule
    /// reproduces a run exactly.
    pub seed: u64,
}

impl SimConfig {
    /// Configuration with the given dimensions and defaults for
    /// everything else (nearest-neighbour, natural units, seed 0).
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            interaction: Interaction::default(),
            constants: PhysicalConstants::default(),
            seed: 0,
        }
    }

    /// Validate all structural invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // 1. Dimensions must describe a constructible lattice.
        SpinLattice::validate_dims(self.width, self.height)?;

        // 2. The Boltzmann constant must keep k*T positive for every
        //    positive temperature.
        let k = self.constants.boltzmann;
        if !k.is_finite() || k <= 0.0 {
            return Err(ConfigError::InvalidConstant {
                name: "boltzmann",
                value: k,
            });
        }

        // 3. The coupling must be finite. Non-positive J is legal but
        //    rarely intended, so it is logged once here instead of in
        //    the per-cell energy path.
        let j = self.constants.coupling;
        if !j.is_finite() {
            return Err(ConfigError::InvalidConstant {
                name: "coupling",
                value: j,
            });
        }
        if j < 0.0 {
            warn!("coupling {j} is negative; the interaction is antiferromagnetic");
        } else if j == 0.0 {
            warn!("coupling is zero; spins evolve as independent fair coins");
        }

        Ok(())
    }
}
