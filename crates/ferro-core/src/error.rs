//! Error types shared across the ferro workspace.

use std::error::Error;
use std::fmt;

/// Errors from advancing a simulation one step.
///
/// A failed step leaves the simulation untouched: the lattice, history,
/// and RNG stream are exactly as they were before the call.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StepError {
    /// Temperature is NaN, infinite, zero, or negative. The Boltzmann
    /// factor is undefined outside `T > 0`.
    InvalidTemperature {
        /// The rejected value.
        value: f64,
    },
}

impl fmt::Display for StepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidTemperature { value } => {
                write!(f, "temperature must be finite and positive, got {value}")
            }
        }
    }
}

impl Error for StepError {}
