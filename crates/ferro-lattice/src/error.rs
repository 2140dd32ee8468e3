//! Lattice construction errors.

use std::error::Error;
use std::fmt;

/// Errors detected while constructing a [`SpinLattice`](crate::SpinLattice).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LatticeError {
    /// A dimension is zero; the lattice must contain at least one cell.
    InvalidDimension {
        /// Which axis was rejected (`"width"` or `"height"`).
        name: &'static str,
    },
    /// A dimension exceeds the signed coordinate range used by
    /// neighbour arithmetic.
    DimensionTooLarge {
        /// Which axis was rejected (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The maximum permitted value.
        max: u32,
    },
}

impl fmt::Display for LatticeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDimension { name } => {
                write!(f, "{name} must be at least 1")
            }
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for LatticeError {}
