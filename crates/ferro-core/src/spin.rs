//! The two-valued cell state of an Ising lattice.

use rand::Rng;
use std::fmt;

/// A single lattice site's spin: down (−1) or up (+1).
///
/// The two-value invariant is structural. A cell can never hold zero,
/// a fraction, or an out-of-range magnitude, so every consumer of a
/// lattice slice may rely on `value()` returning exactly ±1.0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Spin {
    /// Spin pointing down; contributes −1 to sums.
    Down,
    /// Spin pointing up; contributes +1 to sums.
    Up,
}

impl Spin {
    /// Numeric value of the spin: −1.0 for [`Spin::Down`], +1.0 for [`Spin::Up`].
    pub fn value(self) -> f64 {
        match self {
            Self::Down => -1.0,
            Self::Up => 1.0,
        }
    }

    /// Draw a spin uniformly at random (fair coin) from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        if rng.random::<bool>() {
            Self::Up
        } else {
            Self::Down
        }
    }
}

impl fmt::Display for Spin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Down => write!(f, "-1"),
            Self::Up => write!(f, "+1"),
        }
    }
}
