//! Heat-bath resampling of a single cell.

use ferro_core::Spin;
use rand::Rng;

/// Exponent bound beyond which the Boltzmann ratio has rounded to
/// exactly 0 or 1 in `f64`. `exp` is never evaluated past it, so the
/// probability saturates instead of overflowing to infinity.
const EXP_SATURATION: f64 = 700.0;

/// Probability that a cell resamples to [`Spin::Up`].
///
/// Boltzmann weighting over the two outcomes, `w(s) = exp(-E_s / kT)`.
/// The down outcome has energy `-energy_up` (the local energy is
/// antisymmetric in the spin), which reduces the ratio to the logistic
/// form `1 / (1 + exp(2 * energy_up / kT))`. The cell's current spin
/// plays no role.
///
/// `energy_up` is the cell's local energy evaluated with spin up;
/// `thermal_energy` is `k * T`, positive because the temperature is
/// validated before any energy is computed.
///
/// Limiting behaviour: at high temperature the exponent flattens and
/// the result approaches 0.5; at low temperature with an aligned
/// neighbourhood (`energy_up < 0`) it approaches 1. Extreme ratios
/// return exactly 0.0 or 1.0, never NaN or infinity.
pub fn spin_up_probability(energy_up: f64, thermal_energy: f64) -> f64 {
    debug_assert!(thermal_energy > 0.0, "thermal energy must be positive");
    let exponent = 2.0 * energy_up / thermal_energy;
    if exponent > EXP_SATURATION {
        return 0.0;
    }
    if exponent < -EXP_SATURATION {
        return 1.0;
    }
    1.0 / (1.0 + exponent.exp())
}

/// Draw the next spin for a cell with the given up-spin energy.
///
/// Consumes exactly one uniform draw from `rng` regardless of the
/// outcome, keeping the stream position independent of the sampled
/// values.
pub fn pick_spin<R: Rng + ?Sized>(rng: &mut R, energy_up: f64, thermal_energy: f64) -> Spin {
    let p_up = spin_up_probability(energy_up, thermal_energy);
    if rng.random::<f64>() < p_up {
        Spin::Up
    } else {
        Spin::Down
    }
}
