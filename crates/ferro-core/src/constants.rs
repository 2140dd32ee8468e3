//! Physical constants shared by the dynamics and the mean-field oracle.

/// Nearest-neighbour coordination number of the square lattice.
///
/// Every interior cell couples to exactly four neighbours; the mean-field
/// self-consistency equation and the critical temperature both scale with
/// this value.
pub const LATTICE_COORDINATION: f64 = 4.0;

/// Physical constants parameterizing the spin dynamics.
///
/// Defaults are natural units: coupling J = 1 and Boltzmann constant
/// k = 1, which places the mean-field critical temperature at
/// `J * 4 / k = 4` in simulation temperature units.
///
/// Constants are plain data here; range checks live in the simulation
/// configuration's `validate()` pass.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PhysicalConstants {
    /// Exchange coupling J between neighbouring spins. Positive values
    /// are ferromagnetic (alignment lowers energy); zero disables the
    /// interaction entirely.
    pub coupling: f64,
    /// Boltzmann constant k converting temperature to thermal energy.
    pub boltzmann: f64,
}

impl Default for PhysicalConstants {
    fn default() -> Self {
        Self {
            coupling: 1.0,
            boltzmann: 1.0,
        }
    }
}

impl PhysicalConstants {
    /// Thermal energy `k * T` at the given temperature.
    pub fn thermal_energy(&self, temperature: f64) -> f64 {
        self.boltzmann * temperature
    }
}
