//! Ferro: a thermal lattice spin simulator with a mean-field theory oracle.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! ferro sub-crates. For most users, adding `ferro` as a single dependency is
//! sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use ferro::prelude::*;
//!
//! // A 16×16 lattice in natural units with a fixed seed.
//! let mut config = SimConfig::new(16, 16);
//! config.seed = 42;
//!
//! let mut sim = Simulation::new(config).unwrap();
//! for _ in 0..50 {
//!     sim.step(1.5).unwrap();
//! }
//!
//! assert_eq!(sim.history().len(), 50);
//! assert!(sim.average_spin().abs() <= 1.0);
//!
//! // Compare against the mean-field prediction at the same temperature.
//! let theory = mean_field_magnetization(1.5, &sim.constants());
//! assert!((0.0..=1.0).contains(&theory));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for items not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `ferro-core` | Spins, physical constants, the step error |
//! | [`lattice`] | `ferro-lattice` | 2D spin grid and neighbour queries |
//! | [`dynamics`] | `ferro-dynamics` | Heat-bath engine and configuration |
//! | [`analysis`] | `ferro-analysis` | Series helpers, sweeps, mean-field theory |
//! | [`render`] | `ferro-render` | ASCII frames and magnetization charts |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Spins, physical constants, and the step error (`ferro-core`).
pub use ferro_core as types;

/// 2D spin grid and neighbour queries (`ferro-lattice`).
///
/// [`lattice::SpinLattice`] owns the cell storage; open boundaries mean
/// edge and corner cells simply have fewer neighbours.
pub use ferro_lattice as lattice;

/// Heat-bath simulation engine and configuration (`ferro-dynamics`).
///
/// [`dynamics::Simulation`] is the main entry point: configure it with
/// [`dynamics::SimConfig`] and advance it one synchronous generation at
/// a time with [`dynamics::Simulation::step`].
pub use ferro_dynamics as dynamics;

/// Series helpers, temperature sweeps, and mean-field theory
/// (`ferro-analysis`).
///
/// [`analysis::run_sweep`] measures magnetization across a temperature
/// range; [`analysis::mean_field_magnetization`] is the closed-form
/// prediction to compare it against.
pub use ferro_analysis as analysis;

/// ASCII frames and magnetization charts (`ferro-render`).
pub use ferro_render as render;

/// Common imports for typical ferro usage.
///
/// ```rust
/// use ferro::prelude::*;
/// ```
///
/// This imports the most frequently used items: the simulation engine and
/// its configuration, the lattice, sweep tooling, and the theory oracle.
pub mod prelude {
    // Core types
    pub use ferro_core::{PhysicalConstants, Spin, StepError, LATTICE_COORDINATION};

    // Lattice
    pub use ferro_lattice::{LatticeError, SpinLattice};

    // Dynamics
    pub use ferro_dynamics::{ConfigError, Interaction, SimConfig, Simulation};

    // Analysis
    pub use ferro_analysis::{
        critical_temperature, mean_field_magnetization, moving_average, run_sweep, tail_mean,
        SweepConfig, SweepError, SweepPoint,
    };

    // Render
    pub use ferro_render::{lattice_frame, save_magnetization_chart};
}
