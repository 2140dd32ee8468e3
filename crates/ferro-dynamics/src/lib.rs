//! Heat-bath spin dynamics and the lattice simulation engine.
//!
//! The pieces, bottom up:
//!
//! - [`local_energy`]: interaction energy of one spin against its
//!   neighbourhood.
//! - [`spin_up_probability`] / [`pick_spin`]: Boltzmann-weighted
//!   resampling of a single cell at a given thermal energy.
//! - [`SimConfig`] / [`Simulation`]: validated configuration and the
//!   stepper that advances a whole lattice synchronously, one energy
//!   snapshot and one buffer swap per step.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod energy;
mod selector;
mod simulation;

pub use config::{ConfigError, Interaction, SimConfig};
pub use energy::local_energy;
pub use selector::{pick_spin, spin_up_probability};
pub use simulation::Simulation;
