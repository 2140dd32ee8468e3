//! Magnetization aggregation, temperature sweeps, and the mean-field
//! theory oracle.
//!
//! The simulation engine records one mean-spin value per step; this
//! crate owns everything done with those series afterwards:
//!
//! - [`moving_average`] / [`tail_mean`] / [`linspace`]: series helpers.
//! - [`find_mean_field_solution`] and friends: the closed-form
//!   mean-field magnetization used as a theory overlay.
//! - [`SweepConfig`] / [`run_sweep`]: one fresh simulation per sampled
//!   temperature, aggregated into [`SweepPoint`]s.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod series;
mod sweep;
mod theory;

pub use series::{linspace, moving_average, tail_mean};
pub use sweep::{run_sweep, SweepConfig, SweepError, SweepPoint};
pub use theory::{
    critical_temperature, find_mean_field_solution, magnetization_curve, mean_field_magnetization,
};
