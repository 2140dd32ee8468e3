//! Text frames and magnetization charts.
//!
//! Stateless consumers of simulation output: [`lattice_frame`] renders
//! a lattice as one text row per grid row, and
//! [`save_magnetization_chart`] plots simulated sweep points against
//! the mean-field curve as a PNG.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod ascii;
mod chart;

pub use ascii::lattice_frame;
pub use chart::save_magnetization_chart;
