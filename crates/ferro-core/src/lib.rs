//! Core types for the ferro lattice spin simulator.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental vocabulary used throughout the ferro workspace: the
//! two-valued [`Spin`] cell state, the [`PhysicalConstants`] that
//! parameterize the dynamics, and the [`StepError`] type.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod constants;
mod error;
mod spin;

pub use constants::{PhysicalConstants, LATTICE_COORDINATION};
pub use error::StepError;
pub use spin::Spin;
