//! 2D spin lattice storage and neighbour queries.
//!
//! A [`SpinLattice`] is a `width × height` row-major grid of
//! [`Spin`](ferro_core::Spin) cells with a 4-connected open-boundary
//! neighbourhood: out-of-bounds neighbours are absent, so corner cells
//! have two neighbours, edge cells three, interior cells four, and the
//! degenerate 1×1 lattice none.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod lattice;

pub use error::LatticeError;
pub use lattice::SpinLattice;
