//! Benchmark profiles for the ferro simulator.
//!
//! Pre-built configurations shared by the criterion benches:
//!
//! - [`reference_config`]: 100x100 lattice (10K cells)
//! - [`stress_config`]: 316x316 lattice (~100K cells)

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use ferro_dynamics::SimConfig;

/// Reference benchmark profile: 100x100 lattice (10K cells).
pub fn reference_config(seed: u64) -> SimConfig {
    let mut config = SimConfig::new(100, 100);
    config.seed = seed;
    config
}

/// Stress benchmark profile: 316x316 lattice (~100K cells).
///
/// Same dynamics as [`reference_config`] at 10x the cell count.
pub fn stress_config(seed: u64) -> SimConfig {
    let mut config = SimConfig::new(316, 316);
    config.seed = seed;
    config
}
