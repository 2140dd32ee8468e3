//! Local interaction energy of a spin in its neighbourhood.

use ferro_core::Spin;

/// Interaction energy of `spin` embedded in `neighbours`:
/// `E = -(J / 2) * s * Σ nᵢ`.
///
/// The half factor splits each bond's energy between its two endpoint
/// cells, so summing the local energy over every cell counts each bond
/// once. Accepts any neighbour count from 0 (a 1×1 lattice) upward;
/// with no neighbours the energy is 0 for either spin.
///
/// Pure arithmetic, no range checks: the coupling is validated by
/// [`SimConfig::validate`](crate::SimConfig::validate) before a
/// simulation is built.
pub fn local_energy(spin: Spin, neighbours: &[Spin], coupling: f64) -> f64 {
    let field: f64 = neighbours.iter().map(|n| n.value()).sum();
    -(coupling / 2.0) * spin.value() * field
}
