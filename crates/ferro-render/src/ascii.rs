//! Plain-text lattice frames.

use ferro_core::Spin;
use ferro_lattice::SpinLattice;

/// Render a lattice as text, one line per grid row.
///
/// Up spins print as `'#'` and down spins as `'.'`, so an ordered
/// lattice reads as a solid block and a hot one as salt-and-pepper
/// noise. Every line, including the last, ends with `'\n'`.
///
/// ```
/// use ferro_core::Spin;
/// use ferro_lattice::SpinLattice;
/// use ferro_render::lattice_frame;
///
/// let lattice = SpinLattice::filled(3, 2, Spin::Up).unwrap();
/// assert_eq!(lattice_frame(&lattice), "###\n###\n");
/// ```
pub fn lattice_frame(lattice: &SpinLattice) -> String {
    let width = lattice.width() as usize;
    let mut out = String::with_capacity((width + 1) * lattice.height() as usize);
    for row in lattice.rows() {
        for &spin in row {
            out.push(match spin {
                Spin::Up => '#',
                Spin::Down => '.',
            });
        }
        out.push('\n');
    }
    out
}
