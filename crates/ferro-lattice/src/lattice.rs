//! Row-major spin grid with 4-connected open-boundary neighbourhood.

use crate::error::LatticeError;
use ferro_core::Spin;
use rand::Rng;
use smallvec::SmallVec;

/// A two-dimensional grid of spins.
///
/// Cells are addressed `(x, y)` with `0 <= x < width` and
/// `0 <= y < height`, stored row-major (`y * width + x`). Neighbours are
/// the four cardinal directions; positions past the boundary contribute
/// nothing (corners have 2 neighbours, edges 3, interior cells 4, and a
/// 1×1 lattice has none).
///
/// The shape is fixed at construction. Mutation goes through
/// [`cells_mut`](SpinLattice::cells_mut), which exposes cell values but
/// not the shape, so the dimension invariants cannot be broken after
/// `new` succeeds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpinLattice {
    width: u32,
    height: u32,
    cells: Vec<Spin>,
}

impl SpinLattice {
    /// Maximum dimension size: neighbour arithmetic is signed, so each
    /// axis must fit in `i32`.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a lattice with every cell drawn uniformly at random.
    ///
    /// Returns `Err(LatticeError::InvalidDimension)` if either dimension
    /// is 0, or `Err(LatticeError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](SpinLattice::MAX_DIM).
    pub fn random<R: Rng + ?Sized>(
        width: u32,
        height: u32,
        rng: &mut R,
    ) -> Result<Self, LatticeError> {
        Self::validate_dims(width, height)?;
        let count = (width as usize) * (height as usize);
        let cells = (0..count).map(|_| Spin::random(rng)).collect();
        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Create a lattice with every cell set to `spin`.
    ///
    /// Same dimension validation as [`random`](SpinLattice::random).
    ///
    /// # Examples
    ///
    /// ```
    /// use ferro_core::Spin;
    /// use ferro_lattice::SpinLattice;
    ///
    /// let lattice = SpinLattice::filled(4, 3, Spin::Up).unwrap();
    /// assert_eq!(lattice.cell_count(), 12);
    /// assert_eq!(lattice.mean_spin(), 1.0);
    ///
    /// // Corner cells have exactly two neighbours.
    /// assert_eq!(lattice.neighbour_spins(0, 0).len(), 2);
    /// ```
    pub fn filled(width: u32, height: u32, spin: Spin) -> Result<Self, LatticeError> {
        Self::validate_dims(width, height)?;
        let count = (width as usize) * (height as usize);
        Ok(Self {
            width,
            height,
            cells: vec![spin; count],
        })
    }

    /// Check dimensions without constructing a lattice.
    ///
    /// Configuration validation calls this to reject bad shapes before
    /// any allocation happens.
    pub fn validate_dims(width: u32, height: u32) -> Result<(), LatticeError> {
        if width == 0 {
            return Err(LatticeError::InvalidDimension { name: "width" });
        }
        if height == 0 {
            return Err(LatticeError::InvalidDimension { name: "height" });
        }
        if width > Self::MAX_DIM {
            return Err(LatticeError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(LatticeError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        Ok(())
    }

    /// Number of columns.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Total cell count (`width * height`).
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Row-major index of an in-bounds coordinate.
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// The spin at `(x, y)`, or `None` if the coordinate is out of
    /// bounds on either axis (including negative positions).
    pub fn get(&self, x: i64, y: i64) -> Option<Spin> {
        if x < 0 || y < 0 || x >= i64::from(self.width) || y >= i64::from(self.height) {
            return None;
        }
        Some(self.cells[self.index(x as u32, y as u32)])
    }

    /// The spins of the up-to-four cardinal neighbours of `(x, y)`.
    ///
    /// Out-of-bounds positions are skipped, never wrapped or clamped,
    /// so the returned length is the cell's actual coordination count.
    pub fn neighbour_spins(&self, x: u32, y: u32) -> SmallVec<[Spin; 4]> {
        let offsets: [(i64, i64); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
        let mut result = SmallVec::new();
        for (dx, dy) in offsets {
            if let Some(spin) = self.get(i64::from(x) + dx, i64::from(y) + dy) {
                result.push(spin);
            }
        }
        result
    }

    /// Mean spin value over all cells, in `[-1.0, 1.0]`.
    pub fn mean_spin(&self) -> f64 {
        let sum: f64 = self.cells.iter().map(|s| s.value()).sum();
        sum / self.cells.len() as f64
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> &[Spin] {
        &self.cells
    }

    /// Mutable access to the cell values in row-major order.
    pub fn cells_mut(&mut self) -> &mut [Spin] {
        &mut self.cells
    }

    /// Iterate over the rows of the lattice, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Spin]> {
        self.cells.chunks_exact(self.width as usize)
    }
}
