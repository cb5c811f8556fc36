//! Square grid of binary cells.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::cell::Cell;

/// A `size × size` grid of [`Cell`]s stored row-major.
///
/// Coordinates are `(row, col)` with `0 <= row, col < size`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Grid {
    cells: Vec<Cell>,
    size: usize,
}

/// Snapshot of a grid produced by [`Grid::scan_and_count`].
///
/// Always `size` rows of `size` entries; only a [`Grid`] builds one.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Scan {
    size: usize,
    pub(crate) colored: usize,
    white: Vec<Vec<bool>>,
}

impl Scan {
    /// Returns the grid dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the number of colored cells.
    pub fn colored(&self) -> usize {
        self.colored
    }

    /// Returns the rows of the matrix; `rows()[row][col]` is true for
    /// background cells.
    pub fn rows(&self) -> &[Vec<bool>] {
        &self.white
    }

    /// Returns true if the cell at `(row, col)` was background.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn is_white(&self, row: usize, col: usize) -> bool {
        self.white[row][col]
    }
}

impl Grid {
    /// Creates a grid with every cell uncolored.
    ///
    /// # Panics
    ///
    /// Panics if `size` is zero or `size * size` overflows `usize`.
    pub fn new(size: usize) -> Self {
        assert!(size > 0, "grid size must be positive");
        let len = size
            .checked_mul(size)
            .expect("grid size overflows the cell count");
        Self {
            cells: vec![Cell::new(); len],
            size,
        }
    }

    /// Returns the grid dimension.
    pub fn size(&self) -> usize {
        self.size
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) outside {0}x{0} grid",
            self.size
        );
        row * self.size + col
    }

    /// Returns the cell at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn cell_at(&self, row: usize, col: usize) -> &Cell {
        &self.cells[self.index(row, col)]
    }

    /// Returns the cell at `(row, col)` mutably.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate is out of bounds.
    pub fn cell_at_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        let i = self.index(row, col);
        &mut self.cells[i]
    }

    /// Counts colored cells.
    pub fn colored_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_colored()).count()
    }

    /// Scans every cell in row-major order, counting colored cells and
    /// collecting the white/black matrix for rendering.
    pub fn scan_and_count(&self) -> Scan {
        let mut colored = 0;
        let white: Vec<Vec<bool>> = self
            .cells
            .chunks(self.size)
            .map(|row| {
                row.iter()
                    .map(|cell| {
                        if cell.is_colored() {
                            colored += 1;
                        }
                        cell.is_white()
                    })
                    .collect::<Vec<bool>>()
            })
            .collect();

        Scan {
            size: self.size,
            colored,
            white,
        }
    }
}
