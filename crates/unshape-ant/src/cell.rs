//! Single binary grid cell.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One cell of the grid: either colored (black) or background (white).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Cell {
    colored: bool,
}

impl Cell {
    /// Creates an uncolored cell.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true if the cell has been colored.
    pub fn is_colored(&self) -> bool {
        self.colored
    }

    /// Returns true if the cell is background.
    pub fn is_white(&self) -> bool {
        !self.colored
    }

    /// Flips the cell's color.
    pub fn toggle(&mut self) {
        self.colored = !self.colored;
    }
}
