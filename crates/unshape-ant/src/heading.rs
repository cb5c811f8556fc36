//! Headings and the two-color turning rule.
//!
//! Rows grow downward, so `Up` is `(-1, 0)` in `(row, col)` terms.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Axis-aligned single-step heading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Heading {
    /// Toward row 0.
    Up,
    /// Toward the last row.
    Down,
    /// Toward column 0.
    Left,
    /// Toward the last column.
    Right,
}

/// Next heading, indexed by `[heading.index()][colored as usize]`.
const TURN_TABLE: [[Heading; 2]; 4] = [
    // Up
    [Heading::Right, Heading::Left],
    // Down
    [Heading::Left, Heading::Right],
    // Left
    [Heading::Up, Heading::Down],
    // Right
    [Heading::Down, Heading::Up],
];

impl Heading {
    /// All four headings.
    pub const ALL: [Heading; 4] = [Heading::Up, Heading::Down, Heading::Left, Heading::Right];

    fn index(self) -> usize {
        match self {
            Heading::Up => 0,
            Heading::Down => 1,
            Heading::Left => 2,
            Heading::Right => 3,
        }
    }

    /// Returns the `(d_row, d_col)` unit step for this heading.
    pub fn offset(self) -> (isize, isize) {
        match self {
            Heading::Up => (-1, 0),
            Heading::Down => (1, 0),
            Heading::Left => (0, -1),
            Heading::Right => (0, 1),
        }
    }

    /// Heading taken after entering a cell whose color before the visit was
    /// `colored`: clockwise off white cells, counter-clockwise off colored
    /// ones.
    pub fn next(self, colored: bool) -> Self {
        TURN_TABLE[self.index()][colored as usize]
    }
}
