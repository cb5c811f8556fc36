//! The walker: a two-color Langton's ant that stops at the grid edge.
//!
//! Each step moves first, then turns according to the color the entered
//! cell had before this visit, then flips that cell:
//!
//! ```text
//! position += heading
//! heading   = heading.next(cell.colored)
//! cell.toggle()
//! ```
//!
//! The run ends as soon as the walker stands on row 0, column 0, the last
//! row or the last column. The boundary test happens before every step, so
//! the cell on the boundary is never read.

use tracing::trace;

use crate::grid::Grid;
use crate::heading::Heading;

/// Returns the starting coordinate for a grid of `size`: its center.
pub fn initial_position(size: usize) -> (usize, usize) {
    let center = size / 2;
    (center, center)
}

/// What happened during a single [`Walker::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEvent {
    /// Cell entered by this step.
    pub position: (usize, usize),
    /// Heading used to move into `position`.
    pub previous_heading: Heading,
    /// Heading after the turn.
    pub heading: Heading,
    /// Color of the entered cell before it was toggled.
    pub was_colored: bool,
}

/// Walker bound to a grid it mutates but does not own.
///
/// # Example
///
/// ```
/// use unshape_ant::{Grid, Walker};
///
/// let mut grid = Grid::new(64);
/// let steps = Walker::new(&mut grid).run();
/// assert!(steps > 0);
/// assert!(grid.colored_count() > 0);
/// ```
#[derive(Debug)]
pub struct Walker<'a> {
    grid: &'a mut Grid,
    row: usize,
    col: usize,
    heading: Heading,
    steps: u64,
}

impl<'a> Walker<'a> {
    /// Places a walker at the grid center, heading up.
    pub fn new(grid: &'a mut Grid) -> Self {
        let position = initial_position(grid.size());
        Self::with_state(grid, position, Heading::Up)
    }

    /// Places a walker at an explicit position and heading.
    ///
    /// # Panics
    ///
    /// Panics if `position` lies outside the grid.
    pub fn with_state(grid: &'a mut Grid, position: (usize, usize), heading: Heading) -> Self {
        let (row, col) = position;
        assert!(
            row < grid.size() && col < grid.size(),
            "walker start ({row}, {col}) outside {0}x{0} grid",
            grid.size()
        );
        Self {
            grid,
            row,
            col,
            heading,
            steps: 0,
        }
    }

    /// Returns the current `(row, col)`.
    pub fn position(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Returns the current heading.
    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Returns the number of steps taken so far.
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns the grid the walker is moving over.
    pub fn grid(&self) -> &Grid {
        &*self.grid
    }

    /// Returns true when the walker stands on an edge row or column.
    pub fn at_boundary(&self) -> bool {
        let last = self.grid.size() - 1;
        self.row == 0 || self.col == 0 || self.row == last || self.col == last
    }

    /// Advances one step.
    ///
    /// # Panics
    ///
    /// Panics if called while [`at_boundary`](Self::at_boundary) holds; the
    /// run is already over.
    pub fn step(&mut self) -> StepEvent {
        assert!(
            !self.at_boundary(),
            "step called on the boundary at ({}, {})",
            self.row,
            self.col
        );

        let previous_heading = self.heading;
        let (dr, dc) = previous_heading.offset();
        // Interior positions are at least 1 away from every edge.
        self.row = self.row.wrapping_add_signed(dr);
        self.col = self.col.wrapping_add_signed(dc);

        let cell = self.grid.cell_at_mut(self.row, self.col);
        let was_colored = cell.is_colored();
        self.heading = previous_heading.next(was_colored);
        cell.toggle();

        self.steps += 1;

        StepEvent {
            position: (self.row, self.col),
            previous_heading,
            heading: self.heading,
            was_colored,
        }
    }

    /// Steps until the boundary is reached, returning the steps taken.
    pub fn run(&mut self) -> u64 {
        self.run_with(|_| {})
    }

    /// Like [`run`](Self::run), calling `observe` after every step.
    pub fn run_with<F: FnMut(StepEvent)>(&mut self, mut observe: F) -> u64 {
        let start = self.steps;
        while !self.at_boundary() {
            let event = self.step();
            trace!(
                row = event.position.0,
                col = event.position.1,
                heading = ?event.heading,
                was_colored = event.was_colored,
                "step"
            );
            observe(event);
        }
        self.steps - start
    }
}
