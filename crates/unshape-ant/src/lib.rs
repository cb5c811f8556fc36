//! Langton's ant escaping a square grid.
//!
//! A single walker starts at the center of a `size × size` grid of white
//! cells, heading up. Every step it moves one cell, turns right on white or
//! left on colored, and flips the cell it entered. The walk ends when the
//! walker reaches an edge row or column; the grid is then counted and
//! exported as a black-and-white PNG.
//!
//! # Example
//!
//! ```
//! use unshape_ant::{Grid, Walker, simulate};
//!
//! // Step by step
//! let mut grid = Grid::new(3);
//! let mut walker = Walker::new(&mut grid);
//! walker.step();
//! assert!(walker.at_boundary());
//!
//! // Whole run
//! let outcome = simulate(64);
//! assert_eq!(outcome.scan.colored(), 800);
//! ```

mod cell;
mod error;
mod export;
mod grid;
mod heading;
mod simulation;
mod walker;

pub use cell::Cell;
pub use error::AntError;
pub use export::{default_file_name, export_png, write_png};
pub use grid::{Grid, Scan};
pub use heading::Heading;
pub use simulation::{DEFAULT_SIZE, Outcome, RunReport, SimulationConfig, run, simulate};
pub use walker::{StepEvent, Walker, initial_position};
