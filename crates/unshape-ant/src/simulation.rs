//! Run configuration and end-to-end orchestration.

use std::path::{Path, PathBuf};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::AntError;
use crate::export::{default_file_name, export_png};
use crate::grid::{Grid, Scan};
use crate::heading::Heading;
use crate::walker::Walker;

/// Grid size used when none is given.
pub const DEFAULT_SIZE: usize = 1024;

/// Configuration for a single run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Grid dimension.
    pub size: usize,
    /// Where to write the PNG. Defaults to `ant_{size}.png`.
    pub output: Option<PathBuf>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            output: None,
        }
    }
}

impl SimulationConfig {
    /// Creates a config for the given grid size.
    pub fn new(size: usize) -> Self {
        Self {
            size,
            ..Default::default()
        }
    }

    /// Sets the output path.
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Returns the path the image will be written to.
    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| PathBuf::from(default_file_name(self.size)))
    }

    /// Checks the config before anything is allocated.
    ///
    /// The size must be positive, `size * size` cells must be addressable,
    /// and the side must fit a PNG dimension.
    pub fn validate(&self) -> Result<(), AntError> {
        let addressable = self.size.checked_mul(self.size).is_some();
        if self.size == 0 || !addressable || u32::try_from(self.size).is_err() {
            return Err(AntError::InvalidSize(self.size));
        }
        Ok(())
    }
}

/// Final state of a simulation, before export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    /// Grid snapshot with the colored count.
    pub scan: Scan,
    /// Steps executed.
    pub steps: u64,
    /// Where the walker stopped.
    pub final_position: (usize, usize),
    /// Heading the walker stopped with.
    pub final_heading: Heading,
}

/// Summary of a completed run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RunReport {
    /// Grid dimension.
    pub size: usize,
    /// Steps executed.
    pub steps: u64,
    /// Colored cells left behind.
    pub colored: usize,
    /// Image that was written.
    pub output: PathBuf,
}

/// Runs the walker on a fresh grid of `size` until it reaches the edge.
///
/// # Panics
///
/// Panics if `size` is zero.
pub fn simulate(size: usize) -> Outcome {
    let mut grid = Grid::new(size);
    let mut walker = Walker::new(&mut grid);
    debug!(size, start = ?walker.position(), "starting walk");

    let steps = walker.run();
    let final_position = walker.position();
    let final_heading = walker.heading();
    debug!(steps, end = ?final_position, "walker reached the boundary");

    Outcome {
        scan: grid.scan_and_count(),
        steps,
        final_position,
        final_heading,
    }
}

/// Simulates, writes the image and reports the colored count.
///
/// A failed export aborts the run.
pub fn run(config: &SimulationConfig) -> Result<RunReport, AntError> {
    config.validate()?;

    let outcome = simulate(config.size);
    let output = config.output_path();
    export_png(&outcome.scan, &output)?;

    Ok(RunReport {
        size: config.size,
        steps: outcome.steps,
        colored: outcome.scan.colored(),
        output,
    })
}

impl RunReport {
    /// Returns the path of the written image.
    pub fn output(&self) -> &Path {
        &self.output
    }
}
