//! Error types for unshape-ant.

use thiserror::Error;

/// Errors surfaced by a simulation run.
#[derive(Debug, Error)]
pub enum AntError {
    /// Requested grid size cannot be simulated or encoded.
    #[error("invalid grid size {0}: must be positive and its square must fit in memory")]
    InvalidSize(usize),

    /// PNG encoding failed.
    #[error("png encoding failed: {0}")]
    Png(#[from] png::EncodingError),

    /// Creating or writing the output file failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),
}
