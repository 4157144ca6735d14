//! Error type shared by the puzzle loader, puzzle validation and solver configuration.

use thiserror::Error;

/// Errors surfaced before a solver run starts.
///
/// Non-convergence is not an error: a run that exhausts its budget
/// reports its best assignment through [`SaResult`](crate::sa::SaResult).
#[derive(Debug, Error)]
pub enum Error {
    /// The puzzle file could not be read.
    #[error("failed to read puzzle file: {0}")]
    Io(#[from] std::io::Error),

    /// A line of the puzzle file is malformed.
    #[error("line {line}: {message}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },

    /// The puzzle is structurally invalid (bad dimensions or clue placement).
    #[error("invalid puzzle: {0}")]
    InvalidPuzzle(String),

    /// A solver configuration parameter is out of range.
    #[error("invalid solver configuration: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;
