//! Engine error types.

use derive_more::{Display, Error};

/// A coordinate outside the 3×3 grid.
///
/// Raised when a caller hands the engine a position it could never have
/// produced from a 3×3 hit grid. Illegal moves are not errors; they come back
/// as [`MoveResult::Rejected`](crate::MoveResult::Rejected).
#[derive(Debug, Clone, PartialEq, Eq, Display, Error)]
#[display("Coordinate ({}, {}) is off the board at {}:{}", row, col, file, line)]
pub struct CoordError {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Line number where the error was raised.
    pub line: u32,
    /// Source file where the error was raised.
    pub file: &'static str,
}

impl CoordError {
    /// Creates a new coordinate error with caller location tracking.
    #[track_caller]
    pub fn new(row: usize, col: usize) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            row,
            col,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
