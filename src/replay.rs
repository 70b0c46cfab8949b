//! Non-interactive replay of a fixed move list.

use serde::Serialize;
use tictac_engine::{CoordError, GameEngine, MoveResult};
use tracing::{debug, instrument};

/// One replayed move and what the engine said about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplayStep {
    /// Requested row.
    pub row: usize,
    /// Requested column.
    pub col: usize,
    /// Engine result.
    pub result: MoveResult,
}

/// Full replay report: every step plus the final engine state.
#[derive(Debug, Clone, Serialize)]
pub struct ReplayReport {
    /// Results in input order.
    pub steps: Vec<ReplayStep>,
    /// Engine after the last move.
    pub engine: GameEngine,
}

/// Applies `moves` to a fresh engine.
///
/// Rejected moves are recorded and the replay continues; a coordinate off
/// the board stops it.
///
/// # Errors
///
/// Returns [`CoordError`] for the first move outside the board.
#[instrument(skip_all, fields(moves = moves.len()))]
pub fn replay(moves: &[(usize, usize)]) -> Result<ReplayReport, CoordError> {
    let mut engine = GameEngine::new();
    let steps = moves
        .iter()
        .map(|&(row, col)| -> Result<ReplayStep, CoordError> {
            let result = engine.attempt_move(row, col)?;
            debug!(row, col, ?result, "Replayed move");
            Ok(ReplayStep { row, col, result })
        })
        .collect::<Result<Vec<_>, _>>()?;
    Ok(ReplayReport { steps, engine })
}
