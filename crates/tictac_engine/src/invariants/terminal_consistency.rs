//! Terminal consistency: a running game has no completed line and free cells.

use super::Invariant;
use crate::GameEngine;
use crate::rules::completed_line;

/// Invariant: if the game is not over, no line is complete and the board is
/// not full.
pub struct TerminalConsistencyInvariant;

impl Invariant<GameEngine> for TerminalConsistencyInvariant {
    fn holds(engine: &GameEngine) -> bool {
        engine.is_over()
            || (completed_line(engine.board()).is_none() && !engine.board().is_full())
    }

    fn description() -> &'static str {
        "A game in progress has no completed line and an empty cell"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coord};

    #[test]
    fn test_won_game_holds() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            engine.attempt_move(row, col).unwrap();
        }
        assert!(engine.is_over());
        assert!(TerminalConsistencyInvariant::holds(&engine));
    }

    #[test]
    fn test_unnoticed_line_violates() {
        let mut engine = GameEngine::new();
        for col in 0..3 {
            engine.corrupt(Coord::at(2, col), Cell::MarkedO);
        }
        assert!(!TerminalConsistencyInvariant::holds(&engine));
    }
}
