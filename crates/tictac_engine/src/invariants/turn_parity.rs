//! Turn parity invariant: the turn marker follows the number of marks.

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: while the game runs, X moves after an even number of marks and
/// O after an odd number.
///
/// Once the game is over the marker is frozen on the last mover, so the check
/// only applies in progress.
pub struct TurnParityInvariant;

impl Invariant<GameEngine> for TurnParityInvariant {
    fn holds(engine: &GameEngine) -> bool {
        if engine.is_over() {
            return true;
        }
        let expected = if engine.move_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        engine.current_player() == expected
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coord};

    #[test]
    fn test_alternating_sequence_holds() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (1, 1), (0, 2), (2, 0)] {
            engine.attempt_move(row, col).unwrap();
            assert!(TurnParityInvariant::holds(&engine));
        }
        assert_eq!(engine.current_player(), Player::X);
    }

    #[test]
    fn test_mark_without_turn_change_violates() {
        let mut engine = GameEngine::new();
        engine.corrupt(Coord::at(0, 0), Cell::MarkedX);
        assert!(!TurnParityInvariant::holds(&engine));
    }
}
