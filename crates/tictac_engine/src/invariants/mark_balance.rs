//! Mark balance invariant: X is never behind O, and never more than one ahead.

use super::Invariant;
use crate::{GameEngine, Player};

/// Invariant: `count(X) - count(O)` is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<GameEngine> for MarkBalanceInvariant {
    fn holds(engine: &GameEngine) -> bool {
        let x = engine.board().count(Player::X);
        let o = engine.board().count(Player::O);
        x == o || x == o + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O, or one more"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Coord};

    #[test]
    fn test_new_game_holds() {
        assert!(MarkBalanceInvariant::holds(&GameEngine::new()));
    }

    #[test]
    fn test_legal_moves_hold() {
        let mut engine = GameEngine::new();
        engine.attempt_move(1, 1).unwrap();
        assert!(MarkBalanceInvariant::holds(&engine));
        engine.attempt_move(0, 0).unwrap();
        assert!(MarkBalanceInvariant::holds(&engine));
    }

    #[test]
    fn test_extra_o_violates() {
        let mut engine = GameEngine::new();
        engine.corrupt(Coord::at(1, 1), Cell::MarkedO);
        assert!(!MarkBalanceInvariant::holds(&engine));
    }
}
