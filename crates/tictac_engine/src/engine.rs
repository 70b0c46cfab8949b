//! The game-state engine.
//!
//! [`GameEngine`] is the single source of truth for a game: it owns the board,
//! the turn marker and the game-over flag, and is the only thing that can
//! change them.

use crate::error::CoordError;
use crate::invariants::{EngineInvariants, InvariantSet};
use crate::outcome::{MoveResult, Outcome, Rejection};
use crate::rules::win_through;
use crate::types::{Board, Cell, Coord, Player};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
///
/// Lifecycle is `InProgress -> Terminal`, one way. Only [`reset`](Self::reset)
/// leaves the terminal state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameEngine {
    board: Board,
    current_player: Player,
    over: bool,
}

impl GameEngine {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            over: false,
        }
    }

    /// Attempts a move for the current player at `(row, col)`.
    ///
    /// Coordinates outside `0..3` are a caller bug, not a game event, and
    /// come back as [`CoordError`] without touching the game. Everything else
    /// is a [`MoveResult`].
    ///
    /// # Errors
    ///
    /// Returns [`CoordError`] if `row` or `col` is off the board.
    #[track_caller]
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn attempt_move(&mut self, row: usize, col: usize) -> Result<MoveResult, CoordError> {
        let at = Coord::new(row, col).inspect_err(|e| {
            warn!(row, col, error = %e, "Move outside the board");
        })?;
        Ok(self.play(at))
    }

    /// Places the current player's mark at `at`, if legal.
    ///
    /// Rejected moves leave the engine exactly as it was, so duplicate or
    /// late input is harmless.
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn play(&mut self, at: Coord) -> MoveResult {
        if self.over {
            debug!("Rejected: game is over");
            return MoveResult::Rejected(Rejection::GameOver);
        }
        if !self.board.is_empty_at(at) {
            debug!("Rejected: cell occupied");
            return MoveResult::Rejected(Rejection::Occupied);
        }

        let player = self.current_player;
        self.board.set(at, Cell::from(player));

        let outcome = if let Some(info) = win_through(&self.board, at) {
            self.over = true;
            info!(%player, line = %info, "Game won");
            Outcome::Won(info)
        } else if self.board.is_full() {
            self.over = true;
            info!("Game drawn");
            Outcome::Drawn
        } else {
            self.current_player = player.opponent();
            debug!(next = %self.current_player, "Move accepted");
            Outcome::Continuing
        };

        self.assert_invariants();
        MoveResult::Accepted { player, outcome }
    }

    /// Restores the construction-time state.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        debug!("Resetting game");
        *self = Self::new();
    }

    /// Read-only view of the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Whose move is next; frozen on the last mover once the game is over.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.over
    }

    /// Returns true if a move at `at` would be accepted.
    pub fn can_play(&self, at: Coord) -> bool {
        !self.over && self.board.is_empty_at(at)
    }

    /// Number of marks on the board.
    pub fn move_count(&self) -> usize {
        self.board.cells().filter(|(_, cell)| !cell.is_empty()).count()
    }

    fn assert_invariants(&self) {
        if cfg!(debug_assertions)
            && let Err(violations) = EngineInvariants::check_all(self)
        {
            for violation in &violations {
                warn!(%violation, "Engine invariant violated");
            }
            debug_assert!(violations.is_empty(), "Engine invariants violated: {violations:?}");
        }
    }

    /// Writes a cell directly, bypassing the rules, to build broken states.
    #[cfg(test)]
    pub(crate) fn corrupt(&mut self, at: Coord, cell: Cell) {
        self.board.set(at, cell);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::WinInfo;

    #[test]
    fn test_new_game() {
        let engine = GameEngine::new();
        assert_eq!(engine.current_player(), Player::X);
        assert!(!engine.is_over());
        assert_eq!(engine.board(), &Board::new());
        assert_eq!(engine.move_count(), 0);
    }

    #[test]
    fn test_first_move_continues() {
        let mut engine = GameEngine::new();
        let result = engine.play(Coord::at(1, 1));
        assert_eq!(
            result,
            MoveResult::Accepted {
                player: Player::X,
                outcome: Outcome::Continuing
            }
        );
        assert_eq!(engine.current_player(), Player::O);
        assert_eq!(engine.board().get(Coord::at(1, 1)), Cell::MarkedX);
    }

    #[test]
    fn test_occupied_cell_rejected() {
        let mut engine = GameEngine::new();
        engine.play(Coord::at(0, 0));
        let before = engine.clone();
        assert_eq!(
            engine.play(Coord::at(0, 0)),
            MoveResult::Rejected(Rejection::Occupied)
        );
        assert_eq!(engine, before);
    }

    #[test]
    fn test_win_freezes_turn() {
        let mut engine = GameEngine::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            engine.play(Coord::at(row, col));
        }
        let result = engine.play(Coord::at(0, 2));
        assert_eq!(result.win(), Some(WinInfo::row(0)));
        assert!(engine.is_over());
        assert_eq!(engine.current_player(), Player::X);
        assert!(!engine.can_play(Coord::at(2, 2)));
    }

    #[test]
    fn test_out_of_range_is_error() {
        let mut engine = GameEngine::new();
        let err = engine.attempt_move(3, 1).unwrap_err();
        assert_eq!((err.row, err.col), (3, 1));
        assert_eq!(engine, GameEngine::new());
    }

    #[test]
    fn test_reset() {
        let mut engine = GameEngine::new();
        engine.play(Coord::at(2, 2));
        engine.reset();
        assert_eq!(engine, GameEngine::new());
    }
}
