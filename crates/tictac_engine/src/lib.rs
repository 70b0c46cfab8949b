//! Pure tic-tac-toe game logic.
//!
//! The engine owns the 3×3 board, enforces move legality, detects wins and
//! draws, and reports every move as a structured [`MoveResult`]. It knows
//! nothing about presentation: a front end forwards input coordinates and
//! renders whatever comes back.
//!
//! # Example
//!
//! ```
//! use tictac_engine::{GameEngine, MoveResult, Outcome, Player, WinInfo};
//!
//! let mut engine = GameEngine::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
//!     engine.attempt_move(row, col)?;
//! }
//! let result = engine.attempt_move(0, 2)?;
//! assert_eq!(
//!     result,
//!     MoveResult::Accepted { player: Player::X, outcome: Outcome::Won(WinInfo::row(0)) }
//! );
//! assert!(engine.is_over());
//! # Ok::<(), tictac_engine::CoordError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod engine;
mod error;
pub mod invariants;
mod outcome;
pub mod rules;
mod types;

pub use engine::GameEngine;
pub use error::CoordError;
pub use invariants::{EngineInvariants, Invariant, InvariantSet, InvariantViolation};
pub use outcome::{InvalidLine, LineKind, MoveResult, Outcome, Rejection, WinInfo};
pub use types::{Board, Cell, Coord, Player, SIZE};
