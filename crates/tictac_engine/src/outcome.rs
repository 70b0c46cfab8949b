//! Structured results reported by the engine.
//!
//! These are the engine's only output. A presentation layer matches on
//! [`MoveResult`] to decide what to draw; nothing here prescribes visuals.

use crate::types::{Coord, Player, SIZE};
use serde::{Deserialize, Serialize};

/// The four kinds of winning line on a 3×3 board.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
)]
pub enum LineKind {
    /// A horizontal line.
    #[strum(to_string = "row")]
    Row,
    /// A vertical line.
    #[strum(to_string = "column")]
    Column,
    /// Top-left to bottom-right.
    #[strum(to_string = "main diagonal")]
    MainDiagonal,
    /// Top-right to bottom-left.
    #[strum(to_string = "anti-diagonal")]
    AntiDiagonal,
}

/// Describes the line that completed a win.
///
/// `index` selects the row or column (0-2). Each diagonal exists once, so
/// diagonals always carry index 0. Deserializing checks the same rule, so a
/// `WinInfo` always names a line on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawWinInfo")]
pub struct WinInfo {
    kind: LineKind,
    index: usize,
}

#[derive(Deserialize)]
struct RawWinInfo {
    kind: LineKind,
    index: usize,
}

/// A serialized [`WinInfo`] that names no line on the board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("{} {} is not a line on the board", kind, index)]
pub struct InvalidLine {
    /// Kind as given.
    pub kind: LineKind,
    /// Index as given.
    pub index: usize,
}

impl TryFrom<RawWinInfo> for WinInfo {
    type Error = InvalidLine;

    fn try_from(raw: RawWinInfo) -> Result<Self, Self::Error> {
        let valid = match raw.kind {
            LineKind::Row | LineKind::Column => raw.index < SIZE,
            LineKind::MainDiagonal | LineKind::AntiDiagonal => raw.index == 0,
        };
        if valid {
            Ok(Self {
                kind: raw.kind,
                index: raw.index,
            })
        } else {
            Err(InvalidLine {
                kind: raw.kind,
                index: raw.index,
            })
        }
    }
}

impl WinInfo {
    /// A completed row.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a row (0-2).
    pub fn row(index: usize) -> Self {
        assert!(index < SIZE, "row {index} is off the board");
        Self {
            kind: LineKind::Row,
            index,
        }
    }

    /// A completed column.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not a column (0-2).
    pub fn column(index: usize) -> Self {
        assert!(index < SIZE, "column {index} is off the board");
        Self {
            kind: LineKind::Column,
            index,
        }
    }

    /// The completed main diagonal.
    pub fn main_diagonal() -> Self {
        Self {
            kind: LineKind::MainDiagonal,
            index: 0,
        }
    }

    /// The completed anti-diagonal.
    pub fn anti_diagonal() -> Self {
        Self {
            kind: LineKind::AntiDiagonal,
            index: 0,
        }
    }

    /// Kind of line.
    pub fn kind(&self) -> LineKind {
        self.kind
    }

    /// Row or column index; 0 for diagonals.
    pub fn index(&self) -> usize {
        self.index
    }

    /// The three cells of the line, in drawing order.
    ///
    /// Rows run left to right, columns top to bottom, the main diagonal from
    /// top-left and the anti-diagonal from top-right.
    pub fn cells(&self) -> [Coord; SIZE] {
        let i = self.index;
        match self.kind {
            LineKind::Row => [Coord::at(i, 0), Coord::at(i, 1), Coord::at(i, 2)],
            LineKind::Column => [Coord::at(0, i), Coord::at(1, i), Coord::at(2, i)],
            LineKind::MainDiagonal => [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
            LineKind::AntiDiagonal => [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
        }
    }

    /// Checks if `at` lies on this line.
    pub fn contains(&self, at: Coord) -> bool {
        self.cells().contains(&at)
    }
}

impl std::fmt::Display for WinInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            LineKind::Row | LineKind::Column => write!(f, "{} {}", self.kind, self.index),
            LineKind::MainDiagonal | LineKind::AntiDiagonal => write!(f, "{}", self.kind),
        }
    }
}

/// What an accepted move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Game goes on; the turn passed to the opponent.
    Continuing,
    /// The mover completed a line.
    Won(WinInfo),
    /// The board filled up with no line.
    Drawn,
}

impl Outcome {
    /// Returns true if the game ended with this move.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Continuing)
    }
}

/// Why a move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Rejection {
    /// The target cell already holds a mark.
    #[display("cell is already occupied")]
    Occupied,
    /// The game has already been won or drawn.
    #[display("game is already over")]
    GameOver,
}

/// Result of one move attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveResult {
    /// Illegal move; engine state is untouched.
    Rejected(Rejection),
    /// The mark was placed.
    Accepted {
        /// Who placed the mark.
        player: Player,
        /// Effect of the placement.
        outcome: Outcome,
    },
}

impl MoveResult {
    /// Returns true if the move was placed.
    pub fn is_accepted(&self) -> bool {
        matches!(self, MoveResult::Accepted { .. })
    }

    /// The winning line, if this move won the game.
    pub fn win(&self) -> Option<WinInfo> {
        match self {
            MoveResult::Accepted {
                outcome: Outcome::Won(info),
                ..
            } => Some(*info),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_anti_diagonal_starts_top_right() {
        let cells = WinInfo::anti_diagonal().cells();
        assert_eq!(cells[0], Coord::at(0, 2));
        assert_eq!(cells[2], Coord::at(2, 0));
    }

    #[test]
    fn test_column_cells() {
        let info = WinInfo::column(1);
        assert!(info.contains(Coord::at(2, 1)));
        assert!(!info.contains(Coord::at(1, 0)));
    }

    #[test]
    fn test_display() {
        assert_eq!(WinInfo::row(1).to_string(), "row 1");
        assert_eq!(WinInfo::anti_diagonal().to_string(), "anti-diagonal");
        assert_eq!(Rejection::Occupied.to_string(), "cell is already occupied");
    }

    #[test]
    fn test_deserialize_rejects_lines_off_the_board() {
        for json in [
            r#"{"kind":"Row","index":5}"#,
            r#"{"kind":"Column","index":3}"#,
            r#"{"kind":"MainDiagonal","index":1}"#,
            r#"{"kind":"AntiDiagonal","index":2}"#,
        ] {
            assert!(serde_json::from_str::<WinInfo>(json).is_err(), "{json}");
        }

        let err = serde_json::from_str::<Outcome>(r#"{"Won":{"kind":"Row","index":5}}"#)
            .unwrap_err();
        assert!(err.to_string().contains("row 5 is not a line on the board"));
    }

    #[test]
    fn test_deserialize_accepts_every_line() {
        for info in [WinInfo::row(2), WinInfo::column(0), WinInfo::anti_diagonal()] {
            let json = serde_json::to_string(&info).unwrap();
            assert_eq!(serde_json::from_str::<WinInfo>(&json).unwrap(), info);
        }
    }

    #[test]
    #[should_panic(expected = "row 3 is off the board")]
    fn test_row_constructor_checks_index() {
        WinInfo::row(3);
    }

    #[test]
    fn test_win_accessor() {
        let won = MoveResult::Accepted {
            player: Player::X,
            outcome: Outcome::Won(WinInfo::row(0)),
        };
        assert_eq!(won.win(), Some(WinInfo::row(0)));
        assert_eq!(MoveResult::Rejected(Rejection::GameOver).win(), None);
        assert!(!MoveResult::Rejected(Rejection::GameOver).is_accepted());
    }
}
