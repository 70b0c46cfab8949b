//! Win detection logic for tic-tac-toe.

use crate::outcome::WinInfo;
use crate::types::{Board, Coord, SIZE};
use tracing::instrument;

/// Checks the lines passing through the cell just played.
///
/// Only the row, the column and, when `at` lies on them, the two diagonals
/// are inspected. Order is row, column, main diagonal, anti-diagonal; when a
/// single mark completes two lines the first one in that order is reported.
/// Returns `None` if `at` is empty.
#[instrument(level = "trace", skip(board))]
pub fn win_through(board: &Board, at: Coord) -> Option<WinInfo> {
    let player = board.get(at).owner()?;
    let owned = |row: usize, col: usize| board.get(Coord::at(row, col)).owner() == Some(player);
    let (row, col) = (at.row(), at.col());

    if (0..SIZE).all(|c| owned(row, c)) {
        return Some(WinInfo::row(row));
    }

    if (0..SIZE).all(|r| owned(r, col)) {
        return Some(WinInfo::column(col));
    }

    if row == col && (0..SIZE).all(|i| owned(i, i)) {
        return Some(WinInfo::main_diagonal());
    }

    if row + col == SIZE - 1 && (0..SIZE).all(|i| owned(i, SIZE - 1 - i)) {
        return Some(WinInfo::anti_diagonal());
    }

    None
}

/// Scans the whole board for any completed line.
///
/// Used for consistency checks, not on the move path.
pub fn completed_line(board: &Board) -> Option<WinInfo> {
    Coord::all().find_map(|at| win_through(board, at))
}
