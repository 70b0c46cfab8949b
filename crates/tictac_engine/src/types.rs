//! Core domain types for tic-tac-toe.

use crate::error::CoordError;
use serde::{Deserialize, Serialize};

/// Side length of the board.
pub const SIZE: usize = 3;

/// Player in the game, doubling as the turn marker.
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
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// Contents of one board position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Nobody has played here.
    #[default]
    Empty,
    /// Holds an X mark.
    MarkedX,
    /// Holds an O mark.
    MarkedO,
}

impl Cell {
    /// Returns the player whose mark occupies this cell.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::MarkedX => Some(Player::X),
            Cell::MarkedO => Some(Player::O),
        }
    }

    /// Checks if the cell is empty.
    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::X => Cell::MarkedX,
            Player::O => Cell::MarkedO,
        }
    }
}

/// A position on the board, zero-based `(row, col)`.
///
/// Only in-range coordinates can be constructed, so a `Coord` can always
/// index a [`Board`] without checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// Creates a coordinate, rejecting anything outside the 3×3 grid.
    #[track_caller]
    pub fn new(row: usize, col: usize) -> Result<Self, CoordError> {
        if row < SIZE && col < SIZE {
            Ok(Self { row, col })
        } else {
            Err(CoordError::new(row, col))
        }
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        (index < SIZE * SIZE).then(|| Self {
            row: index / SIZE,
            col: index % SIZE,
        })
    }

    /// Row-major index of this coordinate (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Zero-based row.
    pub fn row(self) -> usize {
        self.row
    }

    /// Zero-based column.
    pub fn col(self) -> usize {
        self.col
    }

    /// All 9 coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..SIZE * SIZE).map(|index| Self {
            row: index / SIZE,
            col: index % SIZE,
        })
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Coord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
///
/// Outside this crate the board is read-only: callers get `&Board` from the
/// engine and can only inspect it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, at: Coord) -> Cell {
        self.cells[at.row][at.col]
    }

    /// Checks if the cell at the given coordinate is empty.
    pub fn is_empty_at(&self, at: Coord) -> bool {
        self.get(at).is_empty()
    }

    /// Returns the grid as rows of cells.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Iterates over every cell with its coordinate, row-major.
    pub fn cells(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all().map(move |at| (at, self.get(at)))
    }

    /// Coordinates of every empty cell.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells()
            .filter(|(_, cell)| cell.is_empty())
            .map(|(at, _)| at)
            .collect()
    }

    /// Number of marks placed by `player`.
    pub fn count(&self, player: Player) -> usize {
        self.cells()
            .filter(|(_, cell)| cell.owner() == Some(player))
            .count()
    }

    /// Checks if every cell holds a mark.
    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    pub(crate) fn set(&mut self, at: Coord, cell: Cell) {
        self.cells[at.row][at.col] = cell;
    }

    /// Builds a board from raw rows.
    #[cfg(test)]
    pub(crate) fn from_rows(cells: [[Cell; SIZE]; SIZE]) -> Self {
        Self { cells }
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let symbol = match cell {
                    Cell::Empty => '.',
                    Cell::MarkedX => 'X',
                    Cell::MarkedO => 'O',
                };
                write!(f, "{symbol}")?;
                if c < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if r < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}
