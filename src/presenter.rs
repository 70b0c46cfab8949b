//! Text rendering of engine state and parsing of typed input.
//!
//! The presenter has no rules of its own. It turns [`MoveResult`]s and the
//! read-only board into text, and turns text into [`Command`]s.

use crate::config::PlayConfig;
use tictac_engine::{Board, Cell, Coord, GameEngine, MoveResult, Outcome, SIZE, WinInfo};
use tracing::instrument;

/// A parsed line of user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Play at a zero-based `(row, col)`; not yet range-checked.
    Move {
        /// Row as typed.
        row: usize,
        /// Column as typed.
        col: usize,
    },
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
    /// Show the help text.
    Help,
    /// Anything else.
    Unknown,
}

/// Help text listing the accepted input forms.
pub const HELP: &str = "Enter a cell as 1-9 (left to right, top to bottom) or as \"row col\" (0-2 each).\n\
Commands: reset, help, quit";

/// Parses one line of input.
///
/// Accepts a single key `1`-`9`, a zero-based `row col` pair separated by
/// whitespace or a comma, and the words `reset`/`new`, `help`/`?`,
/// `quit`/`exit`/`q`. Pairs are passed through unchecked so the engine can
/// report coordinates that are off the board.
#[instrument]
pub fn parse_input(line: &str) -> Command {
    let line = line.trim().to_lowercase();
    match line.as_str() {
        "reset" | "new" => return Command::Reset,
        "quit" | "exit" | "q" => return Command::Quit,
        "help" | "?" => return Command::Help,
        _ => {}
    }

    let parts: Vec<&str> = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|s| !s.is_empty())
        .collect();

    match parts.as_slice() {
        [key] => key
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(Coord::from_index)
            .map_or(Command::Unknown, |at| Command::Move {
                row: at.row(),
                col: at.col(),
            }),
        [row, col] => match (row.parse(), col.parse()) {
            (Ok(row), Ok(col)) => Command::Move { row, col },
            _ => Command::Unknown,
        },
        _ => Command::Unknown,
    }
}

/// Renders the board as three text rows.
///
/// Cells on `win` are bracketed, empty cells show their key when hints are
/// on.
pub fn render_board(board: &Board, win: Option<WinInfo>, config: &PlayConfig) -> String {
    let cells: Vec<String> = board
        .cells()
        .map(|(at, cell)| render_cell(cell, at, win, config))
        .collect();
    let separator = vec!["---"; SIZE].join("+");
    cells
        .chunks(SIZE)
        .map(|row| row.join("|"))
        .collect::<Vec<_>>()
        .join(&format!("\n{separator}\n"))
}

fn render_cell(cell: Cell, at: Coord, win: Option<WinInfo>, config: &PlayConfig) -> String {
    let symbol = match cell.owner() {
        Some(player) => config.symbol(player),
        None if *config.show_hints() => {
            char::from_digit((at.index() + 1) as u32, 10).unwrap_or(' ')
        }
        None => ' ',
    };
    if win.is_some_and(|win| win.contains(at)) {
        format!("[{symbol}]")
    } else {
        format!(" {symbol} ")
    }
}

/// Status text for the current state, as shown under the board.
///
/// A rejected move only names the next player while the game is running.
pub fn status_line(engine: &GameEngine, last: Option<&MoveResult>) -> String {
    match last {
        Some(MoveResult::Rejected(reason)) if engine.is_over() => {
            format!("That move is not allowed: {reason}.")
        }
        Some(MoveResult::Rejected(reason)) => {
            format!("That move is not allowed: {reason}. Player {} to move.", engine.current_player())
        }
        Some(MoveResult::Accepted {
            player,
            outcome: Outcome::Won(info),
        }) => format!("Player {player} wins ({info})!"),
        Some(MoveResult::Accepted {
            outcome: Outcome::Drawn,
            ..
        }) => "Draw!".to_string(),
        Some(MoveResult::Accepted {
            outcome: Outcome::Continuing,
            ..
        })
        | None => format!("Player {} to move.", engine.current_player()),
    }
}

/// One-line summary of a move result, for replays.
pub fn describe(at: (usize, usize), result: &MoveResult) -> String {
    let (row, col) = at;
    match result {
        MoveResult::Rejected(reason) => format!("({row}, {col}) rejected: {reason}"),
        MoveResult::Accepted { player, outcome } => match outcome {
            Outcome::Continuing => format!("({row}, {col}) {player}"),
            Outcome::Won(info) => format!("({row}, {col}) {player} wins ({info})"),
            Outcome::Drawn => format!("({row}, {col}) {player}, draw"),
        },
    }
}
