//! Interactive line-based game loop.
//!
//! Generic over the input and output streams so the loop can be driven from
//! a terminal or from an in-memory script.

use crate::config::PlayConfig;
use crate::presenter::{self, Command};
use std::io::{BufRead, Write};
use tictac_engine::{GameEngine, MoveResult, WinInfo};
use tracing::{debug, info, instrument, warn};

/// Summary of an interactive session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionStats {
    /// Games that ended in a win or a draw.
    pub finished: usize,
    /// Moves the engine accepted.
    pub accepted: usize,
    /// Moves the engine rejected or that were off the board.
    pub rejected: usize,
}

/// Runs games on `engine` until `quit` or end of input.
///
/// Every input event is forwarded to the engine and the result redrawn.
/// Rejected moves only change the status line.
#[instrument(skip_all)]
pub fn run<R, W>(
    engine: &mut GameEngine,
    input: R,
    mut output: W,
    config: &PlayConfig,
) -> std::io::Result<SessionStats>
where
    R: BufRead,
    W: Write,
{
    let mut stats = SessionStats::default();
    let mut win: Option<WinInfo> = None;

    redraw(&mut output, engine, win, None, config)?;

    for line in input.lines() {
        let line = line?;
        let command = presenter::parse_input(&line);
        debug!(?command, "Input received");

        match command {
            Command::Quit => break,
            Command::Help => writeln!(output, "{}", presenter::HELP)?,
            Command::Unknown => {
                writeln!(output, "Unrecognised input '{}'. Type 'help' for options.", line.trim())?
            }
            Command::Reset => {
                engine.reset();
                win = None;
                redraw(&mut output, engine, win, None, config)?;
            }
            Command::Move { row, col } => match engine.attempt_move(row, col) {
                Ok(result) => {
                    if result.is_accepted() {
                        stats.accepted += 1;
                    } else {
                        stats.rejected += 1;
                    }
                    if let Some(info) = result.win() {
                        win = Some(info);
                    }
                    if matches!(result, MoveResult::Accepted { outcome, .. } if outcome.is_terminal()) {
                        stats.finished += 1;
                        info!(finished = stats.finished, "Game finished");
                    }
                    redraw(&mut output, engine, win, Some(&result), config)?;
                    if engine.is_over() && result.is_accepted() {
                        writeln!(output, "Type 'reset' for a new game or 'quit' to leave.")?;
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Input outside the board");
                    stats.rejected += 1;
                    writeln!(output, "({row}, {col}) is not on the board. Rows and columns run 0-2.")?;
                }
            },
        }
    }

    output.flush()?;
    Ok(stats)
}

fn redraw<W: Write>(
    output: &mut W,
    engine: &GameEngine,
    win: Option<WinInfo>,
    last: Option<&MoveResult>,
    config: &PlayConfig,
) -> std::io::Result<()> {
    writeln!(output)?;
    writeln!(output, "{}", presenter::render_board(engine.board(), win, config))?;
    writeln!(output, "{}", presenter::status_line(engine, last))
}
