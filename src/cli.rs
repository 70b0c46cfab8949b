//! Command-line interface for tictac.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictac")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "tictac.toml", global = true)]
    pub config: PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play an interactive game on stdin/stdout
    Play {
        /// Hide the 1-9 key of empty cells
        #[arg(long)]
        no_hints: bool,
    },

    /// Apply a sequence of moves and report each result
    Replay {
        /// Moves as zero-based `row,col` pairs, e.g. `0,0 1,1 0,1`
        #[arg(required = true, value_parser = parse_move)]
        moves: Vec<(usize, usize)>,

        /// Print results and the final state as JSON
        #[arg(long)]
        json: bool,
    },
}

/// Parses a `row,col` pair.
pub fn parse_move(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected row,col but got '{s}'"))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row '{row}': {e}"))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column '{col}': {e}"))?;
    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_move() {
        assert_eq!(parse_move("0,2"), Ok((0, 2)));
        assert_eq!(parse_move(" 1 , 1 "), Ok((1, 1)));
        assert!(parse_move("12").is_err());
        assert!(parse_move("a,1").is_err());
    }

    #[test]
    fn test_replay_args() {
        let cli = Cli::try_parse_from(["tictac", "replay", "0,0", "1,1", "--json"]).unwrap();
        match cli.command {
            Some(Command::Replay { moves, json }) => {
                assert_eq!(moves, vec![(0, 0), (1, 1)]);
                assert!(json);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_defaults_to_no_subcommand() {
        let cli = Cli::try_parse_from(["tictac"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.config, PathBuf::from("tictac.toml"));
    }
}
