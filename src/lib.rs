//! Terminal front end for the tic-tac-toe engine.
//!
//! All game rules live in [`tictac_engine`]. This crate is a presentation
//! layer: it parses typed input, forwards it to the engine, and renders the
//! results as text.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod console;
mod presenter;
mod replay;

pub use config::{ConfigError, PlayConfig};
pub use console::{SessionStats, run};
pub use presenter::{Command, HELP, describe, parse_input, render_board, status_line};
pub use replay::{ReplayReport, ReplayStep, replay};
