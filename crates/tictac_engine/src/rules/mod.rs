//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! the engine so they can be checked on their own.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{completed_line, win_through};
