//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart from
//! board storage so the board stays a plain container.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, has_winning_line, winner};
