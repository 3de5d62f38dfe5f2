//! Pure tic-tac-toe rules.
//!
//! This crate holds the game-rule engine and nothing else: no terminal, no
//! files, no threads. Presentation layers drive a [`Game`] through
//! [`Game::attempt_move`] and [`Game::reset`] and render from
//! [`Board::cells`].
//!
//! # Example
//!
//! ```
//! use noughts_tictactoe::{Game, Mark, MoveOutcome};
//!
//! let mut game = Game::with_names("Ada", "Grace");
//! for cell in [1, 5, 2, 9] {
//!     assert_eq!(game.attempt_move(cell), Ok(MoveOutcome::Continue));
//! }
//! assert_eq!(game.attempt_move(3), Ok(MoveOutcome::Win(Mark::X)));
//! assert_eq!(game.winner().map(|p| p.name()), Some("Ada"));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod board;
mod game;
mod player;
mod position;
pub mod rules;
mod types;

pub use board::Board;
pub use game::{Game, GameStatus, MoveError, MoveOutcome};
pub use player::Player;
pub use position::Position;
pub use types::{Mark, Square};
