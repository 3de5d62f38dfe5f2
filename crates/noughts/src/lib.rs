//! Noughts - two-player tic-tac-toe front ends.
//!
//! The rules live in [`noughts_tictactoe`]. This crate wraps them in two
//! interchangeable presentation layers and the plumbing around them.
//!
//! # Architecture
//!
//! - **TUI**: full-screen ratatui front end with keyboard and mouse input
//! - **Console**: line-oriented front end over any reader/writer pair
//! - **Names**: validation of player names collected by either front end
//! - **Config**: TOML settings for default names and logging
//!
//! # Example
//!
//! ```
//! use noughts::Console;
//! use noughts_tictactoe::Game;
//!
//! # fn example() -> anyhow::Result<()> {
//! let mut game = Game::with_names("Ada", "Grace");
//! let mut console = Console::new("1\n5\n2\n9\n3\nq\n".as_bytes(), Vec::new());
//! console.run(&mut game)?;
//! assert!(game.is_over());
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod cli;
mod config;
mod console;
mod logging;
mod names;
mod status;
pub mod tui;

// Crate-level exports - Command line
pub use cli::{Cli, Command};

// Crate-level exports - Configuration
pub use config::{AppConfig, ConfigError, LoggingConfig, PlayersConfig};

// Crate-level exports - Front ends
pub use console::Console;
pub use tui::run_tui;

// Crate-level exports - Support
pub use logging::init_tracing;
pub use names::{NameError, validate_names};
pub use status::status_line;
