//! Command-line interface for noughts.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Noughts - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "noughts")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, global = true, default_value = "noughts.toml")]
    pub config: PathBuf,

    /// Skip name entry and play with the configured default names
    #[arg(long, global = true)]
    pub defaults: bool,

    /// Front end to run (defaults to the terminal UI)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Full-screen terminal UI with keyboard and mouse input
    #[default]
    Tui,

    /// Line-by-line console game on stdin/stdout
    Console,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_subcommand_defaults_to_tui() {
        let cli = Cli::try_parse_from(["noughts"]).unwrap();
        assert_eq!(cli.command.unwrap_or_default(), Command::Tui);
        assert_eq!(cli.config, PathBuf::from("noughts.toml"));
        assert!(!cli.defaults);
    }

    #[test]
    fn test_console_with_global_flags() {
        let cli =
            Cli::try_parse_from(["noughts", "console", "--defaults", "--config", "game.toml"])
                .unwrap();
        assert_eq!(cli.command, Some(Command::Console));
        assert_eq!(cli.config, PathBuf::from("game.toml"));
        assert!(cli.defaults);
    }
}
