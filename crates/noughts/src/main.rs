//! Noughts - command-line entry point.

use anyhow::Result;
use clap::Parser;
use noughts::{AppConfig, Cli, Command, Console, init_tracing, run_tui};
use noughts_tictactoe::Game;
use std::io;
use tracing::info;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)?;
    init_tracing(config.logging())?;

    let command = cli.command.unwrap_or_default();
    info!(?command, config = %cli.config.display(), "Starting noughts");

    let players = config.players();
    let mut game = Game::with_names(players.x_name(), players.o_name());

    match command {
        Command::Tui => run_tui(game, players.names(), !cli.defaults),
        Command::Console => {
            let stdin = io::stdin();
            let mut console = Console::new(stdin.lock(), io::stdout());
            if !cli.defaults && !console.collect_names(&mut game)? {
                return Ok(());
            }
            console.run(&mut game)
        }
    }
}
