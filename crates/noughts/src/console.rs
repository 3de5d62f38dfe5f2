//! Line-oriented front end.
//!
//! Reads one command per line and writes plain text, so it runs over any
//! reader/writer pair: stdin/stdout in the binary, in-memory buffers in tests.

use crate::{status_line, validate_names};
use anyhow::Result;
use noughts_tictactoe::{Game, Mark, MoveError, MoveOutcome};
use std::io::{BufRead, Write};
use tracing::{debug, info, instrument, warn};

const HELP: &str = "Commands: 1-9 to place your mark, r to reset the board, q to quit";

/// What the user asked for on one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConsoleCommand {
    Play(usize),
    Reset,
    Help,
    Quit,
    Unknown,
}

impl ConsoleCommand {
    fn parse(line: &str) -> Self {
        let line = line.trim().to_lowercase();
        match line.as_str() {
            "q" | "quit" | "exit" => Self::Quit,
            "r" | "reset" => Self::Reset,
            "h" | "help" | "?" => Self::Help,
            other => other.parse().map(Self::Play).unwrap_or(Self::Unknown),
        }
    }
}

/// Console adapter over a reader and a writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading commands from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads one line. `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, text: &str) -> Result<Option<String>> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        self.read_line()
    }

    /// Asks both players for a name.
    ///
    /// A blank answer keeps the player's current (default) name. Once either
    /// name has been typed, the pair must be distinct; on a clash O is asked
    /// again.
    ///
    /// Returns `false` if input ended before both names were settled.
    #[instrument(skip_all)]
    pub fn collect_names(&mut self, game: &mut Game) -> Result<bool> {
        let x_prompt = format!("Name for X [{}]: ", game.player(Mark::X).name());
        let Some(x_input) = self.prompt(&x_prompt)? else {
            return Ok(false);
        };
        let x_typed = !x_input.is_empty();
        let x_name = if x_typed {
            x_input
        } else {
            game.player(Mark::X).name().to_string()
        };

        let o_name = loop {
            let current = game.player(Mark::O).name().to_string();
            let Some(o_input) = self.prompt(&format!("Name for O [{}]: ", current))? else {
                return Ok(false);
            };
            let o_typed = !o_input.is_empty();
            let o_name = if o_typed { o_input } else { current };
            if !x_typed && !o_typed {
                break o_name;
            }
            match validate_names(&x_name, &o_name) {
                Ok((_, o)) => break o,
                Err(e) => {
                    warn!(error = %e, "Name refused");
                    writeln!(self.output, "{}", e)?;
                }
            }
        };

        game.rename_player(Mark::X, &x_name);
        game.rename_player(Mark::O, &o_name);
        let [x, o] = game.players();
        info!(x = %x.name(), o = %o.name(), "Players named");
        Ok(true)
    }

    /// Runs the game loop until the user quits or input ends.
    #[instrument(skip_all)]
    pub fn run(&mut self, game: &mut Game) -> Result<()> {
        writeln!(self.output, "{}", HELP)?;

        loop {
            writeln!(self.output)?;
            writeln!(self.output, "{}", game.board())?;
            writeln!(self.output, "{}", status_line(game))?;
            let prompt = if game.is_over() {
                "Play again? (r to reset, q to quit) > "
            } else {
                "> "
            };

            let Some(line) = self.prompt(prompt)? else {
                info!("Input closed");
                writeln!(self.output)?;
                return Ok(());
            };

            let command = ConsoleCommand::parse(&line);
            debug!(?command, "Console command");
            match command {
                ConsoleCommand::Quit => {
                    writeln!(self.output, "Goodbye!")?;
                    return Ok(());
                }
                ConsoleCommand::Reset => {
                    game.reset();
                    writeln!(self.output, "Board cleared.")?;
                }
                ConsoleCommand::Help => writeln!(self.output, "{}", HELP)?,
                ConsoleCommand::Unknown => {
                    writeln!(self.output, "Unrecognised input \"{}\". {}", line, HELP)?
                }
                ConsoleCommand::Play(cell) => match game.attempt_move(cell) {
                    Ok(MoveOutcome::Continue) => {}
                    Ok(MoveOutcome::Win(_) | MoveOutcome::Draw) => {
                        writeln!(self.output, "Game over.")?;
                    }
                    Err(MoveError::GameOver) => {
                        writeln!(self.output, "Game is already over. Press r to play again.")?
                    }
                    Err(e @ MoveError::InvalidMove { .. }) => {
                        writeln!(self.output, "{}. Open cells: {}", e, open_cells(game))?
                    }
                },
            }
        }
    }
}

/// Numbers of the cells still free, comma separated.
fn open_cells(game: &Game) -> String {
    game.board()
        .empty_positions()
        .iter()
        .map(|pos| pos.number().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
