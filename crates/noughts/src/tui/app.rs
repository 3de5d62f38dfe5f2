//! Application state and key handling for the terminal UI.
//!
//! Everything here is independent of the terminal: keys and clicks come in,
//! state changes, and [`super::ui`] draws the result.

use crate::validate_names;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use noughts_tictactoe::{Game, Mark, MoveError, MoveOutcome, Position};
use tracing::{debug, info, instrument, warn};

use super::input::move_cursor;

/// Text fields for naming both players.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameForm {
    fields: [String; 2],
    focus: Mark,
    error: Option<String>,
    renaming: bool,
}

impl NameForm {
    /// Creates a form prefilled with the given names, X first.
    pub fn new(x_name: impl Into<String>, o_name: impl Into<String>) -> Self {
        Self {
            fields: [x_name.into(), o_name.into()],
            focus: Mark::X,
            error: None,
            renaming: false,
        }
    }

    /// Creates a form for renaming players mid-game, prefilled with their
    /// current names. Cancelling it leaves the names as they were.
    pub fn renaming(x_name: impl Into<String>, o_name: impl Into<String>) -> Self {
        Self {
            renaming: true,
            ..Self::new(x_name, o_name)
        }
    }

    /// Whether the form was opened to rename players already in a game.
    pub fn is_renaming(&self) -> bool {
        self.renaming
    }

    /// Current input for `mark`'s name.
    pub fn field(&self, mark: Mark) -> &str {
        &self.fields[mark.seat()]
    }

    /// Field receiving typed characters.
    pub fn focus(&self) -> Mark {
        self.focus
    }

    /// Last validation error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    fn focused_mut(&mut self) -> &mut String {
        &mut self.fields[self.focus.seat()]
    }
}

/// Which screen is showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Screen {
    /// Collecting player names.
    NameEntry(NameForm),
    /// Board is live.
    Playing,
}

/// Main application state.
#[derive(Debug)]
pub struct App {
    game: Game,
    screen: Screen,
    cursor: Position,
    message: Option<String>,
    default_names: [String; 2],
    should_quit: bool,
}

impl App {
    /// Creates the application around `game`.
    ///
    /// With `ask_names` the session opens on name entry; otherwise play
    /// starts immediately with the players' current names.
    #[instrument(skip(game, default_names))]
    pub fn new(game: Game, default_names: [String; 2], ask_names: bool) -> Self {
        let screen = if ask_names {
            Screen::NameEntry(NameForm::new("", ""))
        } else {
            Screen::Playing
        };
        Self {
            game,
            screen,
            cursor: Position::Center,
            message: None,
            default_names,
            should_quit: false,
        }
    }

    /// The game being played.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Screen currently showing.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Highlighted cell.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Feedback from the last action, e.g. a rejected move.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Handles a key press.
    #[instrument(skip(self), fields(code = ?key.code))]
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            info!("Quit requested");
            self.should_quit = true;
            return;
        }

        match self.screen {
            Screen::NameEntry(_) => self.handle_name_key(key.code),
            Screen::Playing => self.handle_game_key(key.code),
        }
    }

    /// Handles a click on a board cell.
    #[instrument(skip(self))]
    pub fn handle_click(&mut self, pos: Position) {
        if self.screen == Screen::Playing {
            self.cursor = pos;
            self.play(pos.number());
        }
    }

    fn handle_game_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                info!("Quit requested");
                self.should_quit = true;
            }
            KeyCode::Char('r') | KeyCode::Char('R') => {
                self.game.reset();
                self.message = Some("New round. X moves first.".to_string());
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                let x = self.game.player(Mark::X).name().to_string();
                let o = self.game.player(Mark::O).name().to_string();
                self.screen = Screen::NameEntry(NameForm::renaming(x, o));
                self.message = None;
            }
            KeyCode::Char(c) if c.is_ascii_digit() => {
                if let Some(digit) = c.to_digit(10) {
                    let cell = digit as usize;
                    if let Some(pos) = Position::from_number(cell) {
                        self.cursor = pos;
                    }
                    self.play(cell);
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.play(self.cursor.number()),
            KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
                self.cursor = move_cursor(self.cursor, code);
            }
            _ => {}
        }
    }

    fn play(&mut self, cell: usize) {
        match self.game.attempt_move(cell) {
            Ok(outcome) => {
                debug!(?outcome, cell, "Move accepted");
                self.message = match outcome {
                    MoveOutcome::Continue => None,
                    MoveOutcome::Win(_) | MoveOutcome::Draw => {
                        Some("Press r to play again or q to quit.".to_string())
                    }
                };
            }
            Err(MoveError::GameOver) => {
                self.message = Some("Game is already over. Press r to play again.".to_string());
            }
            Err(e) => {
                warn!(error = %e, "Move rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    fn handle_name_key(&mut self, code: KeyCode) {
        let Screen::NameEntry(form) = &mut self.screen else {
            return;
        };

        match code {
            KeyCode::Char(c) => form.focused_mut().push(c),
            KeyCode::Backspace => {
                form.focused_mut().pop();
            }
            KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => {
                form.focus = form.focus.opponent();
            }
            KeyCode::Enter => {
                if form.focus == Mark::X && form.field(Mark::O).trim().is_empty() {
                    form.focus = Mark::O;
                } else {
                    self.submit_names();
                }
            }
            KeyCode::Esc if form.renaming => {
                debug!("Rename cancelled");
                self.screen = Screen::Playing;
            }
            KeyCode::Esc => self.use_default_names(),
            _ => {}
        }
    }

    fn submit_names(&mut self) {
        let Screen::NameEntry(form) = &mut self.screen else {
            return;
        };

        match validate_names(form.field(Mark::X), form.field(Mark::O)) {
            Ok((x, o)) => {
                info!(x = %x, o = %o, "Players named");
                self.game.rename_player(Mark::X, x);
                self.game.rename_player(Mark::O, o);
                self.screen = Screen::Playing;
            }
            Err(e) => {
                warn!(error = %e, "Names refused");
                form.error = Some(e.to_string());
            }
        }
    }

    fn use_default_names(&mut self) {
        info!("Using default names");
        let [x, o] = &self.default_names;
        self.game.rename_player(Mark::X, x);
        self.game.rename_player(Mark::O, o);
        self.screen = Screen::Playing;
    }
}
