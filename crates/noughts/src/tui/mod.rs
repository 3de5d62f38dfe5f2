//! Full-screen terminal front end.

mod app;
mod input;
mod ui;

pub use app::{App, NameForm, Screen};
pub use ui::cell_at;

use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use noughts_tictactoe::Game;
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use std::io::{self, Stdout};
use tracing::{debug, error, info, instrument};

/// Runs the terminal UI until the user quits.
///
/// The terminal is restored even when the event loop fails.
#[instrument(skip(game, default_names))]
pub fn run_tui(game: Game, default_names: [String; 2], ask_names: bool) -> Result<()> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(game, default_names, ask_names);
    let res = run_app(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI error");
    }
    info!("Terminal UI closed");
    res
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|f| ui::draw(f, app))?;

        match event::read()? {
            // Skip key release events (crossterm fires both press and release on some platforms).
            Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key),
            Event::Mouse(mouse) if mouse.kind == MouseEventKind::Down(MouseButton::Left) => {
                let size = terminal.size()?;
                let area = Rect::new(0, 0, size.width, size.height);
                match cell_at(area, mouse.column, mouse.row) {
                    Some(pos) => app.handle_click(pos),
                    None => debug!(column = mouse.column, row = mouse.row, "Click outside board"),
                }
            }
            _ => {}
        }
    }
    Ok(())
}
