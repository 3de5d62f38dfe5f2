//! Turn-taking state machine over a board and two players.
//!
//! A game starts `InProgress` with X to move. Each accepted move either
//! ends the game (`Won` or `Drawn`) or hands the turn to the other player.
//! Terminal states accept no further moves until [`Game::reset`].

use crate::{Board, Mark, Player};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Current status of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// A player completed a line.
    Won(Mark),
    /// Board filled with no line.
    Drawn,
}

impl GameStatus {
    /// Checks if the game has reached a terminal state.
    pub fn is_over(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Result of an accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// Play passes to the other player.
    Continue,
    /// The mover completed a line.
    Win(Mark),
    /// The move filled the board without completing a line.
    Draw,
}

/// Why a move was rejected. A rejected move never changes the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum MoveError {
    /// Position outside 1-9 or cell already marked.
    #[display("Cell {} is not available", position)]
    InvalidMove {
        /// The requested cell number.
        position: usize,
    },
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,
}

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    players: [Player; 2],
    current: usize,
    status: GameStatus,
}

impl Game {
    /// Creates a game between two default-named players.
    #[instrument]
    pub fn new() -> Self {
        Self::with_players(Player::new(Mark::X), Player::new(Mark::O))
    }

    /// Creates a game with named players for X and O.
    #[instrument(skip(x_name, o_name))]
    pub fn with_names(x_name: impl AsRef<str>, o_name: impl AsRef<str>) -> Self {
        Self::with_players(Player::named(Mark::X, x_name), Player::named(Mark::O, o_name))
    }

    fn with_players(x: Player, o: Player) -> Self {
        Self {
            board: Board::new(),
            players: [x, o],
            current: 0,
            status: GameStatus::InProgress,
        }
    }

    /// Places the current player's mark at `position` (1-9).
    ///
    /// Win is checked before fullness, so a move that completes a line on the
    /// last open cell is a win.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] once the game is won or drawn.
    /// - [`MoveError::InvalidMove`] for positions outside 1-9 or marked cells.
    #[instrument(skip(self), fields(mover = %self.current_player().mark()))]
    pub fn attempt_move(&mut self, position: usize) -> Result<MoveOutcome, MoveError> {
        if self.status.is_over() {
            warn!(status = ?self.status, "Move after game end rejected");
            return Err(MoveError::GameOver);
        }

        if !self.board.is_valid_move(position) {
            warn!("Invalid move rejected");
            return Err(MoveError::InvalidMove { position });
        }

        let mark = self.current_player().mark();
        if !self.board.apply_move(position, mark) {
            return Err(MoveError::InvalidMove { position });
        }

        let outcome = if self.board.has_winning_line(mark) {
            self.status = GameStatus::Won(mark);
            MoveOutcome::Win(mark)
        } else if self.board.is_full() {
            self.status = GameStatus::Drawn;
            MoveOutcome::Draw
        } else {
            self.current = 1 - self.current;
            MoveOutcome::Continue
        };

        match outcome {
            MoveOutcome::Continue => debug!(next = %self.current_player().mark(), "Turn passed"),
            _ => info!(?outcome, "Game finished"),
        }
        Ok(outcome)
    }

    /// Clears the board and returns to X's turn. Player names are kept.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.board.reset();
        self.current = 0;
        self.status = GameStatus::InProgress;
        info!("Game reset");
    }

    /// Returns the player whose turn it is.
    ///
    /// After the game ends this is the player who made the last move.
    pub fn current_player(&self) -> &Player {
        &self.players[self.current]
    }

    /// Index (0 or 1) of the player to move.
    pub fn current_player_index(&self) -> usize {
        self.current
    }

    /// Returns both players, X first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the player carrying `mark`.
    pub fn player(&self, mark: Mark) -> &Player {
        &self.players[mark.seat()]
    }

    /// Renames the player carrying `mark`. See [`Player::set_name`].
    pub fn rename_player(&mut self, mark: Mark, name: impl AsRef<str>) {
        self.players[mark.seat()].set_name(name);
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Checks if the game is won or drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the winning player, if the game was won.
    pub fn winner(&self) -> Option<&Player> {
        match self.status {
            GameStatus::Won(mark) => Some(self.player(mark)),
            GameStatus::InProgress | GameStatus::Drawn => None,
        }
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let game = Game::new();
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.current_player_index(), 0);
        assert_eq!(game.current_player().mark(), Mark::X);
        assert!(!game.is_over());
        assert!(game.winner().is_none());
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = Game::new();
        assert_eq!(game.attempt_move(5), Ok(MoveOutcome::Continue));
        assert_eq!(game.current_player().mark(), Mark::O);
        assert_eq!(game.attempt_move(1), Ok(MoveOutcome::Continue));
        assert_eq!(game.current_player().mark(), Mark::X);
    }

    #[test]
    fn test_rejected_move_changes_nothing() {
        let mut game = Game::new();
        game.attempt_move(5).unwrap();
        let before = game.clone();
        assert_eq!(
            game.attempt_move(5),
            Err(MoveError::InvalidMove { position: 5 })
        );
        assert_eq!(
            game.attempt_move(0),
            Err(MoveError::InvalidMove { position: 0 })
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_winning_move_on_last_cell_is_a_win() {
        // O O X / X O X / O X ? -> X at 9 completes the right column and fills the board
        let mut game = Game::new();
        for n in [3, 1, 4, 2, 6, 5, 8, 7] {
            assert_eq!(game.attempt_move(n), Ok(MoveOutcome::Continue), "move {n}");
        }
        assert_eq!(game.attempt_move(9), Ok(MoveOutcome::Win(Mark::X)));
        assert!(game.board().is_full());
        assert_eq!(game.status(), GameStatus::Won(Mark::X));
    }

    #[test]
    fn test_rename_player() {
        let mut game = Game::new();
        game.rename_player(Mark::O, " Grace ");
        assert_eq!(game.player(Mark::O).name(), "Grace");
        game.rename_player(Mark::O, "");
        assert_eq!(game.player(Mark::O).name(), "Player O");
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            MoveError::InvalidMove { position: 12 }.to_string(),
            "Cell 12 is not available"
        );
        assert_eq!(MoveError::GameOver.to_string(), "Game is already over");
    }
}
