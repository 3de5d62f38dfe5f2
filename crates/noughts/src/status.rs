//! Human-readable game status shared by the adapters.

use noughts_tictactoe::{Game, GameStatus};

/// One line describing whose turn it is or how the game ended.
pub fn status_line(game: &Game) -> String {
    match game.status() {
        GameStatus::InProgress => {
            let player = game.current_player();
            format!("{} ({}) to move", player.name(), player.mark())
        }
        GameStatus::Won(mark) => {
            let player = game.player(mark);
            format!("{} ({}) wins!", player.name(), mark)
        }
        GameStatus::Drawn => "It's a draw!".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_line() {
        let mut game = Game::with_names("Ada", "Grace");
        assert_eq!(status_line(&game), "Ada (X) to move");
        game.attempt_move(5).unwrap();
        assert_eq!(status_line(&game), "Grace (O) to move");
    }

    #[test]
    fn test_outcome_lines() {
        let mut game = Game::with_names("Ada", "Grace");
        for cell in [1, 5, 2, 9, 3] {
            game.attempt_move(cell).unwrap();
        }
        assert_eq!(status_line(&game), "Ada (X) wins!");

        game.reset();
        for cell in [1, 2, 3, 5, 4, 6, 8, 7, 9] {
            game.attempt_move(cell).unwrap();
        }
        assert_eq!(status_line(&game), "It's a draw!");
    }
}
