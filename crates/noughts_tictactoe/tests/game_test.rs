//! Tests for the game state machine.

use noughts_tictactoe::{Game, GameStatus, Mark, MoveError, MoveOutcome, Position, Square};

fn play(game: &mut Game, cells: &[usize]) -> Vec<Result<MoveOutcome, MoveError>> {
    cells.iter().map(|&cell| game.attempt_move(cell)).collect()
}

#[test]
fn test_out_of_range_positions_rejected() {
    let mut game = Game::new();
    game.attempt_move(5).unwrap();
    let before = game.clone();

    for position in [0, 10, 11, 42, usize::MAX] {
        assert_eq!(
            game.attempt_move(position),
            Err(MoveError::InvalidMove { position })
        );
        assert_eq!(game, before);
    }
}

#[test]
fn test_occupied_positions_rejected() {
    let mut game = Game::new();
    play(&mut game, &[1, 5, 9]);
    let before = game.clone();

    for position in [1, 5, 9] {
        assert_eq!(
            game.attempt_move(position),
            Err(MoveError::InvalidMove { position })
        );
        assert_eq!(game, before);
    }
}

#[test]
fn test_accepted_move_adds_one_mark_and_alternates() {
    let mut game = Game::new();
    for (turn, cell) in [5, 1, 9, 3, 2].into_iter().enumerate() {
        let mover = game.current_player().mark();
        let marked = game.board().marked_count();

        assert_eq!(game.attempt_move(cell), Ok(MoveOutcome::Continue), "turn {turn}");
        assert_eq!(game.board().marked_count(), marked + 1);
        assert_eq!(game.current_player().mark(), mover.opponent());
    }
}

#[test]
fn test_top_row_win() {
    let mut game = Game::with_names("Ada", "Grace");
    let results = play(&mut game, &[1, 5, 2, 9, 3]);

    assert_eq!(results.last(), Some(&Ok(MoveOutcome::Win(Mark::X))));
    assert!(results[..4].iter().all(|r| *r == Ok(MoveOutcome::Continue)));
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert!(game.is_over());
    assert_eq!(game.winner().map(|p| p.mark()), Some(Mark::X));
    assert_eq!(game.winner().map(|p| p.name()), Some("Ada"));
}

#[test]
fn test_full_board_without_line_is_a_draw() {
    let mut game = Game::new();
    let results = play(&mut game, &[1, 2, 3, 5, 4, 6, 8, 7, 9]);

    assert!(results[..8].iter().all(|r| *r == Ok(MoveOutcome::Continue)));
    assert_eq!(results[8], Ok(MoveOutcome::Draw));
    assert_eq!(game.status(), GameStatus::Drawn);
    assert!(game.board().is_full());
    assert!(game.winner().is_none());
}

#[test]
fn test_column_completed_before_board_fills() {
    // X takes 1, 4 and 7 on its third move; nothing after that is accepted.
    let mut game = Game::new();
    let results = play(&mut game, &[1, 2, 4, 3, 7, 5, 9, 6, 8]);

    assert_eq!(results[4], Ok(MoveOutcome::Win(Mark::X)));
    assert!(results[5..].iter().all(|r| *r == Err(MoveError::GameOver)));
    assert_eq!(game.board().marked_count(), 5);
}

#[test]
fn test_same_cell_twice() {
    let mut game = Game::new();
    assert_eq!(game.attempt_move(1), Ok(MoveOutcome::Continue));
    assert_eq!(
        game.attempt_move(1),
        Err(MoveError::InvalidMove { position: 1 })
    );

    assert_eq!(game.board().get(Position::TopLeft), Square::Occupied(Mark::X));
    assert_eq!(game.board().marked_count(), 1);
    assert_eq!(game.current_player().mark(), Mark::O);
}

#[test]
fn test_moves_after_win_rejected_until_reset() {
    let mut game = Game::new();
    play(&mut game, &[1, 5, 2, 9, 3]);
    let finished = game.clone();

    for cell in game.board().empty_positions().iter().map(|p| p.number()) {
        assert_eq!(game.attempt_move(cell), Err(MoveError::GameOver));
    }
    assert_eq!(game, finished);

    game.reset();
    assert_eq!(game.attempt_move(4), Ok(MoveOutcome::Continue));
}

#[test]
fn test_reset_restores_initial_state_and_keeps_names() {
    let mut game = Game::with_names("Ada", "Grace");
    play(&mut game, &[1, 2, 4, 3, 7]);
    assert!(game.is_over());

    game.reset();

    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(!game.is_over());
    assert!(game.winner().is_none());
    assert_eq!(game.current_player_index(), 0);
    assert!(game.board().cells().iter().all(|c| *c == Square::Empty));
    assert_eq!(game.player(Mark::X).name(), "Ada");
    assert_eq!(game.player(Mark::O).name(), "Grace");
}

#[test]
fn test_reset_mid_game_returns_turn_to_x() {
    let mut game = Game::new();
    game.attempt_move(5).unwrap();
    assert_eq!(game.current_player().mark(), Mark::O);

    game.reset();
    assert_eq!(game.current_player().mark(), Mark::X);
}

#[test]
fn test_board_filling_win_is_not_a_draw() {
    // The final move both fills the board and completes the right column.
    let mut game = Game::new();
    let results = play(&mut game, &[3, 1, 4, 2, 6, 5, 8, 7, 9]);

    assert_eq!(results[8], Ok(MoveOutcome::Win(Mark::X)));
    assert!(game.board().is_full());
    assert_ne!(game.status(), GameStatus::Drawn);
}
