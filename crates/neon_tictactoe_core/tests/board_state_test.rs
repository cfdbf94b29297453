//! Tests for move acceptance, turn order, and reset.

use neon_tictactoe_core::{Game, GameStatus, Mark, MoveError, MoveOutcome, Position};

#[test]
fn test_occupied_square_never_changes_game() {
    let mut game = Game::new();
    game.apply_move(4, Mark::X).expect("Legal move");

    let before = game.clone();
    let result = game.apply_move(4, Mark::O);

    assert_eq!(result, Err(MoveError::SquareOccupied(Position::Center)));
    assert_eq!(game, before);
}

#[test]
fn test_out_of_range_index_rejected() {
    let mut game = Game::new();
    for index in [9, 10, usize::MAX] {
        assert_eq!(game.apply_move(index, Mark::X), Err(MoveError::InvalidIndex(index)));
    }
    assert_eq!(game, Game::new());
}

#[test]
fn test_turn_alternates_after_each_move() {
    let mut game = Game::new();
    let order = [
        Position::Center,
        Position::TopLeft,
        Position::TopRight,
        Position::BottomLeft,
        Position::MiddleLeft,
        Position::MiddleRight,
    ];

    let mut previous = None;
    for pos in order {
        let mover = game.turn();
        if let Some(prev) = previous {
            assert_ne!(mover, prev);
        }
        let outcome = game.play(pos).expect("Legal move");
        assert_eq!(outcome, MoveOutcome::Continue { next: mover.opponent() });
        assert_eq!(game.turn(), mover.opponent());
        previous = Some(mover);
    }
}

#[test]
fn test_mark_counts_stay_balanced() {
    let mut game = Game::new();
    for pos in [
        Position::TopLeft,
        Position::Center,
        Position::BottomRight,
        Position::TopCenter,
        Position::BottomCenter,
    ] {
        game.play(pos).expect("Legal move");
        let x = game.board().count(Mark::X);
        let o = game.board().count(Mark::O);
        assert!(x == o || x == o + 1, "x={x} o={o}");
    }
}

#[test]
fn test_reset_after_win() {
    let mut game = Game::replay(&[
        Position::TopLeft,
        Position::Center,
        Position::TopCenter,
        Position::BottomLeft,
        Position::TopRight,
    ])
    .expect("Valid replay");
    assert_eq!(game.status(), GameStatus::Won(Mark::X));
    assert_eq!(game.play(Position::BottomRight), Err(MoveError::GameOver));

    game.reset();

    assert_eq!(game.status(), GameStatus::InProgress);
    assert_eq!(game.turn(), Mark::X);
    assert!(game.board().empty_positions().len() == 9);
    assert!(game.history().is_empty());
    assert!(game.play(Position::BottomRight).is_ok());
}

#[test]
fn test_history_records_accepted_moves_only() {
    let mut game = Game::new();
    game.play(Position::Center).expect("Legal move");
    let _ = game.play(Position::Center);
    game.play(Position::TopLeft).expect("Legal move");
    assert_eq!(game.history(), &[Position::Center, Position::TopLeft]);
}

#[test]
fn test_game_serializes() {
    let game = Game::replay(&[Position::Center, Position::TopLeft]).expect("Valid replay");
    let json = serde_json::to_string(&game).expect("Serialize");
    let restored: Game = serde_json::from_str(&json).expect("Deserialize");
    assert_eq!(restored, game);
}
