//! Draw detection tests.

use crate::board::{GameState, Square, Status};

#[test]
fn test_fen_halfmove_parsing() {
    let game = GameState::from_fen("8/3k4/8/8/8/8/3K4/8 w - - 57 30");
    assert_eq!(game.halfmove_clock(), 57);
}

#[test]
fn test_fifty_move_rule_draw_at_load() {
    let game = GameState::from_fen("8/3k4/8/8/8/8/3K4/8 w - - 100 60");
    assert_eq!(game.status(), Status::Draw);
}

#[test]
fn test_not_yet_a_draw_at_ninety_nine() {
    let game = GameState::from_fen("8/3k4/8/8/8/8/3K4/8 w - - 99 60");
    assert_eq!(game.status(), Status::InProgress);
}

#[test]
fn test_clock_reaching_hundred_draws() {
    let mut game = GameState::from_fen("8/3k4/8/8/8/8/3K4/8 w - - 99 60");
    game.make_move(Square(1, 3), Square(2, 3)).unwrap();
    assert_eq!(game.halfmove_clock(), 100);
    assert_eq!(game.status(), Status::Draw);
}

#[test]
fn test_clock_counts_captures_and_pawn_moves_too() {
    // The clock never resets in this rule set; every halfmove counts.
    let mut game = GameState::start();
    game.make_move(Square(1, 4), Square(3, 4)).unwrap(); // e2e4
    assert_eq!(game.halfmove_clock(), 1);
    game.make_move(Square(6, 3), Square(4, 3)).unwrap(); // d7d5
    assert_eq!(game.halfmove_clock(), 2);
    game.make_move(Square(3, 4), Square(4, 3)).unwrap(); // exd5
    assert_eq!(game.halfmove_clock(), 3);
}

#[test]
fn test_stalemate_draw_with_material_on_board() {
    // Black has pieces but no legal move and is not in check.
    let game = GameState::from_fen("k7/8/1Q6/8/8/8/8/7K b - - 0 1");
    assert_eq!(game.status(), Status::Draw);
}

#[test]
fn test_stalemated_side_has_no_legal_moves() {
    let mut game = GameState::from_fen("k7/8/1Q6/8/8/8/8/7K b - - 0 1");
    assert!(game.legal_moves().is_empty());
}
