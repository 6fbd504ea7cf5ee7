//! Pins, discovered checks, and other legality edge cases.

use crate::board::{Color, GameError, GameState, Piece, Square};

#[test]
fn test_pinned_piece_cannot_move() {
    // The e2 bishop shields its king from the e8 rook.
    let mut game = GameState::from_fen("4r2k/8/8/8/8/8/4B3/4K3 w - - 0 1");
    assert!(!game.valid_move(Square(1, 4), Square(2, 3)));
    assert!(!game.valid_move(Square(1, 4), Square(2, 5)));
    // The king itself may step off the pin line.
    assert!(game.valid_move(Square(0, 4), Square(0, 3)));
}

#[test]
fn test_king_cannot_step_into_check() {
    let mut game = GameState::from_fen("7k/8/8/8/8/8/r7/4K3 w - - 0 1");
    assert!(!game.valid_move(Square(0, 4), Square(1, 4)));
    assert!(!game.valid_move(Square(0, 4), Square(1, 3)));
    assert!(game.valid_move(Square(0, 4), Square(0, 3)));
}

#[test]
fn test_check_must_be_answered() {
    // White is checked by the e8 rook; a rook lift to e4 blocks, while an
    // unrelated pawn push leaves the king exposed.
    let mut game = GameState::from_fen("4r2k/8/8/8/R7/8/7P/4K3 w - - 0 1");
    assert!(game.valid_move(Square(3, 0), Square(3, 4)));
    assert!(!game.valid_move(Square(1, 7), Square(2, 7)));
    assert!(matches!(
        game.make_move(Square(1, 7), Square(2, 7)),
        Err(GameError::InvalidMove {
            from: Square(1, 7),
            to: Square(2, 7),
        })
    ));
}

#[test]
fn test_king_cannot_capture_defended_piece() {
    // The e2 rook is defended by the e8 rook.
    let mut game = GameState::from_fen("4r2k/8/8/8/8/8/4r3/4K3 w - - 0 1");
    assert!(!game.valid_move(Square(0, 4), Square(1, 4)));
    assert!(game.valid_move(Square(0, 4), Square(0, 3)));
}

#[test]
fn test_capturing_the_checker_is_legal() {
    let mut game = GameState::from_fen("7k/8/8/8/8/8/4r3/4K3 w - - 0 1");
    assert!(game.valid_move(Square(0, 4), Square(1, 4)));
    game.make_move(Square(0, 4), Square(1, 4)).unwrap();
    assert_eq!(
        game.board().piece_at(Square(1, 4)).unwrap(),
        Some((Color::White, Piece::King))
    );
}

#[test]
fn test_legal_moves_in_check_are_all_evasions() {
    let mut game = GameState::from_fen("4r2k/8/8/8/R7/8/7P/4K3 w - - 0 1");
    let moves = game.legal_moves();
    assert!(!moves.is_empty());
    for (from, to) in moves {
        let mut trial = game.clone();
        trial.make_move(from, to).unwrap();
        assert!(!trial.board().in_check(Color::White).unwrap());
    }
}

#[test]
fn test_cannot_capture_own_piece() {
    let mut game = GameState::start();
    assert!(!game.valid_move(Square(0, 0), Square(1, 0)));
}

#[test]
fn test_valid_move_leaves_state_untouched() {
    let mut game = GameState::start();
    let before = game.to_fen();
    assert!(game.valid_move(Square(1, 4), Square(3, 4)));
    assert!(!game.valid_move(Square(0, 0), Square(5, 0)));
    assert_eq!(game.to_fen(), before);
}
