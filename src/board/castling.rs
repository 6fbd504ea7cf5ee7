//! Castling: attempt recognition, legality, and the two-piece transaction.
//!
//! An attempt is recognized structurally from one of four fixed
//! (from, to) pairs, a king move of two squares along its home rank. The
//! rights mask says what a color has not forfeited; on top of that the
//! legality check re-validates that the king and rook really are home, so
//! a corrupted board can never be castled out of. Both checks stay.

use super::error::BoardError;
use super::state::Board;
use super::types::{CastlingRights, Color, Piece, Side, Square};

/// Squares strictly between king and rook, as file offsets from the king.
const BETWEEN_KINGSIDE: [isize; 2] = [1, 2];
const BETWEEN_QUEENSIDE: [isize; 3] = [-1, -2, -3];

/// Squares the king occupies, passes through, or lands on.
const SAFETY_KINGSIDE: [isize; 3] = [0, 1, 2];
const SAFETY_QUEENSIDE: [isize; 3] = [0, -1, -2];

/// King's home square for a color.
pub(crate) fn king_home(color: Color) -> Square {
    Square(color.back_rank(), 4)
}

/// Rook's home square for a color and side.
pub(crate) fn rook_home(color: Color, side: Side) -> Square {
    let file = match side {
        Side::Kingside => 7,
        Side::Queenside => 0,
    };
    Square(color.back_rank(), file)
}

/// Recognize a castling attempt from its (from, to) pair.
///
/// Returns which color and side the pair denotes; whether that color is
/// actually the one moving is the caller's concern.
pub(crate) fn attempt(from: Square, to: Square) -> Option<(Color, Side)> {
    for color in Color::BOTH {
        if from != king_home(color) {
            continue;
        }
        let rank = color.back_rank();
        if to == Square(rank, 6) {
            return Some((color, Side::Kingside));
        }
        if to == Square(rank, 2) {
            return Some((color, Side::Queenside));
        }
    }
    None
}

/// Full legality check: identity, rights, clearance, and king safety.
pub(crate) fn available(
    board: &Board,
    rights: CastlingRights,
    color: Color,
    side: Side,
) -> bool {
    pieces_well_placed(board, color, side)
        && rights.has(color, side)
        && no_pieces_between(board, color, side)
        && no_attacked_king_squares(board, color, side)
}

/// King and the relevant rook of the moving color still on home squares.
fn pieces_well_placed(board: &Board, color: Color, side: Side) -> bool {
    let king = board.occupant(king_home(color));
    let rook = board.occupant(rook_home(color, side));

    king == Some((color, Piece::King)) && rook == Some((color, Piece::Rook))
}

fn no_pieces_between(board: &Board, color: Color, side: Side) -> bool {
    let king = king_home(color);
    let offsets: &[isize] = match side {
        Side::Kingside => &BETWEEN_KINGSIDE,
        Side::Queenside => &BETWEEN_QUEENSIDE,
    };
    offsets.iter().all(|&d_file| {
        king.offset(0, d_file)
            .is_some_and(|sq| board.occupant(sq).is_none())
    })
}

fn no_attacked_king_squares(board: &Board, color: Color, side: Side) -> bool {
    let king = king_home(color);
    let opponent = color.opponent();
    let offsets: &[isize] = match side {
        Side::Kingside => &SAFETY_KINGSIDE,
        Side::Queenside => &SAFETY_QUEENSIDE,
    };
    offsets.iter().all(|&d_file| {
        king.offset(0, d_file)
            .is_some_and(|sq| !board.square_controlled(opponent, sq))
    })
}

/// Commit the castle: king to its destination, then the rook to the square
/// adjacent to the king on the side it came from.
pub(crate) fn perform(board: &mut Board, color: Color, side: Side) -> Result<(), BoardError> {
    let rank = color.back_rank();
    let (king_file, rook_file) = match side {
        Side::Kingside => (6, 5),
        Side::Queenside => (2, 3),
    };
    board.move_piece(king_home(color), Square(rank, king_file))?;
    board.move_piece(rook_home(color, side), Square(rank, rook_file))?;
    Ok(())
}
