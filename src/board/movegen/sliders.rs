//! Sliding-piece move generation (bishop, rook, queen).

use super::super::state::Board;
use super::super::types::{Color, Square};

/// Orthogonal directions, in contract order.
pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, -1), (0, 1)];

/// Diagonal directions, in contract order.
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(-1, -1), (1, 1), (-1, 1), (1, -1)];

/// Orthogonals then diagonals, matching the king's step order.
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (1, 1),
    (-1, 1),
    (1, -1),
];

impl Board {
    /// Slide along each direction until the board edge or the first
    /// occupied square, which is included iff it holds an opposing piece.
    pub(crate) fn slider_moves(
        &self,
        color: Color,
        from: Square,
        directions: &[(isize, isize)],
    ) -> Vec<Square> {
        let mut moves = Vec::new();
        for &(d_rank, d_file) in directions {
            let mut current = from;
            while let Some(next) = current.offset(d_rank, d_file) {
                match self.occupant(next) {
                    None => moves.push(next),
                    Some((c, _)) => {
                        if c != color {
                            moves.push(next);
                        }
                        break;
                    }
                }
                current = next;
            }
        }
        moves
    }
}
