//! King move generation (the single-step moves; castling is game-level).

use super::super::state::Board;
use super::super::types::{Color, Square};

/// The eight unit steps, in contract order.
pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
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
    pub(crate) fn king_moves(&self, color: Color, from: Square) -> Vec<Square> {
        let mut moves = Vec::new();
        for (d_rank, d_file) in KING_OFFSETS {
            let Some(to) = from.offset(d_rank, d_file) else {
                continue;
            };
            match self.occupant(to) {
                Some((c, _)) if c == color => {}
                _ => moves.push(to),
            }
        }
        moves
    }
}
