//! Knight move generation.

use super::super::state::Board;
use super::super::types::{Color, Square};

/// The eight L-shaped jumps, in contract order.
pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (2, -1),
    (2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
];

impl Board {
    pub(crate) fn knight_moves(&self, color: Color, from: Square) -> Vec<Square> {
        let mut moves = Vec::new();
        for (d_rank, d_file) in KNIGHT_OFFSETS {
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
