//! Pawn move generation.
//!
//! Three independent contributions, concatenated in contract order:
//! diagonal captures (left, then right), single advance, double advance
//! from the starting rank. No en passant and no promotion in this rule set.

use super::super::state::Board;
use super::super::types::{Color, Square};

impl Board {
    pub(crate) fn pawn_moves(&self, color: Color, from: Square) -> Vec<Square> {
        let mut moves = self.pawn_captures(color, from);
        moves.extend(self.pawn_advance(color, from));
        moves.extend(self.pawn_double_advance(color, from));
        moves
    }

    fn pawn_captures(&self, color: Color, from: Square) -> Vec<Square> {
        let forward = color.pawn_direction();
        let mut captures = Vec::new();
        for d_file in [-1, 1] {
            let Some(to) = from.offset(forward, d_file) else {
                continue;
            };
            if let Some((c, _)) = self.occupant(to) {
                if c != color {
                    captures.push(to);
                }
            }
        }
        captures
    }

    fn pawn_advance(&self, color: Color, from: Square) -> Option<Square> {
        let to = from.offset(color.pawn_direction(), 0)?;
        if self.occupant(to).is_none() {
            Some(to)
        } else {
            None
        }
    }

    fn pawn_double_advance(&self, color: Color, from: Square) -> Option<Square> {
        if from.rank() != color.pawn_start_rank() {
            return None;
        }
        let forward = color.pawn_direction();
        let first = from.offset(forward, 0)?;
        let second = first.offset(forward, 0)?;
        if self.occupant(first).is_none() && self.occupant(second).is_none() {
            Some(second)
        } else {
            None
        }
    }
}
