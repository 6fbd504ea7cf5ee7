//! Per-piece candidate move generation.
//!
//! Generation is purely geometric: every destination returned is in range
//! and either empty or occupied by an opposing piece. Filtering out moves
//! that expose the mover's own king is the game layer's job, which keeps
//! attack scanning (`Board::square_controlled`) free of recursion.
//!
//! Destination order follows each piece's fixed offset list and is part of
//! the contract; tests compare ordered lists where it matters.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::error::BoardError;
use super::state::Board;
use super::types::{Color, Piece, Square};

pub(crate) use sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};

impl Board {
    /// Candidate destinations for the given piece at `from`.
    ///
    /// Fails with `StalePieceReference` when the board's occupant of
    /// `from` is not the described piece, guarding against generating
    /// moves from a position snapshot the board has since left behind.
    pub fn available_moves(
        &self,
        color: Color,
        piece: Piece,
        from: Square,
    ) -> Result<Vec<Square>, BoardError> {
        match self.piece_at(from)? {
            Some((c, p)) if c == color && p == piece => Ok(self.raw_moves(color, piece, from)),
            _ => Err(BoardError::StalePieceReference { square: from }),
        }
    }

    /// Unguarded generation used by attack scans and the legality layer,
    /// which look the occupant up themselves.
    pub(crate) fn raw_moves(&self, color: Color, piece: Piece, from: Square) -> Vec<Square> {
        match piece {
            Piece::Pawn => self.pawn_moves(color, from),
            Piece::Knight => self.knight_moves(color, from),
            Piece::Bishop => self.slider_moves(color, from, &BISHOP_DIRECTIONS),
            Piece::Rook => self.slider_moves(color, from, &ROOK_DIRECTIONS),
            Piece::Queen => self.slider_moves(color, from, &QUEEN_DIRECTIONS),
            Piece::King => self.king_moves(color, from),
        }
    }
}
