//! Fluent builder for constructing game positions.
//!
//! Allows setting up positions piece by piece rather than parsing FEN
//! strings; the test suite leans on it for fixtures.
//!
//! # Example
//! ```
//! use chess_rules::board::{Color, Piece, PositionBuilder, Square};
//!
//! let game = PositionBuilder::new()
//!     .piece(Square(0, 4), Color::White, Piece::King)
//!     .piece(Square(7, 4), Color::Black, Piece::King)
//!     .piece(Square(1, 0), Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build()
//!     .unwrap();
//! ```

use super::error::BoardError;
use super::game::GameState;
use super::state::Board;
use super::types::{CastlingRights, Color, Piece, Side, Square};

/// A fluent builder for `GameState` positions.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a new empty position builder.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder holding the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();

        let back_rank = [
            Piece::Rook,
            Piece::Knight,
            Piece::Bishop,
            Piece::Queen,
            Piece::King,
            Piece::Bishop,
            Piece::Knight,
            Piece::Rook,
        ];
        for (file, &piece) in back_rank.iter().enumerate() {
            builder.pieces.push((Square(0, file), Color::White, piece));
            builder.pieces.push((Square(7, file), Color::Black, piece));
        }
        for file in 0..8 {
            builder
                .pieces
                .push((Square(1, file), Color::White, Piece::Pawn));
            builder
                .pieces
                .push((Square(6, file), Color::Black, Piece::Pawn));
        }

        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece, replacing any previous placement on the square.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a placement from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    /// Set the side to move.
    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Set castling rights wholesale.
    #[must_use]
    pub const fn castling(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable one castling right.
    #[must_use]
    pub fn castle(mut self, color: Color, side: Side) -> Self {
        self.castling_rights.set(color, side);
        self
    }

    /// Enable every castling right.
    #[must_use]
    pub const fn all_castling_rights(mut self) -> Self {
        self.castling_rights = CastlingRights::all();
        self
    }

    /// Set the halfmove clock (for the 50-move rule).
    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    /// Set the fullmove number.
    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the game state.
    ///
    /// Fails with `NoKingFound` when a king is missing, since the status
    /// of the position cannot be derived without both kings.
    pub fn build(self) -> Result<GameState, BoardError> {
        let mut board = Board::empty();
        for (square, color, piece) in self.pieces {
            board.add_piece(square, color, piece)?;
        }
        GameState::new(
            board,
            self.castling_rights,
            self.side_to_move,
            self.halfmove_clock,
            self.fullmove_number,
        )
    }
}
