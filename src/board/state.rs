//! Mailbox board: an 8x8 grid of optional occupants.
//!
//! The board is a purely structural container. It knows how to place, look
//! up, and relocate pieces, how to scan for attacked squares, and how to
//! run a reverted trial move. Chess legality lives in [`super::game`].

use super::error::BoardError;
use super::types::{Color, Piece, Square};

/// A color/piece pair occupying one board cell.
pub type Occupant = (Color, Piece);

/// The 8x8 board grid.
///
/// Rank 0 is white's back rank. Each cell holds at most one occupant;
/// relocation transfers the occupant between cells, never copies it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Occupant>; 8]; 8],
}

impl Board {
    /// Create an empty board.
    #[must_use]
    pub fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// True when the square addresses a board cell.
    #[inline]
    #[must_use]
    pub fn valid_position(square: Square) -> bool {
        square.in_bounds()
    }

    fn check_bounds(square: Square) -> Result<(), BoardError> {
        if square.in_bounds() {
            Ok(())
        } else {
            Err(BoardError::InvalidPosition {
                rank: square.0,
                file: square.1,
            })
        }
    }

    /// Place a piece, overwriting any occupant.
    pub fn add_piece(&mut self, square: Square, color: Color, piece: Piece) -> Result<(), BoardError> {
        Self::check_bounds(square)?;
        self.squares[square.0][square.1] = Some((color, piece));
        Ok(())
    }

    /// Remove and return the occupant of a square.
    pub fn clear_square(&mut self, square: Square) -> Result<Option<Occupant>, BoardError> {
        Self::check_bounds(square)?;
        Ok(self.squares[square.0][square.1].take())
    }

    /// The occupant of a square, or `None` if it is empty.
    pub fn piece_at(&self, square: Square) -> Result<Option<Occupant>, BoardError> {
        Self::check_bounds(square)?;
        Ok(self.squares[square.0][square.1])
    }

    /// Raw structural relocation: empty `from`, overwrite `to`.
    ///
    /// Captures are realized here structurally (the previous occupant of
    /// `to` is returned). No chess legality is checked; callers establish
    /// legality first.
    pub fn move_piece(&mut self, from: Square, to: Square) -> Result<Option<Occupant>, BoardError> {
        Self::check_bounds(from)?;
        Self::check_bounds(to)?;
        let mover = self.squares[from.0][from.1].take();
        Ok(std::mem::replace(&mut self.squares[to.0][to.1], mover))
    }

    /// Cell access for in-bounds squares produced by offset stepping.
    #[inline]
    pub(crate) fn occupant(&self, square: Square) -> Option<Occupant> {
        debug_assert!(square.in_bounds());
        self.squares[square.0][square.1]
    }

    /// Read-only snapshot of the full grid, for presentation layers.
    #[must_use]
    pub fn grid(&self) -> &[[Option<Occupant>; 8]; 8] {
        &self.squares
    }

    /// Row-major iterator over all occupied squares. A fresh scan per call.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Color, Piece)> + '_ {
        self.squares.iter().enumerate().flat_map(|(rank, row)| {
            row.iter().enumerate().filter_map(move |(file, cell)| {
                cell.map(|(color, piece)| (Square(rank, file), color, piece))
            })
        })
    }

    /// Locate the king of a color by row-major scan.
    pub(crate) fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces()
            .find(|&(_, c, p)| c == color && p == Piece::King)
            .map(|(square, _, _)| square)
    }

    /// Is the king of `color` attacked?
    ///
    /// A board without that king is an invariant violation, not a game
    /// state; it fails with `NoKingFound`.
    pub fn in_check(&self, color: Color) -> Result<bool, BoardError> {
        let king_square = self
            .find_king(color)
            .ok_or(BoardError::NoKingFound { color })?;
        Ok(self.square_controlled(color.opponent(), king_square))
    }

    /// True iff some piece of `color` could capture a piece on `target`.
    ///
    /// Attack scanning reuses normal move generation: captures and attacks
    /// coincide for every piece in this rule set. It never consults the
    /// legality layer, so check testing cannot recurse.
    pub fn square_controlled(&self, color: Color, target: Square) -> bool {
        self.pieces()
            .filter(|&(_, c, _)| c == color)
            .any(|(square, _, piece)| self.raw_moves(color, piece, square).contains(&target))
    }

    /// Trial a move and report whether it leaves `color`'s king attacked.
    ///
    /// The board is restored exactly before returning, captured occupant
    /// included.
    pub(crate) fn move_exposes_king(
        &mut self,
        from: Square,
        to: Square,
        color: Color,
    ) -> Result<bool, BoardError> {
        let trial = TrialMove::begin(self, from, to)?;
        let exposed = trial.board().in_check(color);
        drop(trial);
        exposed
    }
}

/// Scoped trial mutation with guaranteed rollback.
///
/// Performs `move_piece(from, to)` on construction and restores the prior
/// board (mover back on `from`, captured occupant back on `to`) when
/// dropped, so an early return mid-check can never leave the board mutated.
pub(crate) struct TrialMove<'a> {
    board: &'a mut Board,
    from: Square,
    to: Square,
    captured: Option<Occupant>,
}

impl<'a> TrialMove<'a> {
    pub(crate) fn begin(board: &'a mut Board, from: Square, to: Square) -> Result<Self, BoardError> {
        let captured = board.move_piece(from, to)?;
        Ok(TrialMove {
            board,
            from,
            to,
            captured,
        })
    }

    pub(crate) fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        // from and to were bounds-checked in begin
        let mover = self.board.squares[self.to.0][self.to.1].take();
        self.board.squares[self.from.0][self.from.1] = mover;
        self.board.squares[self.to.0][self.to.1] = self.captured;
    }
}
