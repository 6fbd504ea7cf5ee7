//! The game state machine: turn tracking, legality, and status.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::debug_log;

use super::builder::PositionBuilder;
use super::castling;
use super::error::{BoardError, GameError};
use super::state::{Board, Occupant};
use super::types::{CastlingRights, Color, Piece, Side, Square};

/// Game outcome, derived from the position after every move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    InProgress,
    WhiteWon,
    BlackWon,
    Draw,
}

impl Status {
    /// True for every status except `InProgress`.
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Status::InProgress)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::InProgress => write!(f, "in progress"),
            Status::WhiteWon => write!(f, "White won"),
            Status::BlackWon => write!(f, "Black won"),
            Status::Draw => write!(f, "draw"),
        }
    }
}

/// The mutable root of one game session.
///
/// Owns the board and all move-independent metadata. The status is always
/// a pure function of (board, active color, halfmove clock), recomputed
/// after construction and after every committed move; it is never set
/// independently.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    castling_rights: CastlingRights,
    active_color: Color,
    /// Always `None`: en passant is not part of this rule set. The field
    /// exists so constructor inputs line up with standard position records.
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    status: Status,
}

impl GameState {
    /// Build a game state around an existing board.
    ///
    /// Recomputes the initial status, which requires both kings on the
    /// board; a kingless board fails with `NoKingFound`.
    pub fn new(
        board: Board,
        castling_rights: CastlingRights,
        active_color: Color,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Result<Self, BoardError> {
        let mut state = GameState {
            board,
            castling_rights,
            active_color,
            en_passant_target: None,
            halfmove_clock,
            fullmove_number,
            status: Status::InProgress,
        };
        state.recalculate_status()?;
        Ok(state)
    }

    /// The standard starting position, white to move.
    #[must_use]
    pub fn start() -> Self {
        PositionBuilder::starting_position()
            .build()
            .expect("standard starting position is valid")
    }

    /// The board this game owns.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn active_color(&self) -> Color {
        self.active_color
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// Always `None` in this rule set.
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    /// Plies played since the last clock reset. Drives the 50-move rule.
    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    /// Increments after every black move.
    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    /// May the active color play `from` -> `to`?
    ///
    /// Fails closed: any structurally unsound input (out-of-range squares,
    /// empty origin, opponent's piece) answers false rather than erroring.
    /// Castling attempts route entirely through the castling subsystem;
    /// everything else is piece geometry plus the self-check filter, which
    /// trials the move on the board and reverts it.
    pub fn valid_move(&mut self, from: Square, to: Square) -> bool {
        if self.status.is_terminal() {
            return false;
        }
        let Ok(Some((color, piece))) = self.board.piece_at(from) else {
            return false;
        };
        if color != self.active_color {
            return false;
        }

        if let Some((castle_color, side)) = castling::attempt(from, to) {
            if castle_color == self.active_color {
                return castling::available(&self.board, self.castling_rights, castle_color, side);
            }
        }

        let Ok(moves) = self.board.available_moves(color, piece, from) else {
            return false;
        };
        if !moves.contains(&to) {
            return false;
        }
        matches!(self.board.move_exposes_king(from, to, color), Ok(false))
    }

    /// Commit a move.
    ///
    /// Rejects anything `valid_move` rejects with `InvalidMove` — the one
    /// recoverable error, meant to turn into a retry prompt. On success:
    /// castle transaction or plain relocation, rights forfeiture, clocks,
    /// color flip, status recomputation.
    pub fn make_move(&mut self, from: Square, to: Square) -> Result<(), GameError> {
        if !self.valid_move(from, to) {
            return Err(GameError::InvalidMove { from, to });
        }

        match castling::attempt(from, to) {
            Some((color, side)) if color == self.active_color => {
                castling::perform(&mut self.board, color, side)?;
                self.castling_rights.forfeit_all(color);
            }
            _ => {
                let mover = self.board.piece_at(from)?.map(|(_, piece)| piece);
                let captured = self.board.move_piece(from, to)?;
                self.forfeit_rights_after(mover, from, to, captured);
            }
        }

        debug_log!("{} played {}{}", self.active_color, from, to);

        self.halfmove_clock += 1;
        if self.active_color == Color::Black {
            self.fullmove_number += 1;
        }
        self.active_color = self.active_color.opponent();
        self.recalculate_status()?;
        Ok(())
    }

    /// Every move the active color may play, castles included.
    ///
    /// Candidate destinations are re-derived per piece and filtered
    /// through the same self-check trial as `valid_move`.
    pub fn legal_moves(&mut self) -> Vec<(Square, Square)> {
        let mut moves = Vec::new();
        if self.status.is_terminal() {
            return moves;
        }
        let color = self.active_color;
        let placed: Vec<(Square, Piece)> = self
            .board
            .pieces()
            .filter(|&(_, c, _)| c == color)
            .map(|(square, _, piece)| (square, piece))
            .collect();
        for (from, piece) in placed {
            for to in self.board.raw_moves(color, piece, from) {
                // Castling-shaped pairs belong to the castling subsystem,
                // whatever piece happens to stand on the king's home square.
                if castling::attempt(from, to).is_some_and(|(c, _)| c == color) {
                    continue;
                }
                if matches!(self.board.move_exposes_king(from, to, color), Ok(false)) {
                    moves.push((from, to));
                }
            }
        }
        for side in Side::BOTH {
            if castling::available(&self.board, self.castling_rights, color, side) {
                let to_file = match side {
                    Side::Kingside => 6,
                    Side::Queenside => 2,
                };
                moves.push((castling::king_home(color), Square(color.back_rank(), to_file)));
            }
        }
        moves
    }

    /// Rights forfeiture for a plain (non-castle) move: the king moving
    /// loses both sides, a rook leaving its home square loses that side,
    /// and a rook captured on its home square costs its owner the side.
    fn forfeit_rights_after(
        &mut self,
        mover: Option<Piece>,
        from: Square,
        to: Square,
        captured: Option<Occupant>,
    ) {
        let color = self.active_color;
        match mover {
            Some(Piece::King) => self.castling_rights.forfeit_all(color),
            Some(Piece::Rook) => {
                for side in Side::BOTH {
                    if from == castling::rook_home(color, side) {
                        self.castling_rights.remove(color, side);
                    }
                }
            }
            _ => {}
        }
        if let Some((victim_color, Piece::Rook)) = captured {
            for side in Side::BOTH {
                if to == castling::rook_home(victim_color, side) {
                    self.castling_rights.remove(victim_color, side);
                }
            }
        }
    }

    /// Derive the status from the position. First match wins: draw, then
    /// white's checkmate of black, then black's of white, else in progress.
    fn recalculate_status(&mut self) -> Result<(), BoardError> {
        self.status = if self.is_draw()? {
            Status::Draw
        } else if self.is_checkmated(Color::Black)? {
            Status::WhiteWon
        } else if self.is_checkmated(Color::White)? {
            Status::BlackWon
        } else {
            Status::InProgress
        };
        debug_log!("status now {}", self.status);
        Ok(())
    }

    fn is_draw(&mut self) -> Result<bool, BoardError> {
        if self.halfmove_clock >= 100 {
            return Ok(true);
        }
        self.is_stalemated()
    }

    fn is_stalemated(&mut self) -> Result<bool, BoardError> {
        let color = self.active_color;
        if self.board.in_check(color)? {
            return Ok(false);
        }
        Ok(!self.any_legal_move(color)?)
    }

    fn is_checkmated(&mut self, color: Color) -> Result<bool, BoardError> {
        if !self.board.in_check(color)? {
            return Ok(false);
        }
        Ok(!self.any_legal_move(color)?)
    }

    /// Exhaustive scan with the self-check filter, short-circuiting on the
    /// first legal move found.
    fn any_legal_move(&mut self, color: Color) -> Result<bool, BoardError> {
        let placed: Vec<(Square, Piece)> = self
            .board
            .pieces()
            .filter(|&(_, c, _)| c == color)
            .map(|(square, _, piece)| (square, piece))
            .collect();
        for (from, piece) in placed {
            for to in self.board.raw_moves(color, piece, from) {
                if castling::attempt(from, to).is_some_and(|(c, _)| c == color) {
                    continue;
                }
                if !self.board.move_exposes_king(from, to, color)? {
                    return Ok(true);
                }
            }
        }
        Ok(false)
    }
}
