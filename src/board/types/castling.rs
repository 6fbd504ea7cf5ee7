//! Castling rights and sides.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Which wing of the board a castle targets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Side {
    Kingside,
    Queenside,
}

impl Side {
    /// Both sides in check order (kingside first)
    pub const BOTH: [Side; 2] = [Side::Kingside, Side::Queenside];
}

/// Castling rights represented as a bitmask, one bit per (color, side).
///
/// These are the rights a color has not yet forfeited by moving its king or
/// the relevant rook. The legality check re-validates king/rook identity on
/// top of this, so the mask is necessary but not sufficient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both colors, both sides)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, side: Side) -> bool {
        self.0 & Self::bit_for(color, side) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, side: Side) {
        self.0 |= Self::bit_for(color, side);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, side: Side) {
        self.0 &= !Self::bit_for(color, side);
    }

    /// Remove both of a color's rights (king moved or castled)
    #[inline]
    pub fn forfeit_all(&mut self, color: Color) {
        self.remove(color, Side::Kingside);
        self.remove(color, Side::Queenside);
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value)
    }

    /// Get the bit for a specific castling right
    #[inline]
    const fn bit_for(color: Color, side: Side) -> u8 {
        match (color, side) {
            (Color::White, Side::Kingside) => CASTLE_WHITE_K,
            (Color::White, Side::Queenside) => CASTLE_WHITE_Q,
            (Color::Black, Side::Kingside) => CASTLE_BLACK_K,
            (Color::Black, Side::Queenside) => CASTLE_BLACK_Q,
        }
    }
}
