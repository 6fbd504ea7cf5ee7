//! Core value types shared across the rules engine.

mod castling;
mod piece;
mod square;

pub use castling::{CastlingRights, Side};
pub use piece::{Color, Piece};
pub use square::Square;
