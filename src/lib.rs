//! A chess rules engine: board state, per-piece move generation,
//! castling, and game-over detection on a plain 8x8 grid.
//!
//! The crate is rules-only. There is no search, no evaluation, and no
//! opponent; the [`board::GameState`] type answers "is this move legal"
//! and "is this game over" and nothing else.

pub mod board;
pub mod render;

pub use board::{
    Board, BoardError, CastlingRights, Color, FenError, GameError, GameState, Piece,
    PositionBuilder, Side, Square, SquareError, Status,
};

#[cfg(feature = "logging")]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        let _ = format_args!($($arg)*);
    }};
}

pub(crate) use debug_log;
