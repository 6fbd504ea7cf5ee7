//! Chess board representation and game logic.
//!
//! Uses a plain 8x8 mailbox grid: every square either holds a
//! (color, piece) pair or is empty. Supports the full piece movement
//! rules, castling, check detection, and game-over resolution.
//!
//! # Example
//! ```
//! use chess_rules::board::{GameState, Square};
//!
//! let mut game = GameState::start();
//! game.make_move(Square(1, 4), Square(3, 4)).unwrap();
//! println!("Game is {}", game.status());
//! ```

mod builder;
mod castling;
mod error;
mod fen;
mod game;
mod movegen;
mod state;
mod types;

#[cfg(test)]
mod tests;

// Public API - types users need
pub use builder::PositionBuilder;
pub use error::{BoardError, FenError, GameError, SquareError};
pub use game::{GameState, Status};
pub use state::{Board, Occupant};
pub use types::{CastlingRights, Color, Piece, Side, Square};
