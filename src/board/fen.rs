//! FEN serialization for game states.
//!
//! The en-passant field is carried in the text format but never parsed:
//! this rule set has no en passant, so positions always load with an empty
//! target and serialize the field as `-`.

use std::str::FromStr;

use super::error::FenError;
use super::game::GameState;
use super::state::Board;
use super::types::{CastlingRights, Color, Piece, Side, Square};

impl GameState {
    /// Parse a game state from FEN notation.
    ///
    /// The first listed rank is rank 8, i.e. board row 7, descending from
    /// there. Halfmove clock and fullmove number are optional and default
    /// to 0 and 1.
    pub fn try_from_fen(fen: &str) -> Result<Self, FenError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        let mut board = Board::empty();
        for (rank_idx, rank_str) in parts[0].split('/').enumerate() {
            if rank_idx >= 8 {
                return Err(FenError::InvalidRank { rank: rank_idx });
            }
            let mut file = 0;
            for c in rank_str.chars() {
                if let Some(run) = c.to_digit(10) {
                    file += run as usize;
                } else {
                    let color = if c.is_uppercase() {
                        Color::White
                    } else {
                        Color::Black
                    };
                    let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                    if file >= 8 {
                        return Err(FenError::TooManyFiles {
                            rank: rank_idx,
                            files: file + 1,
                        });
                    }
                    board
                        .add_piece(Square(7 - rank_idx, file), color, piece)
                        .expect("rank and file bounds checked");
                    file += 1;
                }
            }
        }

        let active_color = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        let mut castling_rights = CastlingRights::none();
        for c in parts[2].chars() {
            match c {
                'K' => castling_rights.set(Color::White, Side::Kingside),
                'Q' => castling_rights.set(Color::White, Side::Queenside),
                'k' => castling_rights.set(Color::Black, Side::Kingside),
                'q' => castling_rights.set(Color::Black, Side::Queenside),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        // parts[3] is the en-passant field; deliberately not parsed.

        let halfmove_clock = match parts.get(4) {
            None => 0,
            Some(raw) => raw.parse::<u32>().map_err(|_| FenError::InvalidHalfmoveClock {
                found: (*raw).to_string(),
            })?,
        };

        let fullmove_number = match parts.get(5) {
            None => 1,
            Some(raw) => match raw.parse::<u32>() {
                Ok(number) if number >= 1 => number,
                _ => {
                    return Err(FenError::InvalidFullmoveNumber {
                        found: (*raw).to_string(),
                    })
                }
            },
        };

        for color in Color::BOTH {
            if board.find_king(color).is_none() {
                return Err(FenError::MissingKing { color });
            }
        }

        let state = GameState::new(
            board,
            castling_rights,
            active_color,
            halfmove_clock,
            fullmove_number,
        )
        .expect("both kings verified present");
        Ok(state)
    }

    /// Parse a game state from FEN notation.
    ///
    /// # Panics
    /// Panics if the FEN string is invalid. Use `try_from_fen` for
    /// fallible parsing.
    #[must_use]
    pub fn from_fen(fen: &str) -> Self {
        Self::try_from_fen(fen).expect("Invalid FEN string")
    }

    /// Serialize the game state to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::new();
        for rank in (0..8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8 {
                if let Some((color, piece)) = self.board().grid()[rank][file] {
                    if empty > 0 {
                        row.push_str(&empty.to_string());
                        empty = 0;
                    }
                    row.push(piece.to_fen_char(color));
                } else {
                    empty += 1;
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let active = match self.active_color() {
            Color::White => "w",
            Color::Black => "b",
        };
        let mut castling = String::new();
        let rights = self.castling_rights();
        if rights.has(Color::White, Side::Kingside) {
            castling.push('K');
        }
        if rights.has(Color::White, Side::Queenside) {
            castling.push('Q');
        }
        if rights.has(Color::Black, Side::Kingside) {
            castling.push('k');
        }
        if rights.has(Color::Black, Side::Queenside) {
            castling.push('q');
        }
        if castling.is_empty() {
            castling.push('-');
        }

        format!(
            "{} {} {} - {} {}",
            rows.join("/"),
            active,
            castling,
            self.halfmove_clock(),
            self.fullmove_number()
        )
    }
}

impl FromStr for GameState {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GameState::try_from_fen(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

    #[test]
    fn test_round_trip_start_position() {
        let game = GameState::try_from_fen(START_FEN).unwrap();
        assert_eq!(game.to_fen(), START_FEN);
    }

    #[test]
    fn test_first_rank_maps_to_row_seven() {
        let game = GameState::try_from_fen(START_FEN).unwrap();
        assert_eq!(
            game.board().piece_at(Square(7, 0)).unwrap(),
            Some((Color::Black, Piece::Rook))
        );
        assert_eq!(
            game.board().piece_at(Square(0, 4)).unwrap(),
            Some((Color::White, Piece::King))
        );
        assert_eq!(
            game.board().piece_at(Square(1, 3)).unwrap(),
            Some((Color::White, Piece::Pawn))
        );
    }

    #[test]
    fn test_black_to_move() {
        let game =
            GameState::try_from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq - 0 1")
                .unwrap();
        assert_eq!(game.active_color(), Color::Black);
    }

    #[test]
    fn test_en_passant_field_ignored() {
        let game =
            GameState::try_from_fen("rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1")
                .unwrap();
        assert_eq!(game.en_passant_target(), None);
    }

    #[test]
    fn test_partial_castling_rights() {
        let game =
            GameState::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w Kq - 0 1")
                .unwrap();
        let rights = game.castling_rights();
        assert!(rights.has(Color::White, Side::Kingside));
        assert!(!rights.has(Color::White, Side::Queenside));
        assert!(!rights.has(Color::Black, Side::Kingside));
        assert!(rights.has(Color::Black, Side::Queenside));
    }

    #[test]
    fn test_clock_fields() {
        let game = GameState::try_from_fen("8/3k4/8/8/8/8/3K4/8 w - - 42 17").unwrap();
        assert_eq!(game.halfmove_clock(), 42);
        assert_eq!(game.fullmove_number(), 17);
    }

    #[test]
    fn test_clock_fields_default() {
        let game = GameState::try_from_fen("8/3k4/8/8/8/8/3K4/8 w -  -").unwrap();
        assert_eq!(game.halfmove_clock(), 0);
        assert_eq!(game.fullmove_number(), 1);
    }

    #[test]
    fn test_error_too_few_parts() {
        let result = GameState::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w");
        assert!(matches!(result, Err(FenError::TooFewParts { found: 2 })));
    }

    #[test]
    fn test_error_invalid_piece() {
        let result =
            GameState::try_from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidPiece { char: 'x' })));
    }

    #[test]
    fn test_error_invalid_side_to_move() {
        let result =
            GameState::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR x KQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidSideToMove { .. })));
    }

    #[test]
    fn test_error_invalid_castling() {
        let result =
            GameState::try_from_fen("rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w XQkq - 0 1");
        assert!(matches!(result, Err(FenError::InvalidCastling { char: 'X' })));
    }

    #[test]
    fn test_error_invalid_halfmove_clock() {
        let result = GameState::try_from_fen("8/3k4/8/8/8/8/3K4/8 w - - nope 1");
        assert!(matches!(result, Err(FenError::InvalidHalfmoveClock { .. })));
    }

    #[test]
    fn test_error_invalid_fullmove_number() {
        let result = GameState::try_from_fen("8/3k4/8/8/8/8/3K4/8 w - - 0 0");
        assert!(matches!(result, Err(FenError::InvalidFullmoveNumber { .. })));
    }

    #[test]
    fn test_error_missing_king() {
        let result = GameState::try_from_fen("8/3k4/8/8/8/8/8/8 w - - 0 1");
        assert!(matches!(
            result,
            Err(FenError::MissingKing {
                color: Color::White
            })
        ));
    }

    #[test]
    fn test_from_str_trait() {
        let game: GameState = START_FEN.parse().unwrap();
        assert_eq!(game.active_color(), Color::White);
    }
}
