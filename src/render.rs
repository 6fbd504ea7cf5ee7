//! Plain-text board rendering.
//!
//! Reads the grid snapshot only; nothing here can mutate game state.

use crate::board::Board;

/// One line per rank, rank 8 at the top.
///
/// Occupied squares show the piece glyph; empty squares show their
/// parity, `■` for dark and `□` for light. Cells are joined by single
/// spaces.
#[must_use]
pub fn board_lines(board: &Board) -> Vec<String> {
    let grid = board.grid();
    (0..8)
        .rev()
        .map(|rank| {
            let cells: Vec<String> = (0..8)
                .map(|file| {
                    let glyph = match grid[rank][file] {
                        Some((color, piece)) => piece.glyph(color),
                        None if (rank + file) % 2 == 0 => '\u{25a0}', // ■
                        None => '\u{25a1}',                           // □
                    };
                    glyph.to_string()
                })
                .collect();
            cells.join(" ")
        })
        .collect()
}

/// The whole board as one newline-joined string, with rank numbers on
/// the left and file letters underneath.
#[must_use]
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    for (i, line) in board_lines(board).iter().enumerate() {
        out.push_str(&format!("{} {}\n", 8 - i, line));
    }
    out.push_str("  a b c d e f g h\n");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::GameState;

    #[test]
    fn test_board_lines_start_position() {
        let game = GameState::start();
        let lines = board_lines(game.board());
        assert_eq!(lines.len(), 8);
        assert_eq!(lines[0], "♜ ♞ ♝ ♛ ♚ ♝ ♞ ♜");
        assert_eq!(lines[1], "♟ ♟ ♟ ♟ ♟ ♟ ♟ ♟");
        assert_eq!(lines[6], "♙ ♙ ♙ ♙ ♙ ♙ ♙ ♙");
        assert_eq!(lines[7], "♖ ♘ ♗ ♕ ♔ ♗ ♘ ♖");
    }

    #[test]
    fn test_empty_square_parity() {
        let game = GameState::start();
        let lines = board_lines(game.board());
        // Rank 5 (line index 3) starts on a5, a dark square.
        assert_eq!(lines[3], "■ □ ■ □ ■ □ ■ □");
        assert_eq!(lines[4], "□ ■ □ ■ □ ■ □ ■");
    }

    #[test]
    fn test_render_has_coordinates() {
        let game = GameState::start();
        let text = render(game.board());
        assert!(text.starts_with("8 "));
        assert!(text.ends_with("  a b c d e f g h\n"));
    }
}
