//! Interactive console front end for the rules engine.
//!
//! All text handling lives here: the core library never parses user
//! input. Moves are entered as coordinate pairs like `e2e4`.

use std::io::{self, BufRead, Write};

use chess_rules::board::{GameState, Square};
use chess_rules::render;

fn main() -> io::Result<()> {
    let stdin = io::stdin();
    let mut input = stdin.lock();

    loop {
        println!("1) New game");
        println!("2) Exit");
        print!("> ");
        io::stdout().flush()?;

        let mut choice = String::new();
        if input.read_line(&mut choice)? == 0 {
            return Ok(());
        }
        match choice.trim() {
            "1" => play_game(&mut input)?,
            "2" => return Ok(()),
            _ => println!("Please enter 1 or 2."),
        }
    }
}

fn play_game(input: &mut impl BufRead) -> io::Result<()> {
    let mut game = GameState::start();
    let mut notice: Option<String> = None;

    loop {
        clear_screen();
        print!("{}", render::render(game.board()));
        println!();

        if game.status().is_terminal() {
            println!("Game over: {}.", game.status());
            return Ok(());
        }
        if let Some(message) = notice.take() {
            println!("{message}");
        }

        print!(
            "{} to play. Enter your move (e.g. e2e4): ",
            game.active_color()
        );
        io::stdout().flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let entered = line.trim();

        let Some((from, to)) = parse_move(entered) else {
            notice = Some(format!(
                "'{entered}' is not a coordinate pair like e2e4."
            ));
            continue;
        };
        if game.make_move(from, to).is_err() {
            notice = Some(format!("{from}{to} is not a legal move."));
        }
    }
}

/// Parse a coordinate pair such as `e2e4` (case-insensitive).
fn parse_move(s: &str) -> Option<(Square, Square)> {
    if s.len() != 4 || !s.is_ascii() {
        return None;
    }
    let s = s.to_ascii_lowercase();
    let from = s[0..2].parse().ok()?;
    let to = s[2..4].parse().ok()?;
    Some((from, to))
}

fn clear_screen() {
    print!("\x1b[2J\x1b[1;1H");
}
