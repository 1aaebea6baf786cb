use std::io::{self, BufRead};
use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

use outpost::book;
use outpost::engine::Engine;
use outpost::logger;
use outpost::position::Position;

const SELFPLAY_DEPTH: i32 = 4;
const SELFPLAY_TIME_MS: u64 = 250;
const SELFPLAY_PLY_CAP: usize = 240;

fn main() {
    logger::init_logging("logs/outpost.log", "outpost=info");

    let mut engine = Engine::new();
    let mut pos = Position::new();

    println!("outpost ready (book: {} lines)", book::len());

    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = match line {
            Ok(l) => l.trim().to_string(),
            Err(_) => break,
        };
        if line.is_empty() {
            continue;
        }

        let parts: Vec<&str> = line.split_whitespace().collect();
        match parts[0] {
            "position" => {
                if let Some(next) = handle_position(&parts) {
                    pos = next;
                } else {
                    println!("error: could not set position");
                }
            }
            "go" => handle_go(&parts, &mut engine, &mut pos),
            "show" => {
                println!("{} (move {})", pos.fingerprint(), pos.fullmove_number());
            }
            "selfplay" => {
                let games = parts
                    .get(1)
                    .and_then(|n| n.parse().ok())
                    .unwrap_or(1usize);
                run_selfplay(games);
            }
            "new" => {
                engine = Engine::new();
                pos = Position::new();
            }
            "quit" | "exit" => break,
            _ => println!("commands: position | go | show | selfplay | new | quit"),
        }
    }
}

fn handle_position(parts: &[&str]) -> Option<Position> {
    let moves_idx = parts.iter().position(|&p| p == "moves");

    let mut pos = if parts.get(1) == Some(&"startpos") {
        Position::new()
    } else if parts.get(1) == Some(&"fen") {
        let end = moves_idx.unwrap_or(parts.len());
        let fen = parts.get(2..end)?.join(" ");
        Position::from_fen(&fen).ok()?
    } else {
        return None;
    };

    if let Some(idx) = moves_idx {
        for text in &parts[idx + 1..] {
            match pos.parse_move(text) {
                Ok(mv) => pos.push(mv),
                Err(err) => {
                    println!("error: {err}");
                    return None;
                }
            }
        }
    }

    Some(pos)
}

fn handle_go(parts: &[&str], engine: &mut Engine, pos: &mut Position) {
    if pos.is_game_over() {
        println!("game over: nothing to search");
        return;
    }

    // Book first: a known line needs no search at all.
    if let Some(book_move) = book::probe(pos) {
        println!("bestmove {book_move} (book)");
        return;
    }

    let millis: u64 = parts.get(1).and_then(|n| n.parse().ok()).unwrap_or(5000);
    let budget = Duration::from_millis(millis);

    match engine.predict_move_with(pos, 64, budget) {
        Some(mv) => println!("bestmove {mv}"),
        None => println!("bestmove (none)"),
    }
}

fn run_selfplay(games: usize) {
    let mut white = Engine::new();
    let mut black = Engine::new();

    let bar = ProgressBar::new(games as u64);
    bar.set_style(
        ProgressStyle::with_template("{bar:30} {pos}/{len} games {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );

    let mut white_points = 0.0f64;
    for _ in 0..games {
        let result = play_single_game(&mut white, &mut black);
        white_points += result;
        white.record_result(&mut black, result);
        bar.inc(1);
        bar.set_message(format!(
            "white {:.1} pts, elo {:.0} vs {:.0}",
            white_points,
            white.rating(),
            black.rating()
        ));
    }
    bar.finish();

    println!(
        "selfplay done: white {white_points:.1}/{games} | ratings {:.0} vs {:.0}",
        white.rating(),
        black.rating()
    );
}

/// Play one game, returning the result from White's point of view.
fn play_single_game(white: &mut Engine, black: &mut Engine) -> f64 {
    let mut pos = Position::new();
    let budget = Duration::from_millis(SELFPLAY_TIME_MS);

    for ply in 0..SELFPLAY_PLY_CAP {
        if pos.is_game_over() || pos.repetitions() >= 3 {
            break;
        }

        let engine = if ply % 2 == 0 { &mut *white } else { &mut *black };
        match engine.predict_move_with(&mut pos, SELFPLAY_DEPTH, budget) {
            Some(mv) => pos.push(mv),
            None => break,
        }
    }

    if pos.is_checkmate() {
        // The side to move is the side that got mated.
        if pos.side_to_move() == chess::Color::White {
            0.0
        } else {
            1.0
        }
    } else {
        0.5
    }
}
