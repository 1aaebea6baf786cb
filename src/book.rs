//! Tiny built-in opening book.
//!
//! Entries map a position (identified by its clock-free fingerprint) to a
//! recommended reply in either coordinate or short algebraic notation.
//! Lookups that fail to parse or turn out illegal are skipped silently;
//! the search simply proceeds without a book hint.

use chess::ChessMove;
use once_cell::sync::Lazy;
use tracing::trace;

use crate::position::Position;

/// Raw book lines. Keys are FENs as recorded; only the first four fields
/// take part in matching.
const ENTRIES: &[(&str, &str)] = &[
    // Center Game response
    ("rnbqkbnr/pppp1ppp/8/4p3/3PP3/8/PPP2PPP/RNBQKBNR b KQkq - 0 2", "d5"),
    // Petrov setup
    ("rnbqkbnr/pppp1ppp/8/4p3/3PP3/2N2N2/PPP2PPP/R1BQKB1R b KQkq - 0 3", "Nf6"),
    // King's Indian Defence
    ("rnbqkbnr/pp1ppppp/8/2p5/3P4/8/PPP2PPP/RNBQKBNR b KQkq - 0 3", "g6"),
    // Queen's Pawn: center counter
    ("rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq - 0 2", "d5"),
    // English transposition
    ("rnbqkb1r/pppppppp/5n2/8/3P4/8/PPP1PPPP/RNBQKBNR w KQkq - 1 2", "c4"),
    // King's Indian Defence
    ("rnbqkb1r/pppppppp/5n2/8/2PP4/8/PP2PPPP/RNBQKBNR b KQkq - 0 2", "g6"),
    // Nimzo-Indian pin
    ("rnbqkb1r/pppp1ppp/4pn2/8/2PP4/8/PP2PPPP/RNBQKBNR b KQkq - 0 3", "Bb4"),
    // Caro-Kann shape
    ("rnbqkbnr/pp1ppppp/8/2p5/3P4/8/PPP1PPPP/RNBQKBNR w KQkq - 0 2", "c6"),
    // Symmetrical English
    ("rnbqkbnr/pppppppp/8/8/2P5/8/PP1PPPPP/RNBQKBNR b KQkq - 0 1", "c5"),
    // Botvinnik System
    ("rnbqkbnr/pppp1ppp/8/4p3/2P5/8/PPP1PPPP/RNBQKBNR w KQkq - 0 1", "g3"),
    // King's Pawn Game
    ("rnbqkb1r/pppppppp/5n2/8/4P3/8/PPP1PPPP/RNBQKBNR w KQkq - 1 2", "e5"),
    // Closed Game
    ("rnbqkbnr/pppp1ppp/8/2p5/2P5/8/PPP1PPPP/RNBQKBNR b KQkq - 0 2", "c5"),
    // Scotch-flavoured counter
    ("rnbqkbnr/pp1ppppp/8/2p5/3P4/8/PPP2PPP/RNBQKBNR b KQkq - 0 2", "e5"),
    // Queen's Pawn Opening
    ("rnbqkbnr/pppppppp/8/8/2P5/8/PPP1PPPP/RNBQKBNR w KQkq - 1 2", "d4"),
    // Pirc Defence
    ("rnbqkbnr/pppppppp/8/8/2P5/8/PPP1PPPP/RNBQKBNR b KQkq - 0 1", "d6"),
    // Petrov Defence
    ("rnbqkbnr/pppp1ppp/8/4p3/3PP3/2N2N2/PPP2PPP/RNBQKBNR b KQkq - 0 3", "Nf6"),
    // Symmetrical reply to d4
    ("rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq - 0 1", "c5"),
    // King's Gambit Declined shape
    ("rnbqkbnr/ppp1pppp/3p4/8/3P4/8/PPP1PPPP/RNBQKBNR w KQkq - 0 2", "d4"),
    // Zukertort Opening
    ("rnbqkbnr/pppppppp/8/8/2P5/8/PP1PPPPP/RNBQKBNR w KQkq - 0 1", "Nf3"),
];

/// Normalized (4-field key, notation) pairs, in recorded order.
static BOOK: Lazy<Vec<(String, &'static str)>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|&(fen, notation)| {
            let key = fen.split_whitespace().take(4).collect::<Vec<_>>().join(" ");
            (key, notation)
        })
        .collect()
});

/// Look the position up in the book; first recorded match wins.
pub fn probe(pos: &Position) -> Option<ChessMove> {
    let key = pos.fingerprint();
    for (book_key, notation) in BOOK.iter() {
        if *book_key != key {
            continue;
        }
        match pos.parse_move(notation) {
            Ok(mv) => {
                trace!(%mv, "opening book hit");
                return Some(mv);
            }
            // A malformed or illegal book line is no reason to fail a
            // search; skip it.
            Err(_) => continue,
        }
    }
    None
}

pub fn len() -> usize {
    BOOK.len()
}

pub fn is_empty() -> bool {
    BOOK.is_empty()
}
