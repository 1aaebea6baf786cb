//! Heuristic move ordering for the alpha-beta search.
//!
//! Every legal move is scored in a single pass and the list is stably
//! sorted descending, so moves carrying several signals simply sum them
//! and ties keep generation order.

use arrayvec::ArrayVec;
use chess::{ChessMove, Color, Piece, Square};
use std::cmp::Reverse;

use crate::position::Position;
use crate::search::context::SearchContext;
use crate::search::pst::material_value;

const PREV_BEST_SCORE: i32 = 100_000;
const PROMOTION_SCORE: i32 = 10_000;
const CAPTURE_BASE: i32 = 5_000;
const KILLER_SCORE: i32 = 4_500;
const CHECK_SCORE: i32 = 3_000;
const DEVELOPMENT_SCORE: i32 = 3_000;
const CENTRAL_DEST_SCORE: i32 = 1_500;

/// Opening window for the development and central-pawn bonuses.
const OPENING_MOVE_LIMIT: u32 = 10;

#[inline]
fn central(sq: Square) -> bool {
    let file = sq.get_file().to_index();
    let rank = sq.get_rank().to_index();
    (2..=5).contains(&file) && (2..=5).contains(&rank)
}

fn on_minor_start_square(piece: Piece, sq: Square, color: Color) -> bool {
    match (color, piece) {
        (Color::White, Piece::Knight) => sq == Square::B1 || sq == Square::G1,
        (Color::White, Piece::Bishop) => sq == Square::C1 || sq == Square::F1,
        (Color::Black, Piece::Knight) => sq == Square::B8 || sq == Square::G8,
        (Color::Black, Piece::Bishop) => sq == Square::C8 || sq == Square::F8,
        _ => false,
    }
}

/// Bonus granted the first time a given piece instance shows up in the
/// move list, nudging the search to spread play across pieces.
fn diversity_bonus(piece: Piece, from: Square, fullmove: u32) -> i32 {
    match piece {
        Piece::Bishop => 3_500,
        Piece::Queen => 3_000,
        Piece::Rook => 2_500,
        Piece::Pawn => {
            let file = from.get_file().to_index();
            if (2..=5).contains(&file) && fullmove <= OPENING_MOVE_LIMIT {
                2_000
            } else {
                1_500
            }
        }
        Piece::Knight => 1_000,
        Piece::King => 0,
    }
}

pub fn order_moves(
    pos: &Position,
    depth: i32,
    prev_best: Option<ChessMove>,
    ctx: &SearchContext,
) -> Vec<ChessMove> {
    let moves = pos.legal_moves();
    let side = pos.side_to_move();
    let fullmove = pos.fullmove_number();

    let mut seen: ArrayVec<(Piece, Square), 64> = ArrayVec::new();
    let mut scored: Vec<(i32, ChessMove)> = Vec::with_capacity(moves.len());

    for mv in moves {
        let from = mv.get_source();
        let to = mv.get_dest();
        let piece = pos.piece_at(from).map(|(p, _)| p);
        let mut score = 0;

        if prev_best == Some(mv) {
            score += PREV_BEST_SCORE;
        }

        if pos.is_capture(mv) {
            // En passant leaves the target square empty; the victim is
            // still a pawn.
            let victim = pos
                .piece_at(to)
                .map(|(p, _)| material_value(p))
                .unwrap_or_else(|| material_value(Piece::Pawn));
            let aggressor = piece.map(material_value).unwrap_or(0);
            score += CAPTURE_BASE + 10 * victim - aggressor;
        }

        if mv.get_promotion().is_some() {
            score += PROMOTION_SCORE;
        }

        if pos.gives_check(mv) {
            score += CHECK_SCORE;
        }

        if ctx.is_killer(depth, mv) {
            score += KILLER_SCORE;
        }

        score += ctx.history(mv);

        if let Some(p) = piece {
            if !seen.contains(&(p, from)) {
                let _ = seen.try_push((p, from));
                score += diversity_bonus(p, from, fullmove);
            }

            if fullmove <= OPENING_MOVE_LIMIT && on_minor_start_square(p, from, side) {
                score += DEVELOPMENT_SCORE;
            }
        }

        if central(to) {
            score += CENTRAL_DEST_SCORE;
        }

        scored.push((score, mv));
    }

    // Stable sort: equal scores keep movegen order.
    scored.sort_by_key(|&(score, _)| Reverse(score));
    scored.into_iter().map(|(_, mv)| mv).collect()
}
