//! Iterative-deepening negamax with quiescence.
//!
//! The wall clock is only consulted between root moves; the recursion
//! below the root runs to completion, which keeps pruning deterministic
//! at the cost of (at worst) one extra root subtree after the budget
//! expires. A depth whose root loop is cut short is discarded whole, so
//! the returned move is always the best of some fully completed depth.

use std::cmp::Reverse;
use std::time::{Duration, Instant};

use arrayvec::ArrayVec;
use chess::{ChessMove, Color};
use tracing::{debug, trace};

use crate::book;
use crate::position::Position;
use crate::search::context::SearchContext;
use crate::search::eval::evaluate;
use crate::search::ordering::order_moves;
use crate::search::pst::material_value;
use crate::search::tt::{Bound, TranspositionTable};
use crate::search::{INFINITY, MATE_THRESHOLD};

const MAX_QUIESCENCE_DEPTH: u8 = 8;
const ASPIRATION_WINDOW: i32 = 50;

/// Book moves are only spliced in near the root of shallow searches.
const BOOK_DEPTH_LIMIT: i32 = 6;
const BOOK_MOVE_LIMIT: u32 = 10;

#[inline]
fn color_sign(color: Color) -> i32 {
    match color {
        Color::White => 1,
        Color::Black => -1,
    }
}

fn capture_order_score(pos: &Position, mv: ChessMove) -> i32 {
    if !pos.is_capture(mv) {
        return 0;
    }
    let victim = pos.piece_at(mv.get_dest()).map(|(p, _)| material_value(p));
    let aggressor = pos.piece_at(mv.get_source()).map(|(p, _)| material_value(p));
    match (victim, aggressor) {
        (Some(v), Some(a)) => v - a / 10,
        _ => 0,
    }
}

/// Resolve the tactical horizon: stand pat, then search only captures,
/// promotions and checks, fail-hard.
pub fn qsearch(pos: &mut Position, mut alpha: i32, beta: i32, color: i32, qdepth: u8) -> i32 {
    if qdepth >= MAX_QUIESCENCE_DEPTH {
        return color * evaluate(pos);
    }

    let stand_pat = color * evaluate(pos);
    if stand_pat >= beta {
        return beta;
    }
    if stand_pat > alpha {
        alpha = stand_pat;
    }

    let mut loud: ArrayVec<(i32, ChessMove), 256> = ArrayVec::new();
    for mv in pos.legal_moves() {
        if pos.is_capture(mv) || pos.is_promotion(mv) || pos.gives_check(mv) {
            let _ = loud.try_push((capture_order_score(pos, mv), mv));
        }
    }
    loud.sort_by_key(|&(score, _)| Reverse(score));

    for (_, mv) in loud {
        pos.push(mv);
        let score = -qsearch(pos, -beta, -alpha, -color, qdepth + 1);
        pos.pop();

        if score >= beta {
            return beta;
        }
        if score > alpha {
            alpha = score;
        }
    }

    alpha
}

/// Fail-hard alpha-beta over the full move set. `color` is +1 when White
/// is to move at this node.
pub fn negamax(
    pos: &mut Position,
    depth: i32,
    mut alpha: i32,
    mut beta: i32,
    color: i32,
    tt: &mut TranspositionTable,
    ctx: &mut SearchContext,
) -> i32 {
    // A position we have already been through twice is a dead draw as
    // far as this line is concerned.
    if pos.repetitions() >= 2 {
        return 0;
    }

    if depth <= 0 || pos.is_game_over() {
        return qsearch(pos, alpha, beta, color, 0);
    }

    let key = pos.zobrist();
    let mut prev_best = None;
    if let Some(entry) = tt.probe(key) {
        prev_best = entry.best_move;
        if entry.depth as i32 >= depth {
            match entry.bound {
                Bound::Exact => return entry.score,
                Bound::Lower => alpha = alpha.max(entry.score),
                Bound::Upper => beta = beta.min(entry.score),
            }
            if alpha >= beta {
                return entry.score;
            }
        }
    }

    let in_check = pos.in_check();
    let depth = if in_check { depth + 1 } else { depth };

    // Null-move pruning: hand the opponent a free move and see whether
    // the position still clears beta. Skipped in check and in pawn-only
    // endings where zugzwang makes the free move an asset.
    if depth >= 3 && !in_check && pos.has_non_pawn_material(pos.side_to_move()) {
        let r = if depth >= 4 { 2 } else { 1 };
        if pos.push_null() {
            let score = -negamax(pos, depth - 1 - r, -beta, -beta + 1, -color, tt, ctx);
            pos.pop();
            if score >= beta {
                return beta;
            }
        }
    }

    let mut moves = order_moves(pos, depth, prev_best, ctx);

    if depth <= BOOK_DEPTH_LIMIT && pos.fullmove_number() <= BOOK_MOVE_LIMIT {
        if let Some(book_move) = book::probe(pos) {
            if let Some(idx) = moves.iter().position(|&m| m == book_move) {
                trace!(%book_move, "book move spliced to front");
                moves.remove(idx);
                moves.insert(0, book_move);
            }
        }
    }

    let entry_alpha = alpha;
    let mut best_score = -INFINITY;
    let mut best_move = None;

    for (searched, &mv) in moves.iter().enumerate() {
        let index = searched + 1;
        let quiet = !pos.is_capture(mv) && !pos.is_promotion(mv);

        // Late-move reduction: quiet, non-checking moves far down the
        // ordering get a shallower first look.
        let reducible = index > 1 && depth >= 3 && quiet && !pos.gives_check(mv);

        pos.push(mv);
        let score = if reducible {
            let r = if index > 4 { 1 } else { 0 };
            let reduced = -negamax(pos, depth - 1 - r, -beta, -alpha, -color, tt, ctx);
            if reduced > alpha {
                -negamax(pos, depth - 1, -beta, -alpha, -color, tt, ctx)
            } else {
                reduced
            }
        } else {
            -negamax(pos, depth - 1, -beta, -alpha, -color, tt, ctx)
        };
        pos.pop();

        if score > best_score {
            best_score = score;
            best_move = Some(mv);
        }
        alpha = alpha.max(score);

        if alpha >= beta {
            if quiet {
                ctx.update_killer(depth, mv);
                ctx.update_history(mv, depth);
            }
            tt.save(key, Some(mv), beta, depth as u8, Bound::Lower);
            return beta;
        }
    }

    let bound = if best_score <= entry_alpha {
        Bound::Upper
    } else if best_score >= beta {
        Bound::Lower
    } else {
        Bound::Exact
    };
    tt.save(key, best_move, best_score, depth as u8, bound);

    best_score
}

/// Iterative deepening driver with aspiration windows.
///
/// Returns the best move of the deepest fully completed iteration, or
/// None when no iteration completed (no time, no legal moves).
pub fn search(
    pos: &mut Position,
    tt: &mut TranspositionTable,
    max_depth: i32,
    time_limit: Duration,
) -> Option<ChessMove> {
    let start = Instant::now();
    let budget = time_limit.as_secs_f64();
    let root_color = color_sign(pos.side_to_move());

    let mut ctx = SearchContext::new();
    ctx.clear();

    let mut best_move = None;
    let mut prev_best = None;
    let mut prev_score = 0;

    'deepening: for depth in 1..=max_depth {
        if start.elapsed().as_secs_f64() >= budget * 0.9 {
            break;
        }

        let mut alpha_low = (prev_score - ASPIRATION_WINDOW).max(-INFINITY);
        let mut beta_high = (prev_score + ASPIRATION_WINDOW).min(INFINITY);
        loop {
            let mut alpha = alpha_low;
            let beta = beta_high;

            let moves = order_moves(pos, depth, prev_best, &ctx);
            if moves.is_empty() {
                return best_move;
            }

            let mut current_score = -INFINITY;
            let mut current_move = None;

            for mv in moves {
                pos.push(mv);
                let score = -negamax(pos, depth - 1, -beta, -alpha, -root_color, tt, &mut ctx);
                pos.pop();

                if start.elapsed().as_secs_f64() > budget {
                    // Partial iterations are unreliable; fall back to the
                    // last completed depth.
                    debug!(depth, "time expired, discarding partial iteration");
                    break 'deepening;
                }

                if score > current_score {
                    current_score = score;
                    current_move = Some(mv);
                }
                if current_score > alpha {
                    alpha = current_score;
                }
                if alpha >= beta {
                    break;
                }
            }

            // A score pinned to a window edge is a fail, not an answer:
            // reopen the violated side and redo the depth. An edge already
            // at +/-INFINITY cannot move and counts as final.
            if current_score <= alpha_low && alpha_low > -INFINITY {
                trace!(depth, "aspiration fail low, reopening alpha");
                alpha_low = -INFINITY;
                continue;
            }
            if current_score >= beta_high && beta_high < INFINITY {
                trace!(depth, "aspiration fail high, reopening beta");
                beta_high = INFINITY;
                continue;
            }

            if current_move.is_some() {
                best_move = current_move;
                prev_best = current_move;
                prev_score = current_score;
            }
            debug!(depth, score = current_score, "iteration complete");

            if current_score.abs() >= MATE_THRESHOLD {
                // Deeper search cannot improve on a forced mate.
                break 'deepening;
            }
            break;
        }
    }

    best_move
}
