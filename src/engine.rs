//! Engine facade: one search instance with its own tables and a rating.

use std::time::Duration;

use chess::ChessMove;
use rand::seq::IndexedRandom;
use tracing::{debug, warn};

use crate::position::Position;
use crate::search::search::search;
use crate::search::tt::TranspositionTable;

const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(5);
const DEFAULT_MAX_DEPTH: i32 = 64;
const TT_SIZE_MB: usize = 16;

/// A self-contained engine instance. Tables are owned, never shared, so
/// several engines can coexist in one process.
pub struct Engine {
    rating: f64,
    tt: TranspositionTable,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    pub fn new() -> Self {
        Self {
            rating: 1000.0,
            tt: TranspositionTable::new(TT_SIZE_MB),
        }
    }

    pub fn rating(&self) -> f64 {
        self.rating
    }

    /// Pick a move for the side to move, spending up to the default time
    /// budget. Returns None only when the position has no legal moves.
    pub fn predict_move(&mut self, pos: &mut Position) -> Option<ChessMove> {
        self.predict_move_with(pos, DEFAULT_MAX_DEPTH, DEFAULT_TIME_LIMIT)
    }

    pub fn predict_move_with(
        &mut self,
        pos: &mut Position,
        max_depth: i32,
        time_limit: Duration,
    ) -> Option<ChessMove> {
        match search(pos, &mut self.tt, max_depth, time_limit) {
            Some(mv) => Some(mv),
            None => {
                debug!("search produced no move, sampling a fallback");
                fallback_move(pos)
            }
        }
    }

    /// Record a finished game against `opponent` (1.0 win, 0.5 draw, 0.0
    /// loss, from this engine's point of view) and update both ratings.
    /// Cached search state does not survive into the next game.
    pub fn record_result(&mut self, opponent: &mut Engine, result: f64) {
        if !(0.0..=1.0).contains(&result) {
            warn!(result, "ignoring out-of-range game result");
            return;
        }

        let expected = 1.0 / (1.0 + 10f64.powf((opponent.rating - self.rating) / 400.0));
        let k = k_factor(self.rating);

        self.rating = (self.rating + k * (result - expected)).round();
        opponent.rating = (opponent.rating + k * ((1.0 - result) - (1.0 - expected))).round();

        self.tt.clear();
        opponent.tt.clear();
    }
}

fn k_factor(rating: f64) -> f64 {
    if rating < 2000.0 {
        32.0
    } else if rating < 2400.0 {
        24.0
    } else {
        16.0
    }
}

/// Last-resort move choice when the search comes back empty-handed:
/// uniform over the legal moves that do not deliver mate on the spot,
/// else uniform over everything.
fn fallback_move(pos: &mut Position) -> Option<ChessMove> {
    let legal = pos.legal_moves();
    if legal.is_empty() {
        return None;
    }

    let mut non_mating = Vec::with_capacity(legal.len());
    for &mv in &legal {
        pos.push(mv);
        let mates = pos.is_checkmate();
        pos.pop();
        if !mates {
            non_mating.push(mv);
        }
    }

    let mut rng = rand::rng();
    non_mating
        .choose(&mut rng)
        .or_else(|| legal.choose(&mut rng))
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn k_factor_bands() {
        assert_eq!(k_factor(1000.0), 32.0);
        assert_eq!(k_factor(2100.0), 24.0);
        assert_eq!(k_factor(2500.0), 16.0);
    }

    #[test]
    fn fallback_returns_legal_move() {
        let mut pos = Position::new();
        let mv = fallback_move(&mut pos).expect("startpos has moves");
        assert!(pos.is_legal(mv));
    }
}
