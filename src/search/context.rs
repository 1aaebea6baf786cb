use chess::ChessMove;

/// Upper bound on the depth index; check extensions can push the nominal
/// depth slightly past the deepener's cap.
pub const MAX_DEPTH: usize = 128;

/// Per-search heuristic state: killer moves keyed by remaining depth and a
/// from/to history table. Both are owned by the running search and cleared
/// at the start of every top-level call.
pub struct SearchContext {
    pub killer_moves: Vec<[Option<ChessMove>; 2]>,
    pub history: [[i32; 64]; 64],
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchContext {
    pub fn new() -> Self {
        Self {
            killer_moves: vec![[None; 2]; MAX_DEPTH],
            history: [[0; 64]; 64],
        }
    }

    pub fn clear(&mut self) {
        for slot in self.killer_moves.iter_mut() {
            *slot = [None, None];
        }
        self.history = [[0; 64]; 64];
    }

    /// Capacity-two slide: the newest killer lands in slot 0, the oldest
    /// falls off the end.
    pub fn update_killer(&mut self, depth: i32, mv: ChessMove) {
        let Some(slot) = self.killer_moves.get_mut(depth.max(0) as usize) else {
            return;
        };
        if slot[0] != Some(mv) {
            slot[1] = slot[0];
            slot[0] = Some(mv);
        }
    }

    pub fn is_killer(&self, depth: i32, mv: ChessMove) -> bool {
        self.killer_moves
            .get(depth.max(0) as usize)
            .is_some_and(|slot| slot.contains(&Some(mv)))
    }

    pub fn update_history(&mut self, mv: ChessMove, depth: i32) {
        let from = mv.get_source().to_index();
        let to = mv.get_dest().to_index();
        self.history[from][to] += depth * depth;
    }

    pub fn history(&self, mv: ChessMove) -> i32 {
        self.history[mv.get_source().to_index()][mv.get_dest().to_index()]
    }
}
