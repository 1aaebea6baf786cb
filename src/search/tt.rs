use chess::ChessMove;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    Exact,
    /// Beta cutoff (failed high).
    Lower,
    /// Alpha cutoff (failed low).
    Upper,
}

#[derive(Clone, Copy, Debug)]
pub struct TTEntry {
    pub key: u64,
    pub best_move: Option<ChessMove>,
    pub score: i32,
    pub depth: u8,
    pub bound: Bound,
}

const EMPTY_ENTRY: TTEntry = TTEntry {
    key: 0,
    best_move: None,
    score: 0,
    depth: 0,
    bound: Bound::Exact,
};

/// Fixed-size cache of searched positions keyed by Zobrist hash.
///
/// Replacement is last-writer-wins: whatever was just searched overwrites
/// whatever hashed to the same slot. Bound interpretation lives in the
/// search; `probe` only reports what was stored.
pub struct TranspositionTable {
    entries: Vec<TTEntry>,
}

impl TranspositionTable {
    pub fn new(size_mb: usize) -> Self {
        let entry_size = std::mem::size_of::<TTEntry>();
        let num_entries = (size_mb.max(1) * 1024 * 1024) / entry_size;

        // Round down to a power of two so the index is a mask.
        let mut capacity = 1;
        while capacity * 2 <= num_entries {
            capacity *= 2;
        }

        Self {
            entries: vec![EMPTY_ENTRY; capacity],
        }
    }

    #[inline]
    fn index(&self, key: u64) -> usize {
        (key as usize) & (self.entries.len() - 1)
    }

    pub fn clear(&mut self) {
        for entry in self.entries.iter_mut() {
            *entry = EMPTY_ENTRY;
        }
    }

    pub fn probe(&self, key: u64) -> Option<TTEntry> {
        let entry = self.entries[self.index(key)];
        if entry.key == key { Some(entry) } else { None }
    }

    pub fn save(
        &mut self,
        key: u64,
        best_move: Option<ChessMove>,
        score: i32,
        depth: u8,
        bound: Bound,
    ) {
        let index = self.index(key);
        let entry = &mut self.entries[index];

        // Keep a known best move around when the new result has none.
        let best_move = if best_move.is_some() || entry.key != key {
            best_move
        } else {
            entry.best_move
        };

        *entry = TTEntry {
            key,
            best_move,
            score,
            depth,
            bound,
        };
    }
}
