use std::collections::HashMap;

/// Default number of cached evaluations before the memo is flushed
pub const DEFAULT_MEMO_ENTRIES: usize = 1 << 22;

/// Flat cache of static evaluations, keyed by memo key and stored from
/// White's point of view.
///
/// Unlike a transposition table nothing about search bounds or depth is
/// kept, so entries stay valid across searches. When the entry limit is hit
/// the whole memo is cleared.
#[derive(Debug)]
pub struct EvalMemo {
    entries: HashMap<u64, f32>,
    max_entries: usize,
    hits: u64,
    misses: u64,
}

impl Default for EvalMemo {
    fn default() -> Self {
        Self::with_limit(DEFAULT_MEMO_ENTRIES)
    }
}

impl EvalMemo {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limit(max_entries: usize) -> Self {
        Self {
            entries: HashMap::new(),
            max_entries: max_entries.max(1),
            hits: 0,
            misses: 0,
        }
    }

    #[inline]
    pub fn get(&mut self, key: u64) -> Option<f32> {
        let found = self.entries.get(&key).copied();
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }

    pub fn insert(&mut self, key: u64, white_score: f32) {
        if self.entries.len() >= self.max_entries && !self.entries.contains_key(&key) {
            log::debug!("evaluation memo full ({} entries), clearing", self.entries.len());
            self.entries.clear();
        }
        self.entries.insert(key, white_score);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.hits = 0;
        self.misses = 0;
    }

    /// (hits, misses) since creation or the last `clear`
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }
}
