use crate::Pile;
use crate::Stones;
use std::collections::HashMap;

/// Append-only cache of solved piles, owned by whoever holds it.
///
/// Entries are never evicted. Hit and miss counters follow each
/// subproblem lookup, so repeated queries show up as hits.
#[derive(Debug, Default, Clone)]
pub struct Memo {
    table: HashMap<Stones, bool>,
    hits: usize,
    misses: usize,
}

/// Counters exposed by [`Memo::info`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MemoInfo {
    pub hits: usize,
    pub misses: usize,
    pub size: usize,
}

impl Memo {
    /// Cached result, counting a hit. Absent entries are not counted here;
    /// the miss is recorded when the entry is inserted.
    pub fn lookup(&mut self, pile: Pile) -> Option<bool> {
        let found = self.table.get(&pile.stones()).copied();
        if found.is_some() {
            self.hits += 1;
        }
        found
    }
    /// Cached result without touching the counters.
    pub fn peek(&self, pile: Pile) -> Option<bool> {
        self.table.get(&pile.stones()).copied()
    }
    pub fn contains(&self, pile: Pile) -> bool {
        self.table.contains_key(&pile.stones())
    }
    /// Record a freshly computed result. Existing entries are kept as is.
    pub fn insert(&mut self, pile: Pile, wins: bool) {
        if let std::collections::hash_map::Entry::Vacant(entry) = self.table.entry(pile.stones()) {
            entry.insert(wins);
            self.misses += 1;
        }
    }
    pub fn len(&self) -> usize {
        self.table.len()
    }
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }
    pub fn info(&self) -> MemoInfo {
        MemoInfo {
            hits: self.hits,
            misses: self.misses,
            size: self.table.len(),
        }
    }
}

impl std::fmt::Display for MemoInfo {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "MemoInfo(hits={}, misses={}, size={})",
            self.hits, self.misses, self.size
        )
    }
}
