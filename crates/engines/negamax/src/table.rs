//! Transposition table: position hash -> cached search result.

use std::collections::HashMap;

/// How a cached value relates to the window it was searched with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Exact,
    Lower,
    Upper,
}

#[derive(Debug, Clone, Copy)]
pub struct TableEntry {
    pub value: f64,
    /// Depth the value was searched to. Entries shallower than the requested
    /// depth are ignored outright, not discounted.
    pub depth: u8,
    pub bound: Bound,
}

/// Hash equality is trusted: no collision verification, no size bound, no
/// replacement policy (stores overwrite unconditionally). The table is
/// cleared at the start of every top-level search, so growth is scoped to a
/// single think call.
#[derive(Debug, Clone, Default)]
pub struct TranspositionTable {
    entries: HashMap<u64, TableEntry>,
}

impl TranspositionTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lookup(&self, hash: u64) -> Option<TableEntry> {
        self.entries.get(&hash).copied()
    }

    pub fn store(&mut self, hash: u64, entry: TableEntry) {
        self.entries.insert(hash, entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
#[path = "table_tests.rs"]
mod table_tests;
