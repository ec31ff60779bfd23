//! Symbol frequency counting.

use crate::Symbol;
use std::collections::BTreeMap;

/// Occurrence counts for every distinct symbol of a text.
///
/// Counting is a single pass over the UTF-16 code units of the input;
/// the map is immutable afterwards. Iteration yields entries in
/// ascending symbol order, which keeps everything built on top of the
/// counts deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrequencyMap {
    counts: BTreeMap<Symbol, u64>,
    total: u64,
}

impl FrequencyMap {
    /// Count symbol occurrences in `text`.
    ///
    /// Empty text yields an empty map.
    pub fn from_text(text: &str) -> Self {
        let mut counts: BTreeMap<Symbol, u64> = BTreeMap::new();
        let mut total = 0;
        for unit in text.encode_utf16() {
            *counts.entry(unit).or_insert(0) += 1;
            total += 1;
        }
        Self { counts, total }
    }

    /// Occurrence count of `symbol`, 0 when absent.
    pub fn count(&self, symbol: Symbol) -> u64 {
        self.counts.get(&symbol).copied().unwrap_or(0)
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    /// Whether no symbols were counted.
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Total number of counted units (source length in UTF-16 units).
    pub fn total(&self) -> u64 {
        self.total
    }

    /// Iterate over `(symbol, count)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, u64)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }
}
