//! Code table derivation from a Huffman tree.

use crate::Symbol;
use crate::error::{HuffError, Result};
use crate::tree::{HuffmanTree, Node};
use std::collections::BTreeMap;

/// A prefix-free mapping from symbols to '0'/'1' code strings.
///
/// Entries are kept sorted by symbol, so iteration order (and with it
/// the rendered frame) is stable for a given tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodeTable {
    codes: BTreeMap<Symbol, String>,
}

impl CodeTable {
    /// Derive the table by walking the tree root to leaves.
    ///
    /// Stepping left appends '0' and stepping right appends '1'; the
    /// accumulated path is the leaf symbol's code. Codes produced this
    /// way are prefix-free by construction since symbols only sit on
    /// leaves.
    ///
    /// # Errors
    ///
    /// [`HuffError::DegenerateAlphabet`] when the root itself is a
    /// leaf: a single-symbol alphabet would receive the empty code,
    /// which cannot address anything in the payload.
    pub fn from_tree(tree: &HuffmanTree) -> Result<Self> {
        if let Node::Leaf { symbol, .. } = tree.root() {
            return Err(HuffError::DegenerateAlphabet { symbol: *symbol });
        }

        let mut codes = BTreeMap::new();
        assign(tree.root(), String::new(), &mut codes);
        Ok(Self { codes })
    }

    /// Wrap already-validated entries, e.g. parsed from a frame.
    pub(crate) fn from_entries(codes: BTreeMap<Symbol, String>) -> Self {
        Self { codes }
    }

    /// The code for a symbol, if the symbol occurred in the source.
    pub fn get(&self, symbol: Symbol) -> Option<&str> {
        self.codes.get(&symbol).map(String::as_str)
    }

    /// Number of coded symbols.
    pub fn len(&self) -> usize {
        self.codes.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Iterate `(symbol, code)` pairs in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }
}

fn assign(node: &Node, prefix: String, codes: &mut BTreeMap<Symbol, String>) {
    match node {
        Node::Leaf { symbol, .. } => {
            codes.insert(*symbol, prefix);
        }
        Node::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('0');
            assign(left, left_prefix, codes);

            let mut right_prefix = prefix;
            right_prefix.push('1');
            assign(right, right_prefix, codes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::freq::FrequencyMap;

    fn table_for(text: &str) -> CodeTable {
        let freqs = FrequencyMap::from_text(text);
        let tree = HuffmanTree::from_frequencies(&freqs);
        CodeTable::from_tree(&tree).unwrap()
    }

    #[test]
    fn test_concrete_codes_two_symbols() {
        let table = table_for("aaabb");
        assert_eq!(table.get(b'a' as Symbol), Some("1"));
        assert_eq!(table.get(b'b' as Symbol), Some("0"));
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn test_concrete_codes_three_symbols() {
        // 'a' twice, 'b' and 'c' once each: the singles merge first.
        let table = table_for("aabc");
        assert_eq!(table.get(b'a' as Symbol), Some("0"));
        assert_eq!(table.get(b'b' as Symbol), Some("10"));
        assert_eq!(table.get(b'c' as Symbol), Some("11"));
    }

    #[test]
    fn test_absent_symbol_has_no_code() {
        let table = table_for("aaabb");
        assert_eq!(table.get(b'z' as Symbol), None);
    }

    #[test]
    fn test_single_symbol_rejected() {
        let freqs = FrequencyMap::from_text("aaaa");
        let tree = HuffmanTree::from_frequencies(&freqs);
        let err = CodeTable::from_tree(&tree).unwrap_err();
        assert!(matches!(
            err,
            HuffError::DegenerateAlphabet { symbol } if symbol == b'a' as Symbol
        ));
    }

    #[test]
    fn test_codes_are_prefix_free() {
        let table = table_for("the quick brown fox jumps over the lazy dog");
        let codes: Vec<&str> = table.iter().map(|(_, code)| code).collect();
        for (i, a) in codes.iter().enumerate() {
            for (j, b) in codes.iter().enumerate() {
                if i != j {
                    assert!(!b.starts_with(a), "{} is a prefix of {}", a, b);
                }
            }
        }
    }

    #[test]
    fn test_kraft_sum_is_exactly_one() {
        // A full binary tree uses the whole code space.
        let table = table_for("abracadabra alakazam");
        let max_len = table.iter().map(|(_, code)| code.len()).max().unwrap();
        let sum: u128 = table
            .iter()
            .map(|(_, code)| 1u128 << (max_len - code.len()))
            .sum();
        assert_eq!(sum, 1u128 << max_len);
    }

    #[test]
    fn test_heavier_symbols_get_no_longer_codes() {
        let text = "sells seashells by the seashore";
        let freqs = FrequencyMap::from_text(text);
        let tree = HuffmanTree::from_frequencies(&freqs);
        let table = CodeTable::from_tree(&tree).unwrap();

        let entries: Vec<(u64, usize)> = table
            .iter()
            .map(|(symbol, code)| (freqs.count(symbol), code.len()))
            .collect();
        for &(count_a, len_a) in &entries {
            for &(count_b, len_b) in &entries {
                if count_a > count_b {
                    assert!(len_a <= len_b);
                }
            }
        }
    }

    #[test]
    fn test_round_trips_through_rebuilt_tree() {
        let table = table_for("lossless round trip");
        let rebuilt = HuffmanTree::from_code_table(&table).unwrap();
        let again = CodeTable::from_tree(&rebuilt).unwrap();
        assert_eq!(table, again);
    }

    #[test]
    fn test_iteration_sorted_by_symbol() {
        let table = table_for("zyxabc");
        let symbols: Vec<Symbol> = table.iter().map(|(symbol, _)| symbol).collect();
        let mut sorted = symbols.clone();
        sorted.sort_unstable();
        assert_eq!(symbols, sorted);
    }
}
