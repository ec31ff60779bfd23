//! Huffman tree construction and reconstruction.

use crate::Symbol;
use crate::error::{HuffError, Result};
use crate::freq::FrequencyMap;
use crate::heap::MinHeap;
use crate::table::CodeTable;
use std::cmp::Ordering;

/// A node of the Huffman tree.
///
/// Leaves carry a symbol; internal nodes only aggregate weight and link
/// two owned subtrees. Every node has exactly one parent except the
/// root, so the structure is a strict tree with no sharing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Terminal node holding one symbol.
    Leaf {
        /// The coded symbol.
        symbol: Symbol,
        /// Occurrence count of the symbol (0 in reconstructed trees).
        weight: u64,
    },
    /// Inner node joining two subtrees.
    Internal {
        /// Sum of the children's weights.
        weight: u64,
        /// Subtree reached on a '0' bit.
        left: Box<Node>,
        /// Subtree reached on a '1' bit.
        right: Box<Node>,
    },
}

impl Node {
    /// The node's weight: occurrence count or subtree sum.
    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } | Node::Internal { weight, .. } => *weight,
        }
    }

    /// Whether this node is a leaf.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// Follow one payload character from this node.
    ///
    /// `'0'` selects the left child; any other character selects the
    /// right one, matching the walk the encoder's table was built from.
    /// Returns `None` at a leaf, which has no children to follow.
    pub fn child(&self, bit: char) -> Option<&Node> {
        match self {
            Node::Internal { left, right, .. } => Some(if bit == '0' { left } else { right }),
            Node::Leaf { .. } => None,
        }
    }

    fn merge(left: Node, right: Node) -> Node {
        Node::Internal {
            weight: left.weight() + right.weight(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Queue entry pairing a node with its creation rank.
///
/// Ordering is (weight, rank): equal weights resolve by creation order,
/// which pins tree shape and code assignment for a given frequency map.
#[derive(Debug)]
struct HeapEntry {
    node: Node,
    rank: u64,
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.node.weight(), self.rank).cmp(&(other.node.weight(), other.rank))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

/// An immutable Huffman coding tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

impl HuffmanTree {
    /// Build the coding tree for a frequency map.
    ///
    /// One leaf per `(symbol, count)` entry enters the queue in
    /// ascending symbol order; the two lightest nodes are then merged
    /// repeatedly until a single root remains. The first node popped
    /// becomes the left child.
    ///
    /// With exactly one distinct symbol no merge happens and the lone
    /// leaf is the root itself; that shape has no addressable codes and
    /// is rejected later by [`CodeTable::from_tree`].
    ///
    /// # Panics
    ///
    /// Panics if `freqs` is empty. Non-emptiness is the caller's
    /// contract; the [`crate::compress`] pipeline guards it with
    /// [`HuffError::EmptyInput`] before reaching this point.
    pub fn from_frequencies(freqs: &FrequencyMap) -> Self {
        let mut heap = MinHeap::new();
        let mut rank = 0;
        for (symbol, weight) in freqs.iter() {
            heap.push(HeapEntry {
                node: Node::Leaf { symbol, weight },
                rank,
            });
            rank += 1;
        }

        while heap.len() > 1 {
            let left = heap.pop().expect("BUG: heap holds at least two entries");
            let right = heap.pop().expect("BUG: heap holds at least two entries");
            heap.push(HeapEntry {
                node: Node::merge(left.node, right.node),
                rank,
            });
            rank += 1;
        }

        let root = heap
            .pop()
            .expect("BUG: frequency map must not be empty")
            .node;
        Self { root }
    }

    /// Rebuild a decode-equivalent tree from a parsed code table.
    ///
    /// Each code is inserted as a root-to-leaf path, '0' branching left
    /// and '1' branching right. Frequencies are not part of the
    /// persisted format, so rebuilt nodes carry weight 0; decoding
    /// never reads weights.
    ///
    /// # Errors
    ///
    /// [`HuffError::InvalidTable`] when the table is empty, a code
    /// collides with or passes through another, or the described tree
    /// is not full (some code prefix leads into unused space).
    /// [`HuffError::DegenerateAlphabet`] when the table is a single
    /// entry with an empty code.
    pub fn from_code_table(table: &CodeTable) -> Result<Self> {
        if table.is_empty() {
            return Err(HuffError::invalid_table("code table has no entries"));
        }
        if table.len() == 1 {
            if let Some((symbol, code)) = table.iter().next() {
                if code.is_empty() {
                    return Err(HuffError::DegenerateAlphabet { symbol });
                }
            }
        }

        let mut root = Slot::Vacant;
        for (symbol, code) in table.iter() {
            insert_code(&mut root, symbol, code)?;
        }
        Ok(Self { root: seal(root)? })
    }

    /// The root node.
    pub fn root(&self) -> &Node {
        &self.root
    }

    /// Total weight of the tree; for a built tree this is the source
    /// length in units.
    pub fn total_weight(&self) -> u64 {
        self.root.weight()
    }
}

/// Scaffolding for path insertion, sealed into [`Node`] once complete.
enum Slot {
    Vacant,
    Leaf(Symbol),
    Branch { left: Box<Slot>, right: Box<Slot> },
}

fn insert_code(slot: &mut Slot, symbol: Symbol, code: &str) -> Result<()> {
    let Some(bit) = code.bytes().next() else {
        return match slot {
            Slot::Vacant => {
                *slot = Slot::Leaf(symbol);
                Ok(())
            }
            _ => Err(HuffError::invalid_table(format!(
                "code for U+{:04X} collides with another entry",
                symbol
            ))),
        };
    };

    match slot {
        Slot::Vacant => {
            *slot = Slot::Branch {
                left: Box::new(Slot::Vacant),
                right: Box::new(Slot::Vacant),
            };
            insert_code(slot, symbol, code)
        }
        Slot::Branch { left, right } => {
            let child = if bit == b'0' { left } else { right };
            insert_code(child, symbol, &code[1..])
        }
        Slot::Leaf(_) => Err(HuffError::invalid_table(format!(
            "code for U+{:04X} passes through an existing leaf",
            symbol
        ))),
    }
}

fn seal(slot: Slot) -> Result<Node> {
    match slot {
        Slot::Leaf(symbol) => Ok(Node::Leaf { symbol, weight: 0 }),
        Slot::Branch { left, right } => Ok(Node::Internal {
            weight: 0,
            left: Box::new(seal(*left)?),
            right: Box::new(seal(*right)?),
        }),
        Slot::Vacant => Err(HuffError::invalid_table(
            "table does not describe a full prefix tree",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    const A: Symbol = b'a' as Symbol;
    const B: Symbol = b'b' as Symbol;
    const C: Symbol = b'c' as Symbol;

    fn table_of(entries: &[(Symbol, &str)]) -> CodeTable {
        let map: BTreeMap<Symbol, String> = entries
            .iter()
            .map(|&(symbol, code)| (symbol, code.to_string()))
            .collect();
        CodeTable::from_entries(map)
    }

    #[test]
    fn test_merge_loop_concrete() {
        // "aaabb": two leaves, one merge, root weight 5. The lighter
        // leaf ('b') is popped first and lands on the left.
        let freqs = FrequencyMap::from_text("aaabb");
        let tree = HuffmanTree::from_frequencies(&freqs);

        assert_eq!(tree.total_weight(), 5);
        match tree.root() {
            Node::Internal { left, right, .. } => {
                assert_eq!(
                    **left,
                    Node::Leaf {
                        symbol: B,
                        weight: 2
                    }
                );
                assert_eq!(
                    **right,
                    Node::Leaf {
                        symbol: A,
                        weight: 3
                    }
                );
            }
            Node::Leaf { .. } => panic!("two-symbol tree must have an internal root"),
        }
    }

    #[test]
    fn test_single_symbol_gives_leaf_root() {
        let freqs = FrequencyMap::from_text("aaaa");
        let tree = HuffmanTree::from_frequencies(&freqs);
        assert!(tree.root().is_leaf());
        assert_eq!(tree.total_weight(), 4);
    }

    #[test]
    fn test_root_weight_equals_leaf_sum() {
        let text = "the quick brown fox jumps over the lazy dog";
        let freqs = FrequencyMap::from_text(text);
        let tree = HuffmanTree::from_frequencies(&freqs);

        fn leaf_sum(node: &Node) -> u64 {
            match node {
                Node::Leaf { weight, .. } => *weight,
                Node::Internal { left, right, .. } => leaf_sum(left) + leaf_sum(right),
            }
        }

        assert_eq!(leaf_sum(tree.root()), freqs.total());
        assert_eq!(tree.total_weight(), freqs.total());
    }

    #[test]
    fn test_identical_frequencies_build_identical_trees() {
        let text = "mississippi riverbed";
        let first = HuffmanTree::from_frequencies(&FrequencyMap::from_text(text));
        let second = HuffmanTree::from_frequencies(&FrequencyMap::from_text(text));
        assert_eq!(first, second);
    }

    #[test]
    fn test_rebuild_matches_code_paths() {
        let table = table_of(&[(A, "0"), (B, "10"), (C, "11")]);
        let tree = HuffmanTree::from_code_table(&table).unwrap();

        match tree.root() {
            Node::Internal { left, right, .. } => {
                assert_eq!(**left, Node::Leaf { symbol: A, weight: 0 });
                match right.as_ref() {
                    Node::Internal { left, right, .. } => {
                        assert_eq!(**left, Node::Leaf { symbol: B, weight: 0 });
                        assert_eq!(**right, Node::Leaf { symbol: C, weight: 0 });
                    }
                    Node::Leaf { .. } => panic!("path '1' must lead to an internal node"),
                }
            }
            Node::Leaf { .. } => panic!("rebuilt root must be internal"),
        }
    }

    #[test]
    fn test_rebuild_rejects_empty_table() {
        let err = HuffmanTree::from_code_table(&table_of(&[])).unwrap_err();
        assert!(matches!(err, HuffError::InvalidTable { .. }));
    }

    #[test]
    fn test_rebuild_rejects_prefix_conflict() {
        let table = table_of(&[(A, "0"), (B, "01")]);
        let err = HuffmanTree::from_code_table(&table).unwrap_err();
        assert!(matches!(err, HuffError::InvalidTable { .. }));
    }

    #[test]
    fn test_rebuild_rejects_duplicate_code() {
        let table = table_of(&[(A, "0"), (B, "0")]);
        let err = HuffmanTree::from_code_table(&table).unwrap_err();
        assert!(matches!(err, HuffError::InvalidTable { .. }));
    }

    #[test]
    fn test_rebuild_rejects_incomplete_tree() {
        // '1' leads nowhere, so the walker could get stuck mid-path.
        let table = table_of(&[(A, "0")]);
        let err = HuffmanTree::from_code_table(&table).unwrap_err();
        assert!(matches!(err, HuffError::InvalidTable { .. }));
    }

    #[test]
    fn test_rebuild_single_empty_code_is_degenerate() {
        let table = table_of(&[(A, "")]);
        let err = HuffmanTree::from_code_table(&table).unwrap_err();
        assert!(matches!(
            err,
            HuffError::DegenerateAlphabet { symbol } if symbol == A
        ));
    }

    #[test]
    fn test_child_transitions() {
        let freqs = FrequencyMap::from_text("aaabb");
        let tree = HuffmanTree::from_frequencies(&freqs);

        let left = tree.root().child('0').unwrap();
        assert_eq!(*left, Node::Leaf { symbol: B, weight: 2 });
        let right = tree.root().child('1').unwrap();
        assert_eq!(*right, Node::Leaf { symbol: A, weight: 3 });
        assert!(left.child('0').is_none());
    }
}
