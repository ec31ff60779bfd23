//! # Huffpress
//!
//! Pure Rust Huffman compression for text, persisted as a
//! self-describing textual frame.
//!
//! The coder treats the input as a sequence of UTF-16 code units,
//! counts their frequencies, builds the optimal prefix tree with a
//! deterministic tie-break, and emits the payload as '0'/'1'
//! characters. The frame stores the code table alongside the payload,
//! so a frame alone is enough to recover the original text.
//!
//! ## Features
//!
//! - Deterministic output: identical input text always produces an
//!   identical frame, byte for byte
//! - Self-describing frames: no side channel needed to decompress
//! - Full Unicode coverage, including symbols outside the basic
//!   multilingual plane
//! - Tolerant decoding: truncated payloads yield the decodable prefix
//!   instead of failing
//!
//! ## Example
//!
//! ```
//! use huffpress::{compress, decompress};
//!
//! let encoded = compress("abracadabra").unwrap();
//! let frame = encoded.to_frame();
//!
//! let restored = decompress(&frame).unwrap();
//! assert_eq!(restored, "abracadabra");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decode;
mod encode;
mod error;
pub mod frame;
mod freq;
mod heap;
mod table;
mod tree;

pub use decode::decode;
pub use encode::encode;
pub use error::{HuffError, Result};
pub use freq::FrequencyMap;
pub use heap::MinHeap;
pub use table::CodeTable;
pub use tree::{HuffmanTree, Node};

/// One UTF-16 code unit, the element the coder assigns codes to.
pub type Symbol = u16;

/// A sequence of '0' and '1' characters.
pub type BitString = String;

/// Everything produced by one compression run.
///
/// Holds the intermediate artifacts (frequencies, tree, table) next to
/// the payload so callers can inspect them or render the frame without
/// recomputing anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded {
    freqs: FrequencyMap,
    tree: HuffmanTree,
    table: CodeTable,
    payload: BitString,
}

impl Encoded {
    /// Symbol frequencies counted from the source text.
    pub fn frequencies(&self) -> &FrequencyMap {
        &self.freqs
    }

    /// The coding tree built from the frequencies.
    pub fn tree(&self) -> &HuffmanTree {
        &self.tree
    }

    /// The symbol-to-code table derived from the tree.
    pub fn code_table(&self) -> &CodeTable {
        &self.table
    }

    /// The encoded payload.
    pub fn payload(&self) -> &str {
        &self.payload
    }

    /// Length of the source text in UTF-16 code units.
    pub fn source_units(&self) -> u64 {
        self.freqs.total()
    }

    /// Render the persistable frame: code table, sentinel, payload.
    pub fn to_frame(&self) -> String {
        frame::render(&self.table, &self.payload)
    }
}

/// Compress `text` into an [`Encoded`] result.
///
/// # Errors
///
/// [`HuffError::EmptyInput`] when `text` is empty and
/// [`HuffError::DegenerateAlphabet`] when it contains only one
/// distinct UTF-16 unit; neither case can be assigned a usable prefix
/// code.
///
/// # Example
///
/// ```
/// let encoded = huffpress::compress("aaabb").unwrap();
/// assert_eq!(encoded.payload(), "11100");
/// ```
pub fn compress(text: &str) -> Result<Encoded> {
    if text.is_empty() {
        return Err(HuffError::EmptyInput);
    }
    let freqs = FrequencyMap::from_text(text);
    let tree = HuffmanTree::from_frequencies(&freqs);
    let table = CodeTable::from_tree(&tree)?;
    let payload = encode(text, &table);
    Ok(Encoded {
        freqs,
        tree,
        table,
        payload,
    })
}

/// Decompress frame text back to the original string.
///
/// # Errors
///
/// [`HuffError::InvalidFrame`] when the frame text is malformed,
/// [`HuffError::InvalidTable`] when its code table does not describe a
/// prefix tree, and [`HuffError::DegenerateAlphabet`] when the table
/// is a single empty code.
///
/// # Example
///
/// ```
/// let text = huffpress::decompress("a:1\nb:0\n====\n11100").unwrap();
/// assert_eq!(text, "aaabb");
/// ```
pub fn decompress(frame: &str) -> Result<String> {
    let (table, payload) = frame::parse(frame)?;
    let tree = HuffmanTree::from_code_table(&table)?;
    Ok(decode(&payload, &tree))
}
