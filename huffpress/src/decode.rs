//! Payload decoding: a '0'/'1' bit string back to text.

use crate::tree::{HuffmanTree, Node};

/// Walk the tree over `payload` and collect the leaf symbols reached.
///
/// Each character steps one level: '0' goes left, anything else goes
/// right. Reaching a leaf emits its symbol and resets the walk to the
/// root. A trailing partial path (payload ending between root and
/// leaf) is dropped silently, which lets truncated payloads still
/// yield their complete prefix.
///
/// Recovered UTF-16 units are combined lossily, so a surrogate pair
/// split by truncation becomes U+FFFD instead of an error.
pub fn decode(payload: &str, tree: &HuffmanTree) -> String {
    let mut units = Vec::new();
    let mut cursor = tree.root();
    for bit in payload.chars() {
        let Some(next) = cursor.child(bit) else {
            // A lone-leaf root has no transitions; nothing decodes.
            break;
        };
        if let Node::Leaf { symbol, .. } = next {
            units.push(*symbol);
            cursor = tree.root();
        } else {
            cursor = next;
        }
    }
    String::from_utf16_lossy(&units)
}
