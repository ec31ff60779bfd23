//! Payload encoding: text to a '0'/'1' bit string.

use crate::BitString;
use crate::table::CodeTable;

/// Replace every UTF-16 unit of `text` with its code, concatenated.
///
/// The payload carries no separators; prefix-freedom of the table is
/// what keeps it decodable.
///
/// # Panics
///
/// Panics if a unit of `text` has no entry in `table`. The table must
/// have been derived from this text's own frequency map; the
/// [`crate::compress`] pipeline guarantees that.
pub fn encode(text: &str, table: &CodeTable) -> BitString {
    let mut payload = String::new();
    for unit in text.encode_utf16() {
        let code = table
            .get(unit)
            .expect("BUG: code table covers every source symbol");
        payload.push_str(code);
    }
    payload
}
