//! Textual frame: the persisted form of a compression result.
//!
//! A frame is plain text with three parts:
//!
//! ```text
//! <symbol>:<code>      (one line per table entry, symbols ascending)
//! ====                 (sentinel separating table from payload)
//! <payload>            ('0'/'1' characters, no trailing newline)
//! ```
//!
//! Symbols are written literally except for the four characters that
//! would break the line structure (`\\`, `\n`, `\r`, `\:`) and
//! unpaired surrogate halves, which use a `\uXXXX` hex escape.

use crate::Symbol;
use crate::error::{HuffError, Result};
use crate::table::CodeTable;
use std::collections::BTreeMap;

/// Line separating the code table from the payload.
pub const TABLE_SENTINEL: &str = "====";

/// Render a code table and payload into frame text.
pub fn render(table: &CodeTable, payload: &str) -> String {
    let mut out = String::new();
    for (symbol, code) in table.iter() {
        push_symbol(&mut out, symbol);
        out.push(':');
        out.push_str(code);
        out.push('\n');
    }
    out.push_str(TABLE_SENTINEL);
    out.push('\n');
    out.push_str(payload);
    out
}

fn push_symbol(out: &mut String, symbol: Symbol) {
    match char::from_u32(u32::from(symbol)) {
        Some('\\') => out.push_str("\\\\"),
        Some('\n') => out.push_str("\\n"),
        Some('\r') => out.push_str("\\r"),
        Some(':') => out.push_str("\\:"),
        Some(c) => out.push(c),
        // Surrogate halves are valid symbols but not valid chars.
        None => out.push_str(&format!("\\u{:04x}", symbol)),
    }
}

/// Parse frame text back into a code table and payload.
///
/// Parsing is strict about content and lenient about line endings: a
/// trailing `\r` on any line is ignored, and empty lines after the
/// payload are tolerated so files saved with a final newline still
/// load. The payload itself must be pure '0'/'1'.
///
/// # Errors
///
/// [`HuffError::InvalidFrame`] with a 1-based line number when an
/// entry line is malformed, a symbol repeats, the sentinel is missing,
/// or non-empty content follows the payload.
pub fn parse(frame: &str) -> Result<(CodeTable, String)> {
    let mut lines = frame.split('\n');
    let mut codes = BTreeMap::new();
    let mut line_no = 0;

    loop {
        let Some(raw) = lines.next() else {
            return Err(HuffError::invalid_frame(line_no, "missing table sentinel"));
        };
        line_no += 1;
        let line = raw.strip_suffix('\r').unwrap_or(raw);
        if line == TABLE_SENTINEL {
            break;
        }
        let (symbol, code) = parse_entry(line, line_no)?;
        if codes.insert(symbol, code).is_some() {
            return Err(HuffError::invalid_frame(
                line_no,
                format!("duplicate entry for symbol U+{:04X}", symbol),
            ));
        }
    }

    let payload = match lines.next() {
        Some(raw) => {
            line_no += 1;
            let line = raw.strip_suffix('\r').unwrap_or(raw);
            if !line.bytes().all(|b| b == b'0' || b == b'1') {
                return Err(HuffError::invalid_frame(
                    line_no,
                    "payload contains characters other than '0' and '1'",
                ));
            }
            line.to_string()
        }
        None => String::new(),
    };

    for raw in lines {
        line_no += 1;
        if !raw.strip_suffix('\r').unwrap_or(raw).is_empty() {
            return Err(HuffError::invalid_frame(
                line_no,
                "unexpected content after payload",
            ));
        }
    }

    Ok((CodeTable::from_entries(codes), payload))
}

fn parse_entry(line: &str, line_no: usize) -> Result<(Symbol, String)> {
    let (symbol, rest) = take_symbol(line, line_no)?;
    let Some(code) = rest.strip_prefix(':') else {
        return Err(HuffError::invalid_frame(
            line_no,
            "missing ':' between symbol and code",
        ));
    };
    if !code.bytes().all(|b| b == b'0' || b == b'1') {
        return Err(HuffError::invalid_frame(
            line_no,
            "code contains characters other than '0' and '1'",
        ));
    }
    Ok((symbol, code.to_string()))
}

/// Consume the symbol at the start of an entry line.
///
/// A leading `:` is taken as the symbol itself rather than an empty
/// symbol, so unescaped `::<code>` lines written by other producers
/// still parse.
fn take_symbol(line: &str, line_no: usize) -> Result<(Symbol, &str)> {
    let mut chars = line.chars();
    let Some(first) = chars.next() else {
        return Err(HuffError::invalid_frame(line_no, "entry line is empty"));
    };
    if first != '\\' {
        let Ok(symbol) = Symbol::try_from(u32::from(first)) else {
            return Err(HuffError::invalid_frame(
                line_no,
                "symbol beyond the basic multilingual plane must use a \\u escape",
            ));
        };
        return Ok((symbol, chars.as_str()));
    }

    let Some(kind) = chars.next() else {
        return Err(HuffError::invalid_frame(
            line_no,
            "dangling escape at end of entry",
        ));
    };
    match kind {
        '\\' => Ok((Symbol::from(b'\\'), chars.as_str())),
        'n' => Ok((Symbol::from(b'\n'), chars.as_str())),
        'r' => Ok((Symbol::from(b'\r'), chars.as_str())),
        ':' => Ok((Symbol::from(b':'), chars.as_str())),
        'u' => {
            let rest = chars.as_str();
            let hex = rest.get(..4).filter(|h| h.bytes().all(|b| b.is_ascii_hexdigit()));
            let Some(hex) = hex else {
                return Err(HuffError::invalid_frame(
                    line_no,
                    "\\u escape requires four hex digits",
                ));
            };
            let symbol = Symbol::from_str_radix(hex, 16)
                .expect("BUG: four hex digits always fit a symbol");
            Ok((symbol, &rest[4..]))
        }
        other => Err(HuffError::invalid_frame(
            line_no,
            format!("unknown escape '\\{}'", other),
        )),
    }
}
