//! Huffman-specific error types.

use crate::Symbol;
use thiserror::Error;

/// Huffman compression/decompression errors.
#[derive(Debug, Error)]
pub enum HuffError {
    /// Input text has no symbols.
    #[error("input is empty; nothing to compress")]
    EmptyInput,

    /// Input has exactly one distinct symbol.
    ///
    /// A lone leaf sits at the root of its tree, so its root-to-leaf
    /// path is empty and the bit-walking decoder has no way to address
    /// it.
    #[error("single distinct symbol U+{symbol:04X} cannot be assigned a prefix code")]
    DegenerateAlphabet {
        /// The only symbol the input contains.
        symbol: Symbol,
    },

    /// A code table that cannot be rebuilt into a decode tree.
    #[error("invalid code table: {message}")]
    InvalidTable {
        /// What made the table unusable.
        message: String,
    },

    /// Structural damage in a persisted frame.
    #[error("invalid frame at line {line}: {message}")]
    InvalidFrame {
        /// 1-based line where parsing failed.
        line: usize,
        /// What was wrong with the line.
        message: String,
    },
}

impl HuffError {
    /// Create an [`HuffError::InvalidTable`] error.
    pub fn invalid_table(message: impl Into<String>) -> Self {
        Self::InvalidTable {
            message: message.into(),
        }
    }

    /// Create an [`HuffError::InvalidFrame`] error at a 1-based line.
    pub fn invalid_frame(line: usize, message: impl Into<String>) -> Self {
        Self::InvalidFrame {
            line,
            message: message.into(),
        }
    }
}

/// Result type for Huffman operations.
pub type Result<T> = std::result::Result<T, HuffError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = HuffError::DegenerateAlphabet { symbol: 0x0061 };
        assert_eq!(
            err.to_string(),
            "single distinct symbol U+0061 cannot be assigned a prefix code"
        );

        let err = HuffError::invalid_frame(3, "missing ':' after symbol");
        assert_eq!(
            err.to_string(),
            "invalid frame at line 3: missing ':' after symbol"
        );
    }
}
