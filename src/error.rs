//! Error types for tokenlog
//!
//! Provides a unified error type for all operations.
//!
//! Decoding itself is total: metadata accessors and format-string parsing
//! never fail, and malformed field structure is a valid degenerate state.
//! Errors only arise at construction (a layout wider than the backing word)
//! or when turning external text into a metadata word.

use thiserror::Error;

/// Result type alias using TokenLogError
pub type Result<T> = std::result::Result<T, TokenLogError>;

/// Unified error type for tokenlog operations
#[derive(Debug, Error)]
pub enum TokenLogError {
    /// The four field widths do not fit into the 64-bit backing word
    #[error("field widths exceed representable bits: {total} > 64")]
    LayoutOverflow {
        /// Sum of all configured field widths
        total: u64,
    },

    /// A metadata word argument could not be parsed as an integer
    #[error("invalid metadata word: {0}")]
    InvalidWord(String),

    /// A decoded record could not be rendered
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
