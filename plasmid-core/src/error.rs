//! Structured error types for the plasmid toolkit.

use thiserror::Error;

/// Unified error type for all plasmid operations.
#[derive(Debug, Error)]
pub enum PlasmidError {
    /// I/O error (file not found, permission denied, truncated stream, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed input data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, unknown names)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A symbol outside the bound alphabet. Only the first offending symbol
    /// of the input is ever reported. `symbol` is the character as supplied,
    /// or `\xNN` when the input is not valid UTF-8 at that point.
    #[error("invalid {alphabet} symbol \"{symbol}\"")]
    AlphabetViolation {
        symbol: String,
        alphabet: &'static str,
    },

    /// `range(start, stop)` with `start > stop`.
    #[error("impossible range: start {start} is greater than stop {stop}")]
    Range { start: usize, stop: usize },

    /// Positional query past the end of a sequence.
    #[error("position {index} out of bounds for sequence of length {len}")]
    Index { index: usize, len: usize },

    /// A codon that is neither mapped nor a stop codon in the table in use.
    #[error("codon \"{codon}\" has no translation in table \"{table}\"")]
    Translation { codon: String, table: String },

    /// The sequence constructor rejected the body of a record.
    #[error("failed to build record \"{header}\": {source}")]
    Record {
        header: String,
        #[source]
        source: Box<PlasmidError>,
    },

    /// Compression or decompression failure
    #[error("compression error: {0}")]
    Compression(String),
}

/// Convenience alias used throughout the plasmid crates.
pub type Result<T> = std::result::Result<T, PlasmidError>;
