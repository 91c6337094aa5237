//! Codec errors.

use std::io;

use thiserror::Error;

/// Convenience alias for results within the codec crate.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors that can occur while encoding or decoding a stream.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The stream ended inside a record.
    #[error("truncated record at byte {offset}: need {needed} more byte(s), {available} left")]
    Truncated {
        offset: usize,
        needed: usize,
        available: usize,
    },

    /// A count does not fit in the 32-bit field that carries it.
    #[error("{what} {value} does not fit in a 32-bit field")]
    CountOverflow { what: &'static str, value: usize },

    /// Unrecognized encoding mode name.
    #[error("unknown encoding mode '{0}' (expected 'greedy' or 'clustered')")]
    UnknownMode(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
