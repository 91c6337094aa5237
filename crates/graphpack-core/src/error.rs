//! Errors raised while loading a text edge list.

/// Convenience alias for results within the core crate.
pub type Result<T> = std::result::Result<T, LoadError>;

/// Errors that can occur while parsing an edge list.
///
/// Any of these aborts the whole load; a partially parsed graph is never
/// returned.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A token is not an unsigned 32-bit integer. `index` is the 1-based
    /// position of the token within its line.
    #[error("line {line}, token {index}: invalid token '{token}' (expected an unsigned integer)")]
    InvalidToken {
        line: usize,
        index: usize,
        token: String,
    },

    /// A weight does not fit in 8 bits.
    #[error("line {line}: weight {weight} out of range (expected 0-255)")]
    WeightOutOfRange { line: usize, weight: u32 },

    /// The input ended in the middle of a `from to weight` triple.
    #[error("line {line}: incomplete edge, found {found} of 3 fields")]
    IncompleteTriple { line: usize, found: usize },

    /// Reading the input failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
