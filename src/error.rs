//! Error types for the netfreq crate.

use thiserror::Error;

/// Errors reported while preparing input texts.
///
/// Invariant violations inside the tree (a byte leading to both a leaf and
/// an internal child, a negative remainder, a walk-down into a leaf) are
/// programmer errors and panic instead of surfacing here.
#[derive(Debug, Error)]
pub enum TextError {
    /// The raw input already contains one of the reserved sentinel bytes.
    #[error("input contains reserved sentinel byte {byte:#04x} at offset {offset}")]
    ReservedByte { byte: u8, offset: usize },

    /// The wrapped text would not fit the 32-bit index range used for edge
    /// labels.
    #[error("text length {0} exceeds the supported 32-bit index range")]
    TooLong(usize),
}

/// Result type alias for netfreq operations.
pub type Result<T> = std::result::Result<T, TextError>;
