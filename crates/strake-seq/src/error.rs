//! Error types for sequence access.

use std::fmt;

/// Errors arising from checked sequence access.
///
/// Out-of-bounds indexing is the only failure mode a [`FixedSeq`] has:
/// construction cannot fail, and the length never changes afterwards.
///
/// [`FixedSeq`]: crate::FixedSeq
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SeqError {
    /// An index is outside the bounds of the sequence.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Length of the sequence; valid indices are `0..len`.
        len: usize,
    },
}

impl fmt::Display for SeqError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds: [0, {len})")
            }
        }
    }
}

impl std::error::Error for SeqError {}
