//! Benchmark profiles for Strake sequence operations.
//!
//! Provides pre-built sequences for benchmarking:
//!
//! - [`sparse_profile`]: a long zeroed sequence with a deterministic
//!   scatter of written indices, mirroring the walkthrough's
//!   zero-then-fill pattern at benchmark scale.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use strake_seq::FixedSeq;

/// Build a zeroed sequence of `len` elements with every eighth index
/// overwritten by a deterministic value.
///
/// Deterministic: the same `len` always produces the same sequence.
pub fn sparse_profile(len: usize) -> FixedSeq {
    let mut seq = FixedSeq::zeroed(len);
    for i in (0..len).step_by(8) {
        seq[i] = (i as i64).wrapping_mul(6364136223846793005);
    }
    seq
}
