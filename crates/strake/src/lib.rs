//! Strake: fixed-length integer sequences and a scripted iteration walkthrough.
//!
//! This is the top-level facade crate that re-exports the public API from the
//! Strake sub-crates. For most users, adding `strake` as a single dependency
//! is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use strake::prelude::*;
//!
//! // A fixed-length sequence: length set at creation, mutable in place.
//! let mut seq = FixedSeq::from_slice(&[1, 2, 3]);
//! seq[1] = 8;
//! assert_eq!(seq.as_slice(), &[1, 8, 3]);
//!
//! // The scripted walkthrough renders its transcript to any writer.
//! let mut out = Vec::new();
//! write_walkthrough(&mut out).unwrap();
//! assert_eq!(String::from_utf8(out).unwrap().lines().count(), 10);
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`seq`] | `strake-seq` | `FixedSeq`, `SeqError`, `SeqIter` |
//! | [`demo`] | `strake-demo` | The walkthrough routine and its binary |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Fixed-length sequence storage (`strake-seq`).
///
/// Contains [`seq::FixedSeq`] with checked ([`seq::FixedSeq::get`],
/// [`seq::FixedSeq::set`]) and panicking (`Index`/`IndexMut`) access,
/// plus the [`seq::SeqError`] error type and [`seq::SeqIter`] iterator.
pub use strake_seq as seq;

/// The scripted walkthrough (`strake-demo`).
///
/// [`demo::write_walkthrough`] renders the fixed transcript against any
/// `std::io::Write`; the `walkthrough` binary runs it against stdout.
pub use strake_demo as demo;

/// Common imports for typical Strake usage.
///
/// ```rust
/// use strake::prelude::*;
/// ```
pub mod prelude {
    pub use strake_demo::write_walkthrough;
    pub use strake_seq::{FixedSeq, SeqError, SeqIter};
}
