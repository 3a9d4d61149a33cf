//! Fixed-length integer sequence storage for the Strake walkthrough.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! [`FixedSeq`], an owned, contiguous sequence of `i64` whose length is
//! fixed at construction, together with its error type and iterator.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod seq;

pub use error::SeqError;
pub use seq::{FixedSeq, SeqIter};
