//! Scripted fixed-sequence walkthrough for Strake.
//!
//! Renders a fixed transcript exercising [`strake_seq::FixedSeq`]: literal
//! initialization, indexed reads, an in-place write, zero-fill construction,
//! a counted loop, and an element-wise loop with an external counter.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod walkthrough;

pub use walkthrough::write_walkthrough;
