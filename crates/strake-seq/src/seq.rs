//! The [`FixedSeq`] container and its iterator.

use crate::error::SeqError;
use smallvec::SmallVec;
use std::ops::{Index, IndexMut};

/// An owned, contiguous, fixed-length sequence of `i64`.
///
/// The length is set at construction and never changes: there is no
/// insertion or removal operation. Elements are zero-indexed and mutable
/// in place through [`set`](FixedSeq::set) or [`IndexMut`].
///
/// Uses `SmallVec<[i64; 8]>` so short sequences stay inline; longer
/// sequences spill to the heap transparently.
///
/// Two access styles are offered:
/// - [`get`](FixedSeq::get) / [`set`](FixedSeq::set) return
///   `Err(SeqError::IndexOutOfBounds)` for a bad index;
/// - [`Index`] / [`IndexMut`] delegate to the backing slice and panic,
///   never silently defaulting or wrapping.
///
/// # Examples
///
/// ```
/// use strake_seq::FixedSeq;
///
/// let mut seq = FixedSeq::from_slice(&[1, 2, 3]);
/// assert_eq!(seq.len(), 3);
/// assert_eq!(seq[0], 1);
///
/// seq[1] = 8;
/// assert_eq!(seq.as_slice(), &[1, 8, 3]);
///
/// // Checked access reports the offending index and the length.
/// assert!(seq.get(3).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedSeq {
    elems: SmallVec<[i64; 8]>,
}

impl FixedSeq {
    /// Create a sequence from literal values. The length is `values.len()`.
    pub fn from_slice(values: &[i64]) -> Self {
        Self {
            elems: SmallVec::from_slice(values),
        }
    }

    /// Create a sequence of `len` elements, every element zero.
    pub fn zeroed(len: usize) -> Self {
        Self {
            elems: SmallVec::from_elem(0, len),
        }
    }

    /// Number of elements. Constant for the lifetime of the value.
    pub fn len(&self) -> usize {
        self.elems.len()
    }

    /// Returns `true` if the sequence has no elements.
    pub fn is_empty(&self) -> bool {
        self.elems.is_empty()
    }

    /// Checked read of the element at `index`.
    pub fn get(&self, index: usize) -> Result<i64, SeqError> {
        self.elems
            .get(index)
            .copied()
            .ok_or(SeqError::IndexOutOfBounds {
                index,
                len: self.elems.len(),
            })
    }

    /// Checked in-place write of the element at `index`.
    ///
    /// The length is unchanged by any `set`.
    pub fn set(&mut self, index: usize, value: i64) -> Result<(), SeqError> {
        let len = self.elems.len();
        match self.elems.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(SeqError::IndexOutOfBounds { index, len }),
        }
    }

    /// View of the whole sequence as a slice.
    pub fn as_slice(&self) -> &[i64] {
        &self.elems
    }

    /// Iterate over element values in index order.
    ///
    /// The traversal is forward, finite, and restartable: it borrows the
    /// sequence, so a fresh pass can always be started. It carries no index
    /// bookkeeping; a position label, when one is wanted, is maintained by
    /// the caller alongside the loop.
    pub fn iter(&self) -> SeqIter<'_> {
        SeqIter {
            inner: self.elems.iter(),
        }
    }
}

impl Index<usize> for FixedSeq {
    type Output = i64;

    fn index(&self, index: usize) -> &i64 {
        &self.elems[index]
    }
}

impl IndexMut<usize> for FixedSeq {
    fn index_mut(&mut self, index: usize) -> &mut i64 {
        &mut self.elems[index]
    }
}

impl FromIterator<i64> for FixedSeq {
    fn from_iter<I: IntoIterator<Item = i64>>(iter: I) -> Self {
        Self {
            elems: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a FixedSeq {
    type Item = i64;
    type IntoIter = SeqIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the values of a [`FixedSeq`], yielding `i64` in index order.
pub struct SeqIter<'a> {
    inner: std::slice::Iter<'a, i64>,
}

impl Iterator for SeqIter<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.inner.next().copied()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for SeqIter<'_> {}
