//! Common traits and error types for the heap
//!
//! This module provides the ordering seam used by [`Heap`](crate::Heap):
//!
//! - [`Less`]: the strict-ordering predicate a heap is built with
//! - [`MinFirst`] / [`MaxFirst`]: predicates for any `Ord` type
//!
//! Any closure or function with the signature `Fn(&T, &T) -> bool` is also a
//! [`Less`], so a heap can be ordered by an arbitrary key without a wrapper type.

use std::fmt;

/// Error type for heap operations
///
/// Both variants signal a programming error on the caller's side. They are
/// returned instead of a default value so that an absent element can never be
/// confused with a stored zero value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeapError {
    /// The heap has no elements (returned by `pop` and `peek`)
    EmptyHeap,
    /// The index does not address an element of the backing sequence
    IndexOutOfRange {
        /// The index that was requested
        index: usize,
        /// The number of elements at the time of the call
        len: usize,
    },
}

impl fmt::Display for HeapError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeapError::EmptyHeap => write!(f, "heap is empty"),
            HeapError::IndexOutOfRange { index, len } => {
                write!(f, "index {} out of range for heap of length {}", index, len)
            }
        }
    }
}

impl std::error::Error for HeapError {}

/// A strict-ordering predicate over `T`
///
/// `less(a, b)` returns true when `a` must come out of the heap before `b`.
/// The predicate must be irreflexive, and for the heap to pop in order it must
/// also be transitive and asymmetric over the elements actually inserted.
///
/// # Example
///
/// ```rust
/// use rust_index_heap::{Less, MaxFirst, MinFirst};
///
/// assert!(MinFirst.less(&1, &2));
/// assert!(MaxFirst.less(&2, &1));
///
/// let by_len = |a: &&str, b: &&str| a.len() < b.len();
/// assert!(by_len.less(&"ab", &"abc"));
/// ```
pub trait Less<T: ?Sized> {
    /// Returns true if `a` is strictly less than `b`
    fn less(&self, a: &T, b: &T) -> bool;
}

impl<T: ?Sized, F> Less<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Orders by `Ord`, smallest first (a min-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MinFirst;

impl<T: Ord + ?Sized> Less<T> for MinFirst {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Orders by `Ord`, largest first (a max-heap)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaxFirst;

impl<T: Ord + ?Sized> Less<T> for MaxFirst {
    #[inline]
    fn less(&self, a: &T, b: &T) -> bool {
        a > b
    }
}
