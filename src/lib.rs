//! Index-addressable binary heap for Rust
//!
//! This crate provides a single container, [`Heap`], a binary heap whose order
//! comes from a predicate supplied at construction instead of the element's
//! `Ord` implementation.
//!
//! # Features
//!
//! - **Any ordering**: pass a closure `|a, b| a < b` for a min-heap, `a > b` for a
//!   max-heap, or compare on any key; [`MinFirst`] and [`MaxFirst`] cover `Ord` types
//! - **Index-addressed updates**: [`Heap::at`] exposes the backing layout so an element
//!   can be located by scanning, then updated with [`Heap::set`] / [`Heap::fix`] or
//!   taken out with [`Heap::remove`] in O(log n)
//! - **O(n) construction**: [`Heap::new_from`] heapifies an existing `Vec` bottom-up
//! - **No silent defaults**: popping or peeking an empty heap, or addressing a missing
//!   index, returns a [`HeapError`] rather than a default value
//!
//! # Example
//!
//! ```rust
//! use rust_index_heap::Heap;
//!
//! let mut heap = Heap::new(|a: &&str, b: &&str| a < b);
//! heap.push("foo");
//! heap.push("bar");
//! heap.push("baz");
//!
//! assert_eq!(heap.len(), 3);
//! assert_eq!(heap.peek(), Ok(&"bar"));
//!
//! // Decrease-key: find the element, then replace it in place
//! let index = heap.iter().position(|s| *s == "foo").unwrap();
//! heap.set(index, "aaa").unwrap();
//!
//! assert_eq!(heap.pop(), Ok("aaa"));
//! assert_eq!(heap.pop(), Ok("bar"));
//! assert_eq!(heap.pop(), Ok("baz"));
//! assert!(heap.pop().is_err());
//! ```

pub mod binary;
pub mod traits;

// Re-export the main types for convenience
pub use binary::Heap;
pub use traits::{HeapError, Less, MaxFirst, MinFirst};
