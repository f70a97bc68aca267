//! Binary heap ordered by a caller-supplied predicate
//!
//! [`Heap`] keeps its elements in a single `Vec` laid out as an implicit
//! binary tree: the children of position `i` live at `2i + 1` and `2i + 2`.
//! No child ever compares [`less`](Less::less) than its parent, so position 0
//! always holds a minimal element.
//!
//! Unlike `std::collections::BinaryHeap`, the ordering is a value handed to
//! the constructor rather than the element's `Ord` impl, and the backing
//! layout is part of the API: [`Heap::at`] exposes raw positions so callers
//! can find an element by scanning and then [`Heap::set`], [`Heap::fix`] or
//! [`Heap::remove`] it by index.
//!
//! # Time Complexity
//!
//! | Operation   | Complexity          |
//! |-------------|---------------------|
//! | `push`      | O(log n) amortized  |
//! | `pop`       | O(log n)            |
//! | `peek`/`at` | O(1)                |
//! | `remove`    | O(log n)            |
//! | `set`/`fix` | O(log n)            |
//! | `new_from`  | O(n)                |
//!
//! # Example
//!
//! ```rust
//! use rust_index_heap::Heap;
//!
//! let mut heap = Heap::new(|a: &i32, b: &i32| a < b);
//! heap.push(103);
//! heap.push(101);
//! heap.push(102);
//!
//! assert_eq!(heap.len(), 3);
//! assert_eq!(heap.pop(), Ok(101));
//! assert_eq!(heap.peek(), Ok(&102));
//! ```
//!
//! The heap is not synchronized; share it across threads only behind a lock.

use std::fmt;
use std::mem;
use std::ops::Index;

use crate::traits::{HeapError, Less, MaxFirst, MinFirst};

/// A binary heap whose order is defined by the predicate `L`
///
/// Equal elements come out in no particular order.
#[derive(Clone)]
pub struct Heap<T, L> {
    /// Backing sequence in heap order
    data: Vec<T>,
    /// Ordering predicate, fixed for the lifetime of the heap
    less: L,
}

impl<T, L: Less<T>> Heap<T, L> {
    /// Creates an empty heap ordered by `less`
    pub fn new(less: L) -> Self {
        Self {
            data: Vec::new(),
            less,
        }
    }

    /// Creates an empty heap with room for `capacity` elements
    pub fn with_capacity(capacity: usize, less: L) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            less,
        }
    }

    /// Builds a heap out of `data`, taking ownership of the vector
    ///
    /// Order is restored bottom-up: every non-leaf position, from `n/2 - 1`
    /// down to the root, is sifted down. This is O(n), cheaper than pushing
    /// the elements one by one.
    ///
    /// ```rust
    /// use rust_index_heap::Heap;
    ///
    /// let mut heap = Heap::new_from(|a: &i32, b: &i32| a > b, vec![-3, 5, 7, 9, 2, -1]);
    /// assert_eq!(heap.into_sorted_vec(), vec![9, 7, 5, 2, -1, -3]);
    /// ```
    pub fn new_from(less: L, data: Vec<T>) -> Self {
        let mut heap = Self { data, less };
        heap.rebuild();
        heap
    }

    /// Returns the number of elements in the heap
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the heap is empty
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns a minimal element without removing it
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap has no elements.
    pub fn peek(&self) -> Result<&T, HeapError> {
        self.data.first().ok_or(HeapError::EmptyHeap)
    }

    /// Returns the element stored at raw position `index`
    ///
    /// Position 0 is the root; the children of `i` are `2i + 1` and `2i + 2`.
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfRange`] if `index >= len()`.
    pub fn at(&self, index: usize) -> Result<&T, HeapError> {
        self.check_index(index)?;
        Ok(&self.data[index])
    }

    /// Returns a mutable reference to the element at `index`
    ///
    /// Changing the element's ordering through this reference breaks heap
    /// order at `index`; call [`fix`](Self::fix) with the same index before
    /// any other operation.
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfRange`] if `index >= len()`.
    pub fn at_mut(&mut self, index: usize) -> Result<&mut T, HeapError> {
        self.check_index(index)?;
        Ok(&mut self.data[index])
    }

    /// Pushes an element onto the heap
    pub fn push(&mut self, item: T) {
        self.data.push(item);
        let last = self.data.len() - 1;
        self.sift_up(last);
    }

    /// Removes and returns a minimal element
    ///
    /// The last element is moved into the root and sifted down.
    ///
    /// # Errors
    /// Returns [`HeapError::EmptyHeap`] if the heap has no elements.
    pub fn pop(&mut self) -> Result<T, HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::EmptyHeap);
        }
        let top = self.data.swap_remove(0);
        self.sift_down(0);
        Ok(top)
    }

    /// Removes and returns the element at `index`
    ///
    /// Removing position 0 is the same as [`pop`](Self::pop). Any other
    /// position is refilled with the last element, which is then moved down
    /// or, if it does not need to descend, up.
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfRange`] if `index >= len()`.
    pub fn remove(&mut self, index: usize) -> Result<T, HeapError> {
        self.check_index(index)?;
        if index == 0 {
            return self.pop();
        }
        let last = self.data.len() - 1;
        let item = self.data.swap_remove(index);
        if index != last {
            self.restore(index);
        }
        Ok(item)
    }

    /// Replaces the element at `index` with `item` and returns the old one
    ///
    /// Leaves the heap holding the same elements, popping in the same order,
    /// as `remove(index)` followed by `push(item)`, with one sift instead of
    /// two.
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfRange`] if `index >= len()`; the heap
    /// is left untouched and `item` is dropped.
    pub fn set(&mut self, index: usize, item: T) -> Result<T, HeapError> {
        self.check_index(index)?;
        let old = mem::replace(&mut self.data[index], item);
        self.restore(index);
        Ok(old)
    }

    /// Restores heap order after the element at `index` changed in place
    ///
    /// Use this after mutating through [`at_mut`](Self::at_mut), or after
    /// changing an element behind shared ownership (`Rc<Cell<_>>` and the
    /// like). Calling it on an element that is already in order is a no-op.
    ///
    /// ```rust
    /// use std::cell::Cell;
    /// use std::rc::Rc;
    /// use rust_index_heap::Heap;
    ///
    /// let mut heap = Heap::new(|a: &Rc<Cell<u32>>, b: &Rc<Cell<u32>>| a.get() < b.get());
    /// let slow = Rc::new(Cell::new(50));
    /// heap.push(Rc::new(Cell::new(10)));
    /// heap.push(Rc::clone(&slow));
    ///
    /// slow.set(1);
    /// let index = (0..heap.len())
    ///     .find(|&i| Rc::ptr_eq(heap.at(i).unwrap(), &slow))
    ///     .unwrap();
    /// heap.fix(index).unwrap();
    ///
    /// assert_eq!(heap.peek().unwrap().get(), 1);
    /// ```
    ///
    /// # Errors
    /// Returns [`HeapError::IndexOutOfRange`] if `index >= len()`.
    pub fn fix(&mut self, index: usize) -> Result<(), HeapError> {
        self.check_index(index)?;
        self.restore(index);
        Ok(())
    }

    /// Returns the backing sequence in heap order
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Returns an iterator over the elements in heap order (not sorted)
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Drops every element, keeping the predicate
    pub fn clear(&mut self) {
        self.data.clear();
    }

    /// Consumes the heap and returns the backing sequence in heap order
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Consumes the heap and returns its elements in pop order
    pub fn into_sorted_vec(mut self) -> Vec<T> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(item) = self.pop() {
            sorted.push(item);
        }
        sorted
    }

    fn check_index(&self, index: usize) -> Result<(), HeapError> {
        if index >= self.data.len() {
            return Err(HeapError::IndexOutOfRange {
                index,
                len: self.data.len(),
            });
        }
        Ok(())
    }

    /// Heapify the whole backing sequence
    fn rebuild(&mut self) {
        let n = self.data.len();
        for i in (0..n / 2).rev() {
            self.sift_down(i);
        }
    }

    /// Move the element at `index` to wherever it belongs
    ///
    /// Sift-up only runs when sift-down made no move.
    fn restore(&mut self, index: usize) {
        if !self.sift_down(index) {
            self.sift_up(index);
        }
    }

    /// Move element at index up to maintain heap property
    fn sift_up(&mut self, mut index: usize) {
        let less = &self.less;
        let data = &mut self.data;
        while index > 0 {
            let parent = (index - 1) / 2;
            if !less.less(&data[index], &data[parent]) {
                break;
            }
            data.swap(index, parent);
            index = parent;
        }
    }

    /// Move element at index down to maintain heap property
    ///
    /// Returns true if the element moved. On equal children the left one is
    /// taken.
    fn sift_down(&mut self, mut index: usize) -> bool {
        let less = &self.less;
        let data = &mut self.data;
        let len = data.len();
        let start = index;
        loop {
            let left = match index.checked_mul(2).and_then(|i| i.checked_add(1)) {
                Some(left) if left < len => left,
                _ => break,
            };
            let mut child = left;
            if let Some(right) = left.checked_add(1) {
                if right < len && less.less(&data[right], &data[left]) {
                    child = right;
                }
            }
            if !less.less(&data[child], &data[index]) {
                break;
            }
            data.swap(index, child);
            index = child;
        }
        index > start
    }
}

impl<T: Ord> Heap<T, MinFirst> {
    /// Creates an empty heap that pops the smallest element first
    pub fn new_min() -> Self {
        Self::new(MinFirst)
    }
}

impl<T: Ord> Heap<T, MaxFirst> {
    /// Creates an empty heap that pops the largest element first
    pub fn new_max() -> Self {
        Self::new(MaxFirst)
    }
}

impl<T, L: Less<T>> Index<usize> for Heap<T, L> {
    type Output = T;

    /// Panicking counterpart of [`Heap::at`]
    fn index(&self, index: usize) -> &T {
        match self.at(index) {
            Ok(item) => item,
            Err(err) => panic!("{}", err),
        }
    }
}

impl<T, L: Less<T>> Extend<T> for Heap<T, L> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        self.data.reserve(iter.size_hint().0);
        for item in iter {
            self.push(item);
        }
    }
}

impl<T: Ord> FromIterator<T> for Heap<T, MinFirst> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new_from(MinFirst, iter.into_iter().collect())
    }
}

impl<'a, T, L> IntoIterator for &'a Heap<T, L> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

impl<T: fmt::Debug, L> fmt::Debug for Heap<T, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.data.iter()).finish()
    }
}
