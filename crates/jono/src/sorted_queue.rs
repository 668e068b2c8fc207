//! A priority queue that keeps its backing array fully sorted.
//!
//! [`SortedQueue<T>`] wraps a [`DynArray<T>`] and re-sorts the whole
//! store after every insertion, descending. The maximum sits at index
//! 0, `pop` is a front removal and iteration walks from the maximum
//! down.
//!
//! `push` is O(n log n), it re-sorts the entire store. The stored order
//! is the complete descending sequence after every operation, not just
//! a heap invariant, and the sort is stable so equal elements keep
//! their arrival order.
//!
//! # Examples
//!
//! ```rust
//! use jono::SortedQueue;
//!
//! let mut queue = SortedQueue::new();
//! queue.push(1)?;
//! queue.push(2)?;
//! queue.push(3)?;
//! assert_eq!(queue.front(), Some(&3));
//! assert_eq!(queue.pop(), Some(3));
//! assert_eq!(queue.pop(), Some(2));
//! assert_eq!(queue.pop(), Some(1));
//! assert_eq!(queue.pop(), None);
//! # Ok::<(), jono::CapacityError>(())
//! ```

use core::{
    cmp::Ordering,
    fmt,
    mem,
    str::FromStr,
};

use std::io::BufRead;

use jono_mem::{CapacityError, DynArray, IntoIter, Iter, ReadError};

pub struct SortedQueue<T: Ord> {
    store: DynArray<T>,
}

impl<T: Ord> SortedQueue<T> {

    pub const fn new() -> Self {
        Self {
            store: DynArray::new(),
        }
    }

    #[inline(always)]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Inserts `value` and re-sorts the store.
    pub fn push(&mut self, value: T) -> Result<(), CapacityError> {
        self.store.push(value)?;
        self.resort();
        Ok(())
    }

    /// Removes and returns the current maximum. O(n), the remaining
    /// elements shift down one slot.
    #[inline(always)]
    pub fn pop(&mut self) -> Option<T> {
        self.store.pop_front()
    }

    /// The maximum, `None` when empty.
    #[inline(always)]
    pub fn front(&self) -> Option<&T> {
        self.store.front()
    }

    /// The minimum, `None` when empty.
    #[inline(always)]
    pub fn back(&self) -> Option<&T> {
        self.store.back()
    }

    /// Trades the stores of two queues without touching any element.
    #[inline(always)]
    pub fn swap(&mut self, other: &mut Self) {
        mem::swap(&mut self.store, &mut other.store);
    }

    /// Drops every element and releases the store's buffer.
    #[inline(always)]
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Walks from the maximum down to the minimum.
    #[inline(always)]
    pub fn iter(&self) -> Iter<'_, T> {
        self.store.iter()
    }

    #[inline(always)]
    pub fn as_slice(&self) -> &[T] {
        self.store.as_slice()
    }

    fn resort(&mut self) {
        self.store.sort_by(|a, b| b.cmp(a));
    }
}

impl<T: Ord + FromStr> SortedQueue<T> {

    /// Replaces the store's elements from the stream the way
    /// [`DynArray::read_from`] does, then re-sorts. The store must be
    /// pre-sized to the element count being read. The re-sort runs even
    /// when the read fails, so the ordering invariant holds on every
    /// return.
    pub fn read_from<R: BufRead>(&mut self, reader: &mut R) -> Result<(), ReadError<T::Err>> {
        let result = self.store.read_from(reader);
        self.resort();
        result
    }
}

impl<T: Ord> Default for SortedQueue<T> {

    #[inline(always)]
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Ord> From<DynArray<T>> for SortedQueue<T> {

    fn from(store: DynArray<T>) -> Self {
        let mut queue = Self { store };
        queue.resort();
        queue
    }
}

impl<T: Ord, const N: usize> From<[T; N]> for SortedQueue<T> {

    fn from(values: [T; N]) -> Self {
        Self::from(DynArray::from(values))
    }
}

impl<T: Ord + Clone> From<&[T]> for SortedQueue<T> {

    fn from(values: &[T]) -> Self {
        Self::from(DynArray::from(values))
    }
}

impl<T: Ord> FromIterator<T> for SortedQueue<T> {

    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from(DynArray::from_iter(iter))
    }
}

impl<T: Ord + Clone> Clone for SortedQueue<T> {

    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

impl<T: Ord> PartialEq for SortedQueue<T> {

    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl<T: Ord> Eq for SortedQueue<T> {}

impl<T: Ord> PartialOrd for SortedQueue<T> {

    #[inline(always)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Queues compare lexicographically over their sorted stores. The first
/// differing position decides, a queue that is a strict prefix of the
/// other is less.
impl<T: Ord> Ord for SortedQueue<T> {

    fn cmp(&self, other: &Self) -> Ordering {
        self.store.as_slice().cmp(other.store.as_slice())
    }
}

impl<T: Ord + fmt::Debug> fmt::Debug for SortedQueue<T> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Ord + fmt::Display> fmt::Display for SortedQueue<T> {

    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.store, f)
    }
}

impl<'a, T: Ord> IntoIterator for &'a SortedQueue<T> {

    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    #[inline(always)]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<T: Ord> IntoIterator for SortedQueue<T> {

    type Item = T;
    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.store.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    fn is_non_increasing<T: Ord>(slice: &[T]) -> bool {
        slice.windows(2).all(|w| w[0] >= w[1])
    }

    #[test]
    fn push_keeps_the_store_sorted() {
        let mut queue = SortedQueue::new();
        for value in [2, 9, 4, 4, 7, 1] {
            queue.push(value).unwrap();
            assert!(is_non_increasing(queue.as_slice()));
        }
        assert_eq!(queue.as_slice(), [9, 7, 4, 4, 2, 1]);
    }

    #[test]
    fn drains_in_non_increasing_order() {
        let mut queue = SortedQueue::new();
        queue.push(1).unwrap();
        queue.push(2).unwrap();
        queue.push(3).unwrap();
        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(2));
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), None);
    }

    #[test]
    fn front_is_max_back_is_min() {
        let queue = SortedQueue::from([4, 8, 1, 6]);
        assert_eq!(queue.front(), Some(&8));
        assert_eq!(queue.back(), Some(&1));
        let empty = SortedQueue::<i32>::new();
        assert_eq!(empty.front(), None);
        assert_eq!(empty.back(), None);
    }

    #[test]
    fn construction_sorts_any_source() {
        let from_array = SortedQueue::from([3, 1, 2]);
        assert_eq!(from_array.as_slice(), [3, 2, 1]);
        let from_slice = SortedQueue::from(&[5, 9, 7][..]);
        assert_eq!(from_slice.as_slice(), [9, 7, 5]);
        let from_iter: SortedQueue<i32> = (1..=4).collect();
        assert_eq!(from_iter.as_slice(), [4, 3, 2, 1]);
        let from_store = SortedQueue::from(DynArray::from([2, 6, 4]));
        assert_eq!(from_store.as_slice(), [6, 4, 2]);
    }

    #[test]
    fn equal_multisets_make_equal_queues() {
        let mut a = SortedQueue::new();
        for value in [3, 1, 2] {
            a.push(value).unwrap();
        }
        let mut b = SortedQueue::new();
        for value in [1, 2, 3] {
            b.push(value).unwrap();
        }
        assert_eq!(a, b);
        b.push(4).unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn ordering_is_lexicographic_over_stores() {
        let small = SortedQueue::from([3, 1]);
        let large = SortedQueue::from([3, 2]);
        assert!(small < large);
        assert!(large > small);
        let prefix = SortedQueue::from([3, 2]);
        let longer = SortedQueue::from([3, 2, 1]);
        assert!(prefix < longer);
        assert!(prefix <= longer);
        assert!(SortedQueue::<i32>::new() < SortedQueue::from([0]));
    }

    #[test]
    fn swap_trades_stores() {
        let mut a = SortedQueue::from([1, 2]);
        let mut b = SortedQueue::from([9]);
        a.swap(&mut b);
        assert_eq!(a.as_slice(), [9]);
        assert_eq!(b.as_slice(), [2, 1]);
    }

    #[test]
    fn clear_empties_the_queue() {
        let mut queue = SortedQueue::from([1, 2, 3]);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }

    #[derive(Debug)]
    struct Keyed {
        key: i32,
        tag: char,
    }

    impl Keyed {
        fn new(key: i32, tag: char) -> Self {
            Self { key, tag }
        }
    }

    impl PartialEq for Keyed {
        fn eq(&self, other: &Self) -> bool {
            self.key == other.key
        }
    }

    impl Eq for Keyed {}

    impl PartialOrd for Keyed {
        fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
            Some(self.cmp(other))
        }
    }

    impl Ord for Keyed {
        fn cmp(&self, other: &Self) -> Ordering {
            self.key.cmp(&other.key)
        }
    }

    #[test]
    fn equal_keys_keep_arrival_order() {
        let mut queue = SortedQueue::new();
        queue.push(Keyed::new(1, 'a')).unwrap();
        queue.push(Keyed::new(2, 'b')).unwrap();
        queue.push(Keyed::new(1, 'c')).unwrap();
        queue.push(Keyed::new(1, 'd')).unwrap();
        let tags: Vec<char> = queue.iter().map(|k| k.tag).collect();
        assert_eq!(tags, ['b', 'a', 'c', 'd']);
    }

    #[test]
    fn read_from_refills_and_sorts() {
        let mut queue = SortedQueue::from([0, 0, 0]);
        let mut input = Cursor::new("5 1 9");
        queue.read_from(&mut input).unwrap();
        assert_eq!(queue.as_slice(), [9, 5, 1]);
    }

    #[test]
    fn failed_read_leaves_the_store_sorted() {
        let mut queue = SortedQueue::from([9, 5, 1]);
        let mut bad_token = Cursor::new("2 x");
        queue.read_from(&mut bad_token).unwrap_err();
        assert!(is_non_increasing(queue.as_slice()));
        assert_eq!(queue.as_slice(), [5, 2, 1]);
        assert_eq!(queue.front(), Some(&5));

        let mut queue = SortedQueue::from([3, 2, 1]);
        let mut short_stream = Cursor::new("9");
        queue.read_from(&mut short_stream).unwrap_err();
        assert_eq!(queue.as_slice(), [9, 2, 1]);
    }

    #[test]
    fn displays_like_its_store() {
        let queue = SortedQueue::from([1, 3, 2]);
        assert_eq!(format!("{}", queue), "3 2 1 ");
    }

    #[test]
    fn clone_is_independent() {
        let original = SortedQueue::from([2, 1]);
        let mut clone = original.clone();
        clone.push(3).unwrap();
        assert_eq!(original.as_slice(), [2, 1]);
        assert_eq!(clone.as_slice(), [3, 2, 1]);
    }

    #[test]
    fn into_iter_drains_descending() {
        let queue = SortedQueue::from([2, 5, 3]);
        let drained: Vec<i32> = queue.into_iter().collect();
        assert_eq!(drained, [5, 3, 2]);
    }
}
