//! Array-backed binary min-heap over `(key, value)` pairs.
//!
//! The backing vector encodes a complete binary tree: the children of index
//! `i` live at `2i + 1` and `2i + 2`, and the parent of index `j` at
//! `(j - 1) / 2`. Every non-root key is greater than or equal to its parent's
//! key. Only keys take part in comparisons, so values need no ordering.

use crate::error::HeapError;

/// Minimal priority-queue capability shared by min-oriented queues.
pub trait PriorityQueue {
    /// Ordering criterion.
    type Key: Ord;
    /// Payload carried alongside each key.
    type Value;

    /// Adds a `(key, value)` pair.
    fn insert(&mut self, key: Self::Key, value: Self::Value);

    /// Returns the pair with the minimum key without removing it.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] when the queue holds no entries.
    fn peek_min(&self) -> Result<(&Self::Key, &Self::Value), HeapError>;

    /// Removes and returns the pair with the minimum key.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] when the queue holds no entries.
    fn extract_min(&mut self) -> Result<(Self::Key, Self::Value), HeapError>;

    /// Returns the number of entries.
    fn len(&self) -> usize;

    /// Returns `true` when the queue holds no entries.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Clone, Debug)]
struct Entry<K, V> {
    key: K,
    value: V,
}

/// Binary min-heap keyed by `K`.
///
/// # Examples
/// ```
/// use kruskal_core::{HeapError, MinHeap, PriorityQueue};
///
/// let mut heap = MinHeap::build([(3, 'c'), (1, 'a'), (2, 'b')]);
/// heap.insert(0, 'z');
///
/// assert_eq!(heap.peek_min()?, (&0, &'z'));
/// assert_eq!(heap.extract_min()?, (0, 'z'));
/// assert_eq!(heap.extract_min()?, (1, 'a'));
/// assert_eq!(heap.len(), 2);
/// # Ok::<(), HeapError>(())
/// ```
#[derive(Clone, Debug)]
pub struct MinHeap<K, V> {
    data: Vec<Entry<K, V>>,
}

impl<K: Ord, V> MinHeap<K, V> {
    /// Creates an empty heap.
    #[must_use]
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Creates an empty heap with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    /// Builds a heap from unordered pairs in linear time.
    ///
    /// The pairs are loaded as given and then sifted down from the parent of
    /// the last leaf back to the root.
    pub fn build(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        let data = pairs
            .into_iter()
            .map(|(key, value)| Entry { key, value })
            .collect();
        let mut heap = Self { data };
        heap.heapify();
        heap
    }

    /// Adds a `(key, value)` pair, restoring heap order by sifting up.
    pub fn insert(&mut self, key: K, value: V) {
        self.data.push(Entry { key, value });
        self.sift_up(self.data.len() - 1);
    }

    /// Returns the pair with the minimum key without removing it.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] when the heap holds no entries.
    pub fn peek_min(&self) -> Result<(&K, &V), HeapError> {
        self.data
            .first()
            .map(|entry| (&entry.key, &entry.value))
            .ok_or(HeapError::Empty)
    }

    /// Removes and returns the pair with the minimum key.
    ///
    /// # Errors
    /// Returns [`HeapError::Empty`] when the heap holds no entries.
    pub fn extract_min(&mut self) -> Result<(K, V), HeapError> {
        if self.data.is_empty() {
            return Err(HeapError::Empty);
        }
        let last = self.data.len() - 1;
        self.data.swap(0, last);
        let entry = self.data.pop().ok_or(HeapError::Empty)?;
        self.sift_down(0);
        Ok((entry.key, entry.value))
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` when the heap holds no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Drains the heap into a vector ordered by non-decreasing key.
    #[must_use]
    pub fn into_sorted_vec(mut self) -> Vec<(K, V)> {
        let mut sorted = Vec::with_capacity(self.data.len());
        while let Ok(pair) = self.extract_min() {
            sorted.push(pair);
        }
        sorted
    }

    fn heapify(&mut self) {
        if self.data.len() < 2 {
            return;
        }
        let start = parent(self.data.len() - 1);
        for index in (0..=start).rev() {
            self.sift_down(index);
        }
    }

    fn sift_up(&mut self, mut index: usize) {
        while index > 0 {
            let up = parent(index);
            if self.data[up].key <= self.data[index].key {
                break;
            }
            self.data.swap(index, up);
            index = up;
        }
    }

    fn sift_down(&mut self, mut index: usize) {
        let len = self.data.len();
        loop {
            let left = 2 * index + 1;
            if left >= len {
                break;
            }
            let right = left + 1;
            let smaller = if right < len && self.data[right].key < self.data[left].key {
                right
            } else {
                left
            };
            if self.data[smaller].key >= self.data[index].key {
                break;
            }
            self.data.swap(index, smaller);
            index = smaller;
        }
    }

    #[cfg(test)]
    pub(crate) fn keys(&self) -> impl Iterator<Item = &K> {
        self.data.iter().map(|entry| &entry.key)
    }
}

const fn parent(index: usize) -> usize {
    (index - 1) / 2
}

impl<K: Ord, V> Default for MinHeap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Ord, V> FromIterator<(K, V)> for MinHeap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self::build(iter)
    }
}

impl<K: Ord, V> From<Vec<(K, V)>> for MinHeap<K, V> {
    fn from(pairs: Vec<(K, V)>) -> Self {
        Self::build(pairs)
    }
}

impl<K: Ord, V> PriorityQueue for MinHeap<K, V> {
    type Key = K;
    type Value = V;

    fn insert(&mut self, key: K, value: V) {
        Self::insert(self, key, value);
    }

    fn peek_min(&self) -> Result<(&K, &V), HeapError> {
        Self::peek_min(self)
    }

    fn extract_min(&mut self) -> Result<(K, V), HeapError> {
        Self::extract_min(self)
    }

    fn len(&self) -> usize {
        Self::len(self)
    }

    fn is_empty(&self) -> bool {
        Self::is_empty(self)
    }
}
