//! Union-find (disjoint set union) over opaque element payloads.
//!
//! Entries live in dense parallel arrays indexed by [`Position`]. A leader is
//! an entry whose parent is itself; group sizes are only maintained at
//! leaders. `find` compresses paths in two passes and `union` attaches the
//! smaller group beneath the larger one, which keeps both operations close to
//! constant amortized cost.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::error::DisjointSetError;

static NEXT_SET_ID: AtomicU64 = AtomicU64::new(0);

/// Handle to an entry of a [`DisjointSet`].
///
/// Positions are only issued by [`DisjointSet::make_group`] and remember the
/// instance that issued them.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    owner: u64,
    index: usize,
}

impl Position {
    /// Returns the dense index of the entry within its owning set.
    #[must_use]
    #[rustfmt::skip]
    pub fn index(&self) -> usize { self.index }
}

/// Partition of elements into disjoint groups, each with a canonical leader.
///
/// # Examples
/// ```
/// use kruskal_core::{DisjointSet, DisjointSetError};
///
/// let mut groups = DisjointSet::new();
/// let a = groups.make_group('a');
/// let b = groups.make_group('b');
/// let c = groups.make_group('c');
///
/// assert!(groups.union(a, b)?);
/// assert_eq!(groups.find(a)?, groups.find(b)?);
/// assert_ne!(groups.find(a)?, groups.find(c)?);
/// assert_eq!(groups.group_count(), 2);
/// # Ok::<(), DisjointSetError>(())
/// ```
///
/// A clone is a distinct instance: it copies the partition but rejects
/// positions issued by the original, and vice versa.
#[derive(Debug)]
pub struct DisjointSet<T> {
    id: u64,
    elements: Vec<T>,
    parent: Vec<usize>,
    size: Vec<usize>,
    groups: usize,
}

impl<T> DisjointSet<T> {
    /// Creates an empty disjoint set.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates an empty disjoint set with room for `capacity` elements.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            id: NEXT_SET_ID.fetch_add(1, Ordering::Relaxed),
            elements: Vec::with_capacity(capacity),
            parent: Vec::with_capacity(capacity),
            size: Vec::with_capacity(capacity),
            groups: 0,
        }
    }

    /// Creates a singleton group holding `element` and returns its leader.
    pub fn make_group(&mut self, element: T) -> Position {
        let index = self.elements.len();
        self.elements.push(element);
        self.parent.push(index);
        self.size.push(1);
        self.groups += 1;
        Position {
            owner: self.id,
            index,
        }
    }

    /// Returns the number of elements across all groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Returns `true` when no group has been created.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of disjoint groups.
    #[must_use]
    #[rustfmt::skip]
    pub fn group_count(&self) -> usize { self.groups }

    /// Returns the element stored at `position`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::InvalidPosition`] when `position` was issued
    /// by another set.
    pub fn element(&self, position: Position) -> Result<&T, DisjointSetError> {
        let index = self.validate(position)?;
        self.elements
            .get(index)
            .ok_or(DisjointSetError::InvalidPosition { index })
    }

    /// Returns the leader of the group containing `position`.
    ///
    /// Every entry visited on the way to the leader is re-pointed directly at
    /// it, so a repeated call resolves in a single step.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::InvalidPosition`] when `position` was issued
    /// by another set.
    pub fn find(&mut self, position: Position) -> Result<Position, DisjointSetError> {
        let start = self.validate(position)?;
        let leader = self.leader_of(start);

        let mut current = start;
        while self.parent[current] != leader {
            let next = self.parent[current];
            self.parent[current] = leader;
            current = next;
        }

        Ok(Position {
            owner: self.id,
            index: leader,
        })
    }

    /// Merges the groups containing `left` and `right`.
    ///
    /// The leader of the smaller group is attached beneath the leader of the
    /// larger one. On equal sizes `left`'s leader joins `right`'s group.
    /// Returns `false` when both positions already share a leader.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::InvalidPosition`] when either position was
    /// issued by another set.
    pub fn union(&mut self, left: Position, right: Position) -> Result<bool, DisjointSetError> {
        let left_leader = self.find(left)?.index;
        let right_leader = self.find(right)?.index;
        if left_leader == right_leader {
            return Ok(false);
        }

        let (parent, child) = if self.size[left_leader] > self.size[right_leader] {
            (left_leader, right_leader)
        } else {
            (right_leader, left_leader)
        };
        self.parent[child] = parent;
        self.size[parent] += self.size[child];
        self.groups -= 1;
        Ok(true)
    }

    /// Returns `true` when both positions belong to the same group.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::InvalidPosition`] when either position was
    /// issued by another set.
    pub fn same_group(
        &mut self,
        left: Position,
        right: Position,
    ) -> Result<bool, DisjointSetError> {
        Ok(self.find(left)? == self.find(right)?)
    }

    /// Returns the number of elements in the group containing `position`.
    ///
    /// # Errors
    /// Returns [`DisjointSetError::InvalidPosition`] when `position` was issued
    /// by another set.
    pub fn group_size(&mut self, position: Position) -> Result<usize, DisjointSetError> {
        let leader = self.find(position)?;
        Ok(self.size[leader.index])
    }

    fn validate(&self, position: Position) -> Result<usize, DisjointSetError> {
        if position.owner != self.id || position.index >= self.parent.len() {
            return Err(DisjointSetError::InvalidPosition {
                index: position.index,
            });
        }
        Ok(position.index)
    }

    fn leader_of(&self, start: usize) -> usize {
        let mut leader = start;
        while self.parent[leader] != leader {
            leader = self.parent[leader];
        }
        leader
    }

    #[cfg(test)]
    pub(crate) fn parent_index(&self, position: Position) -> usize {
        self.parent[position.index]
    }
}

impl<T: Clone> Clone for DisjointSet<T> {
    fn clone(&self) -> Self {
        Self {
            id: NEXT_SET_ID.fetch_add(1, Ordering::Relaxed),
            elements: self.elements.clone(),
            parent: self.parent.clone(),
            size: self.size.clone(),
            groups: self.groups,
        }
    }
}

impl<T> Default for DisjointSet<T> {
    fn default() -> Self {
        Self::new()
    }
}
