use std::{
    collections::HashSet,
    hash::BuildHasher,
    marker::PhantomData,
    ops::{Deref, DerefMut},
};

use fixedbitset::FixedBitSet;

use crate::core::id::{IdType, VertexIndex};

/// A set of visited vertices.
pub trait VisitSet<I> {
    /// Marks the vertex as visited.
    ///
    /// Returns `true` when this is the first time the vertex is visited.
    fn visit(&mut self, id: I) -> bool;

    /// Returns `true` if the vertex is marked as visited.
    fn is_visited(&self, id: &I) -> bool;

    /// Returns the number of visited vertices.
    fn visited_count(&self) -> usize;

    /// Resets the set of visited vertices to be empty.
    fn reset_visited(&mut self);
}

impl<I: IdType, S: BuildHasher> VisitSet<I> for HashSet<I, S> {
    fn visit(&mut self, id: I) -> bool {
        self.insert(id)
    }

    fn is_visited(&self, id: &I) -> bool {
        self.contains(id)
    }

    fn visited_count(&self) -> usize {
        self.len()
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

impl VisitSet<VertexIndex> for TypedBitSet<VertexIndex> {
    fn visit(&mut self, id: VertexIndex) -> bool {
        let index = id.as_usize();
        if index >= self.len() {
            self.grow(index + 1);
        }
        !self.put(index)
    }

    fn is_visited(&self, id: &VertexIndex) -> bool {
        self.contains(id.as_usize())
    }

    fn visited_count(&self) -> usize {
        self.count_ones(..)
    }

    fn reset_visited(&mut self) {
        self.clear()
    }
}

/// Tiny [`FixedBitSet`] wrapper adding a generic type of the elements the set
/// holds.
pub struct TypedBitSet<T> {
    inner: FixedBitSet,
    ty: PhantomData<T>,
}

impl<T> TypedBitSet<T> {
    /// Creates a new empty bit set.
    pub fn new() -> Self {
        Self {
            inner: FixedBitSet::new(),
            ty: PhantomData,
        }
    }

    /// Creates a new empty bit set with given capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: FixedBitSet::with_capacity(capacity),
            ty: PhantomData,
        }
    }
}

impl<T> Default for TypedBitSet<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Deref for TypedBitSet<T> {
    type Target = FixedBitSet;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl<T> DerefMut for TypedBitSet<T> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}
