use std::{fmt, hash::Hash};

/// Capability required from vertex identifiers.
///
/// Identifiers are chosen by the user and compared by value, so any type that
/// is cloneable, comparable for equality and hashable qualifies. Good examples
/// are integers, `char`s, `String`s or `&'static str`s.
///
/// The trait is implemented automatically for all such types.
pub trait IdType: Clone + Eq + Hash + fmt::Debug {}

impl<T> IdType for T where T: Clone + Eq + Hash + fmt::Debug {}

/// Dense position of a vertex in the graph storage.
///
/// Vertices are never removed, so the index of a vertex is stable for the
/// whole lifetime of the graph and equals the number of vertices added before
/// it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct VertexIndex(pub usize);

impl VertexIndex {
    #[inline]
    pub fn as_usize(&self) -> usize {
        self.0
    }

    #[inline]
    pub fn from_usize(index: usize) -> Self {
        Self(index)
    }
}

impl From<usize> for VertexIndex {
    fn from(index: usize) -> Self {
        Self(index)
    }
}

impl From<VertexIndex> for usize {
    fn from(index: VertexIndex) -> Self {
        index.0
    }
}

impl fmt::Display for VertexIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
