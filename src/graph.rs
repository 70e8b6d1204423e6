//! The graph core shared by the directed and undirected variants.

use std::{fmt, iter::FusedIterator, marker::PhantomData};

use log::trace;
use rustc_hash::FxHashMap;

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind, AddVertexError, AddVertexErrorKind, PathError},
    id::{IdType, VertexIndex},
    marker::{private::Sealed, EdgeType},
    vertex::Vertex,
};

mod directed;
pub mod path;
mod undirected;

pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;

/// A graph over user-chosen vertex identifiers.
///
/// The edge type marker `Ty` decides how [`add_edge`](Graph::add_edge) links
/// the vertices: [`Directed`](crate::Directed) adds a one-way link,
/// [`Undirected`](crate::Undirected) a pair of symmetric links.
///
/// Vertices and edges can only be added, never removed.
///
/// # Synchronization
///
/// The graph is not internally synchronized. It can be shared immutably
/// between threads, but concurrent mutation requires wrapping the whole graph
/// in a single lock at the call boundary, because every operation works with
/// the whole identifier mapping.
pub struct Graph<I, Ty> {
    vertices: Vec<Vertex<I>>,
    index: FxHashMap<I, VertexIndex>,
    edge_count: usize,
    ty: PhantomData<fn() -> Ty>,
}

impl<I: IdType, Ty: EdgeType> Graph<I, Ty> {
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            index: FxHashMap::default(),
            edge_count: 0,
            ty: PhantomData,
        }
    }

    /// Creates an empty graph with preallocated space for `vertex_count`
    /// vertices.
    pub fn with_capacity(vertex_count: usize) -> Self {
        let mut index = FxHashMap::default();
        index.reserve(vertex_count);

        Self {
            vertices: Vec::with_capacity(vertex_count),
            index,
            edge_count: 0,
            ty: PhantomData,
        }
    }

    pub fn is_directed(&self) -> bool {
        Ty::is_directed()
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges. An undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn contains_vertex(&self, id: &I) -> bool {
        self.index.contains_key(id)
    }

    /// Returns `true` if there is an edge from `from` to `to`. For undirected
    /// graphs the orientation does not matter.
    pub fn contains_edge(&self, from: &I, to: &I) -> bool {
        self.vertex(from)
            .map(|vertex| vertex.is_connected_to(to))
            .unwrap_or(false)
    }

    pub fn vertex(&self, id: &I) -> Option<&Vertex<I>> {
        self.index_of(id).map(|index| self.vertex_at(index))
    }

    /// Returns the outgoing neighbors of the vertex in the order in which the
    /// edges were added.
    pub fn neighbors(&self, id: &I) -> Option<&[I]> {
        self.vertex(id).map(Vertex::neighbors)
    }

    /// Iterates over the vertex identifiers in the order in which the vertices
    /// were added.
    pub fn vertex_ids(&self) -> VertexIds<'_, I> {
        VertexIds {
            inner: self.vertices.iter(),
        }
    }

    /// Iterates over all edges.
    ///
    /// Each undirected edge is reported only once, oriented from the endpoint
    /// that was added to the graph first.
    pub fn edges(&self) -> Edges<'_, I, Ty> {
        Edges {
            graph: self,
            vertex: 0,
            neighbor: 0,
        }
    }

    /// Adds a new vertex.
    ///
    /// Fails if the graph already contains a vertex with the same identifier,
    /// in which case the graph is left unchanged.
    pub fn add_vertex(&mut self, id: I) -> Result<(), AddVertexError<I>> {
        if self.index.contains_key(&id) {
            return Err(AddVertexError::new(id, AddVertexErrorKind::AlreadyExists));
        }

        let index = VertexIndex::from_usize(self.vertices.len());
        trace!("adding vertex {id:?} at index {index}");

        self.index.insert(id.clone(), index);
        self.vertices.push(Vertex::new(id));

        Ok(())
    }

    /// Adds an edge between two existing vertices.
    ///
    /// For directed graphs this is a one-way link from `src` to `dst`. For
    /// undirected graphs both directions are linked, and the operation either
    /// fully succeeds or leaves the graph unchanged.
    pub fn add_edge(&mut self, src: &I, dst: &I) -> Result<(), AddEdgeError<I>> {
        <Ty as Sealed>::insert_edge(self, src, dst)
    }

    /// Finds some path from `from` to `to`.
    ///
    /// Returns the identifiers of the vertices strictly between the endpoints,
    /// in order from `from` to `to`, or `None` if `to` is not reachable.
    ///
    /// The path is not guaranteed to be the shortest one. It is the first path
    /// found by a depth-first search that explores neighbors in the order in
    /// which the edges were added, so the result is deterministic.
    ///
    /// In particular, the path is empty only if `to` is the first unvisited
    /// neighbor the search reaches. An edge from `from` to `to` alone does not
    /// guarantee that, the search may find `to` through an earlier neighbor.
    pub fn get_path(&self, from: &I, to: &I) -> Result<Option<Vec<I>>, PathError<I>> {
        path::find(self, from, to)
    }

    /// Returns `true` if there is a path from `from` to `to`.
    pub fn has_path(&self, from: &I, to: &I) -> Result<bool, PathError<I>> {
        self.get_path(from, to).map(|path| path.is_some())
    }

    pub(crate) fn index_of(&self, id: &I) -> Option<VertexIndex> {
        self.index.get(id).copied()
    }

    pub(crate) fn vertex_at(&self, index: VertexIndex) -> &Vertex<I> {
        &self.vertices[index.as_usize()]
    }

    /// Resolves the endpoints of a new edge, checking that both exist and
    /// differ.
    fn resolve_endpoints(
        &self,
        src: &I,
        dst: &I,
    ) -> Result<(VertexIndex, VertexIndex), AddEdgeError<I>> {
        let error = |kind| AddEdgeError::new(src.clone(), dst.clone(), kind);

        let src_index = self
            .index_of(src)
            .ok_or_else(|| error(AddEdgeErrorKind::SourceAbsent))?;
        let dst_index = self
            .index_of(dst)
            .ok_or_else(|| error(AddEdgeErrorKind::DestinationAbsent))?;

        if src_index == dst_index {
            return Err(error(AddEdgeErrorKind::SelfLoop));
        }

        Ok((src_index, dst_index))
    }

    /// Adds a one-way link from `src` to `dst` without touching the edge
    /// count.
    fn connect(&mut self, src: &I, dst: &I) -> Result<(), AddEdgeError<I>> {
        let (src_index, _) = self.resolve_endpoints(src, dst)?;
        self.vertices[src_index.as_usize()].connect_to(dst.clone())
    }
}

impl<I: Clone, Ty> Clone for Graph<I, Ty> {
    fn clone(&self) -> Self {
        Self {
            vertices: self.vertices.clone(),
            index: self.index.clone(),
            edge_count: self.edge_count,
            ty: PhantomData,
        }
    }
}

impl<I: fmt::Debug, Ty> fmt::Debug for Graph<I, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("vertices", &self.vertices)
            .field("edge_count", &self.edge_count)
            .finish()
    }
}

impl<I: IdType, Ty: EdgeType> Default for Graph<I, Ty> {
    fn default() -> Self {
        Self::new()
    }
}

pub struct VertexIds<'a, I> {
    inner: std::slice::Iter<'a, Vertex<I>>,
}

impl<'a, I: IdType> Iterator for VertexIds<'a, I> {
    type Item = &'a I;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(Vertex::id)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<I: IdType> ExactSizeIterator for VertexIds<'_, I> {}

impl<I: IdType> FusedIterator for VertexIds<'_, I> {}

pub struct Edges<'a, I, Ty> {
    graph: &'a Graph<I, Ty>,
    vertex: usize,
    neighbor: usize,
}

impl<'a, I: IdType, Ty: EdgeType> Iterator for Edges<'a, I, Ty> {
    type Item = (&'a I, &'a I);

    fn next(&mut self) -> Option<Self::Item> {
        let graph = self.graph;

        loop {
            let vertex = graph.vertices.get(self.vertex)?;

            match vertex.neighbors().get(self.neighbor) {
                Some(neighbor) => {
                    self.neighbor += 1;

                    // Both links of an undirected edge are stored, report it
                    // only from the endpoint that was added first.
                    if Ty::is_directed()
                        || graph
                            .index_of(neighbor)
                            .is_some_and(|index| index.as_usize() > self.vertex)
                    {
                        return Some((vertex.id(), neighbor));
                    }
                }
                None => {
                    self.vertex += 1;
                    self.neighbor = 0;
                }
            }
        }
    }
}

impl<I: IdType, Ty: EdgeType> FusedIterator for Edges<'_, I, Ty> {}
