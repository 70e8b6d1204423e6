use super::{
    error::{AddEdgeError, AddEdgeErrorKind},
    id::IdType,
};

/// A vertex with its outgoing adjacency list.
///
/// Neighbors are kept in the order in which the edges were added. This order
/// determines the order in which the path search explores the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vertex<I> {
    id: I,
    neighbors: Vec<I>,
}

impl<I: IdType> Vertex<I> {
    pub fn new(id: I) -> Self {
        Self {
            id,
            neighbors: Vec::new(),
        }
    }

    pub fn id(&self) -> &I {
        &self.id
    }

    pub fn neighbors(&self) -> &[I] {
        &self.neighbors
    }

    pub fn degree(&self) -> usize {
        self.neighbors.len()
    }

    pub fn is_connected_to(&self, target: &I) -> bool {
        self.neighbors.contains(target)
    }

    /// Adds an outgoing edge to `target`.
    ///
    /// Fails if the edge already exists. The existence of `target` in the
    /// graph and self-loops are the responsibility of the caller.
    pub(crate) fn connect_to(&mut self, target: I) -> Result<(), AddEdgeError<I>> {
        if self.is_connected_to(&target) {
            return Err(AddEdgeError::new(
                self.id.clone(),
                target,
                AddEdgeErrorKind::MultiEdge,
            ));
        }

        self.neighbors.push(target);
        Ok(())
    }
}
