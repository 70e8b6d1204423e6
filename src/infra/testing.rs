use std::{fmt, ops::Deref};

use rustc_hash::FxHashSet;
use thiserror::Error;

use crate::{
    common::VisitSet,
    core::{id::IdType, marker::EdgeType},
    graph::Graph,
};

use super::export::Dot;

/// Creates a graph with vertices `0..vertex_count` connected in a chain
/// `0 - 1 - ... - (vertex_count - 1)`.
pub fn create_path<Ty: EdgeType>(vertex_count: usize) -> Graph<usize, Ty> {
    let mut graph = Graph::with_capacity(vertex_count);

    for id in 0..vertex_count {
        // Ids are unique.
        let _ = graph.add_vertex(id);
    }

    for id in 1..vertex_count {
        // Both endpoints exist and the edge is new.
        let _ = graph.add_edge(&(id - 1), &id);
    }

    graph
}

/// Creates a graph with vertices `0..vertex_count` where every pair of
/// distinct vertices is connected.
pub fn create_complete<Ty: EdgeType>(vertex_count: usize) -> Graph<usize, Ty> {
    let mut graph = Graph::with_capacity(vertex_count);

    for id in 0..vertex_count {
        let _ = graph.add_vertex(id);
    }

    for u in 0..vertex_count {
        for v in 0..vertex_count {
            if u == v {
                continue;
            }

            if !Ty::is_directed() && v > u {
                break;
            }

            let _ = graph.add_edge(&u, &v);
        }
    }

    graph
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConsistencyCheckError {
    #[error("vertex ids iterator count ({0}) is not equal to vertex count ({1})")]
    VertexIdsVertexCountMismatch(usize, usize),
    #[error("vertex ids are not unique, only {0} distinct out of {1}")]
    VertexIdsNotUnique(usize, usize),
    #[error("edges iterator count ({0}) is not equal to edge count ({1})")]
    EdgesEdgeCountMismatch(usize, usize),
    #[error("vertex {0} is connected to an unknown vertex {1}")]
    UnknownNeighbor(String, String),
    #[error("vertex {0} is connected to itself")]
    SelfLoop(String),
    #[error("vertex {0} is connected to {1} more than once")]
    MultiEdge(String, String),
    #[error("vertex {0} is connected to {1} but not the other way around")]
    Asymmetric(String, String),
    #[error("sum of degrees ({0}) is not equal to doubled edge count ({1})")]
    HandshakingLemma(usize, usize),
    #[error("sum of out degrees ({0}) is not equal to edge count ({1})")]
    HandshakingLemmaDirected(usize, usize),
    #[error("path uses a missing edge from {0} to {1}")]
    MissingPathEdge(String, String),
    #[error("path visits vertex {0} more than once")]
    RepeatedPathVertex(String),
}

/// Checks all structural invariants of the graph.
pub fn check_consistency<I, Ty>(graph: &Graph<I, Ty>) -> Result<(), ConsistencyCheckError>
where
    I: IdType,
    Ty: EdgeType,
{
    fn cmp<F>(actual: usize, expected: usize, error: F) -> Result<(), ConsistencyCheckError>
    where
        F: FnOnce(usize, usize) -> ConsistencyCheckError,
    {
        if actual == expected {
            Ok(())
        } else {
            Err(error(actual, expected))
        }
    }

    let show = |id: &I| format!("{id:?}");

    let vertex_count = graph.vertex_count();

    cmp(
        graph.vertex_ids().count(),
        vertex_count,
        ConsistencyCheckError::VertexIdsVertexCountMismatch,
    )?;

    let mut ids = FxHashSet::<&I>::default();
    for id in graph.vertex_ids() {
        ids.visit(id);
    }

    cmp(
        ids.visited_count(),
        vertex_count,
        ConsistencyCheckError::VertexIdsNotUnique,
    )?;

    let mut deg_sum = 0;

    for id in graph.vertex_ids() {
        let neighbors = graph.neighbors(id).unwrap_or_default();
        let mut seen = FxHashSet::<&I>::default();

        for neighbor in neighbors {
            if !graph.contains_vertex(neighbor) {
                return Err(ConsistencyCheckError::UnknownNeighbor(
                    show(id),
                    show(neighbor),
                ));
            }

            if neighbor == id {
                return Err(ConsistencyCheckError::SelfLoop(show(id)));
            }

            if !seen.visit(neighbor) {
                return Err(ConsistencyCheckError::MultiEdge(show(id), show(neighbor)));
            }

            if !Ty::is_directed() && !graph.contains_edge(neighbor, id) {
                return Err(ConsistencyCheckError::Asymmetric(show(id), show(neighbor)));
            }
        }

        deg_sum += neighbors.len();
    }

    let edge_count = graph.edge_count();

    cmp(
        graph.edges().count(),
        edge_count,
        ConsistencyCheckError::EdgesEdgeCountMismatch,
    )?;

    // https://en.wikipedia.org/wiki/Handshaking_lemma
    if Ty::is_directed() {
        cmp(
            deg_sum,
            edge_count,
            ConsistencyCheckError::HandshakingLemmaDirected,
        )?;
    } else {
        cmp(
            deg_sum,
            2 * edge_count,
            ConsistencyCheckError::HandshakingLemma,
        )?;
    }

    Ok(())
}

/// Checks that `from`, the intermediate vertices in `path` and `to` form a
/// valid path in the graph.
pub fn check_path<I, Ty>(
    graph: &Graph<I, Ty>,
    from: &I,
    to: &I,
    path: &[I],
) -> Result<(), ConsistencyCheckError>
where
    I: IdType,
    Ty: EdgeType,
{
    let full = std::iter::once(from)
        .chain(path.iter())
        .chain(std::iter::once(to))
        .collect::<Vec<_>>();

    for pair in full.windows(2) {
        if !graph.contains_edge(pair[0], pair[1]) {
            return Err(ConsistencyCheckError::MissingPathEdge(
                format!("{:?}", pair[0]),
                format!("{:?}", pair[1]),
            ));
        }
    }

    let mut seen = FxHashSet::<&I>::default();
    for id in full {
        if !seen.visit(id) {
            return Err(ConsistencyCheckError::RepeatedPathVertex(format!("{id:?}")));
        }
    }

    Ok(())
}

/// Graph wrapper which prints the graph in DOT format when debug formatted.
///
/// Useful as the value of proptest strategies so that failing cases can be
/// visualized.
pub struct AsDot<I, Ty> {
    graph: Graph<I, Ty>,
}

impl<I, Ty> AsDot<I, Ty> {
    pub fn new(graph: Graph<I, Ty>) -> Self {
        Self { graph }
    }

    pub fn into_inner(self) -> Graph<I, Ty> {
        self.graph
    }
}

impl<I, Ty> Deref for AsDot<I, Ty> {
    type Target = Graph<I, Ty>;

    fn deref(&self) -> &Self::Target {
        &self.graph
    }
}

impl<I: IdType, Ty: EdgeType> fmt::Debug for AsDot<I, Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let dot = Dot::new(None, |id: &I| format!("{id:?}")).to_string(&self.graph);
        f.write_str(&dot)
    }
}

impl<I: IdType, Ty: EdgeType> Clone for AsDot<I, Ty> {
    fn clone(&self) -> Self {
        Self::new(self.graph.clone())
    }
}

impl<I: IdType, Ty: EdgeType> PartialEq for AsDot<I, Ty> {
    fn eq(&self, other: &Self) -> bool {
        format!("{:?}", self) == format!("{:?}", other)
    }
}

impl<I, Ty> From<Graph<I, Ty>> for AsDot<I, Ty> {
    fn from(graph: Graph<I, Ty>) -> Self {
        Self::new(graph)
    }
}
