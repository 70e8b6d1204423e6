/// Marker of graphs whose edges are two-way links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Undirected {}

/// Marker of graphs whose edges are one-way links.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directed {}

/// Edge-insertion policy of a graph.
///
/// Only [`Directed`] and [`Undirected`] implement this trait. Each of them
/// decides how [`Graph::add_edge`](crate::Graph::add_edge) links the
/// endpoints.
pub trait EdgeType: private::Sealed + 'static {
    fn is_directed() -> bool;
}

impl EdgeType for Undirected {
    fn is_directed() -> bool {
        false
    }
}

impl EdgeType for Directed {
    fn is_directed() -> bool {
        true
    }
}

pub(crate) mod private {
    use crate::{
        core::{error::AddEdgeError, id::IdType},
        graph::Graph,
    };

    pub trait Sealed: Sized {
        /// Inserts the edge according to the policy of the marker. Implemented
        /// next to the corresponding graph variant.
        fn insert_edge<I: IdType>(
            graph: &mut Graph<I, Self>,
            src: &I,
            dst: &I,
        ) -> Result<(), AddEdgeError<I>>;
    }
}
