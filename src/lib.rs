//! Minimal in-memory directed and undirected graphs over caller-chosen vertex
//! identifiers, with a single query: find some path between two vertices.
//!
//! ```
//! use pathgraph::DirectedGraph;
//!
//! let mut graph = DirectedGraph::new();
//!
//! for id in 1..=3 {
//!     graph.add_vertex(id).unwrap();
//! }
//!
//! graph.add_edge(&1, &2).unwrap();
//! graph.add_edge(&2, &3).unwrap();
//!
//! assert_eq!(graph.get_path(&1, &3).unwrap(), Some(vec![2]));
//! assert_eq!(graph.get_path(&3, &1).unwrap(), None);
//! ```

pub mod common;
pub mod core;
pub mod graph;
pub mod infra;

pub use crate::{
    core::{
        error::Error,
        id::IdType,
        marker::{Directed, EdgeType, Undirected},
        vertex::Vertex,
    },
    graph::{DirectedGraph, Graph, UndirectedGraph},
};

pub mod prelude {
    pub use crate::{
        core::marker::{Directed, EdgeType, Undirected},
        graph::{DirectedGraph, Graph, UndirectedGraph},
    };
}
