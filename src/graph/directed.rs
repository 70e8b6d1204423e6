use log::trace;

use crate::core::{error::AddEdgeError, id::IdType, marker::private::Sealed, marker::Directed};

use super::Graph;

/// Graph in which edges are one-way links.
pub type DirectedGraph<I> = Graph<I, Directed>;

impl Sealed for Directed {
    fn insert_edge<I: IdType>(
        graph: &mut Graph<I, Self>,
        src: &I,
        dst: &I,
    ) -> Result<(), AddEdgeError<I>> {
        graph.connect_directed(src, dst)
    }
}

impl<I: IdType> Graph<I, Directed> {
    fn connect_directed(&mut self, src: &I, dst: &I) -> Result<(), AddEdgeError<I>> {
        self.connect(src, dst)?;
        self.edge_count += 1;

        trace!("added edge {src:?} -> {dst:?}");
        Ok(())
    }
}
