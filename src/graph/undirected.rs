use log::trace;

use crate::core::{
    error::{AddEdgeError, AddEdgeErrorKind},
    id::IdType,
    marker::{private::Sealed, Undirected},
};

use super::Graph;

/// Graph in which every edge links both of its endpoints to each other.
pub type UndirectedGraph<I> = Graph<I, Undirected>;

impl Sealed for Undirected {
    fn insert_edge<I: IdType>(
        graph: &mut Graph<I, Self>,
        first: &I,
        second: &I,
    ) -> Result<(), AddEdgeError<I>> {
        graph.connect_symmetric(first, second)
    }
}

impl<I: IdType> Graph<I, Undirected> {
    /// Links `first` and `second` in both directions.
    ///
    /// All checks happen before any mutation, so on error neither link is
    /// added.
    fn connect_symmetric(
        &mut self,
        first: &I,
        second: &I,
    ) -> Result<(), AddEdgeError<I>> {
        let (first_index, second_index) = self.resolve_endpoints(first, second)?;

        if self.vertex_at(first_index).is_connected_to(second)
            || self.vertex_at(second_index).is_connected_to(first)
        {
            return Err(AddEdgeError::new(
                first.clone(),
                second.clone(),
                AddEdgeErrorKind::MultiEdge,
            ));
        }

        self.connect(first, second)?;
        self.connect(second, first)?;
        self.edge_count += 1;

        trace!("added edge {first:?} -- {second:?}");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;

    use assert_matches::assert_matches;

    use crate::{core::error::PathErrorKind, infra::testing::check_consistency};

    use super::*;

    fn create_letters() -> UndirectedGraph<&'static str> {
        let mut graph = UndirectedGraph::new();

        for id in ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K"] {
            graph.add_vertex(id).unwrap();
        }

        for (u, v) in [
            ("A", "C"),
            ("A", "H"),
            ("B", "C"),
            ("B", "D"),
            ("F", "D"),
            ("F", "E"),
            ("F", "I"),
            ("F", "J"),
            ("G", "E"),
            ("G", "K"),
            ("I", "J"),
        ] {
            graph.add_edge(&u, &v).unwrap();
        }

        graph
    }

    #[test]
    fn links_both_directions() {
        let mut graph = UndirectedGraph::new();

        graph.add_vertex('a').unwrap();
        graph.add_vertex('b').unwrap();
        graph.add_edge(&'a', &'b').unwrap();

        assert_eq!(graph.edge_count(), 1);
        assert!(graph.contains_edge(&'a', &'b'));
        assert!(graph.contains_edge(&'b', &'a'));
        assert_eq!(graph.get_path(&'a', &'b'), Ok(Some(vec![])));
        assert_eq!(graph.get_path(&'b', &'a'), Ok(Some(vec![])));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn add_edge_is_atomic() {
        let mut graph = UndirectedGraph::new();

        for id in 0..3 {
            graph.add_vertex(id).unwrap();
        }

        graph.add_edge(&0, &1).unwrap();

        // Swapped arguments describe the same edge. Neither half is added.
        assert_eq!(
            graph.add_edge(&1, &0),
            Err(AddEdgeError::new(1, 0, AddEdgeErrorKind::MultiEdge))
        );
        assert_eq!(graph.edge_count(), 1);
        assert_eq!(graph.neighbors(&0), Some(&[1][..]));
        assert_eq!(graph.neighbors(&1), Some(&[0][..]));

        assert_matches!(
            graph.add_edge(&2, &3),
            Err(e) if e.kind == AddEdgeErrorKind::DestinationAbsent
        );
        assert_eq!(graph.neighbors(&2), Some(&[][..]));
        check_consistency(&graph).unwrap();
    }

    #[test]
    fn no_path() {
        let mut graph = UndirectedGraph::new();

        for id in ["A", "B", "C", "D", "E", "F"] {
            graph.add_vertex(id).unwrap();
        }

        graph.add_edge(&"A", &"B").unwrap();
        graph.add_edge(&"A", &"C").unwrap();
        graph.add_edge(&"C", &"D").unwrap();
        graph.add_edge(&"E", &"F").unwrap();

        assert_eq!(graph.get_path(&"B", &"E"), Ok(None));
        assert_eq!(graph.get_path(&"F", &"D"), Ok(None));
        assert_eq!(graph.get_path(&"B", &"D"), Ok(Some(vec!["A", "C"])));
        assert_eq!(graph.get_path(&"D", &"B"), Ok(Some(vec!["C", "A"])));
    }

    #[test]
    fn path_letters() {
        let graph = create_letters();

        let path = graph.get_path(&"A", &"G").unwrap().unwrap();
        assert_eq!(path.len(), 5);
        assert_eq!(
            path.iter().copied().collect::<BTreeSet<_>>(),
            BTreeSet::from(["B", "C", "D", "E", "F"])
        );
        assert_eq!(path, vec!["C", "B", "D", "F", "E"]);

        assert_eq!(
            graph.get_path(&"G", &"C"),
            Ok(Some(vec!["E", "F", "D", "B"]))
        );
        assert_eq!(graph.get_path(&"K", &"H").unwrap().map(|p| p.len()), Some(7));
    }

    #[test]
    fn self_path_query() {
        let graph = create_letters();

        assert_matches!(
            graph.get_path(&"A", &"A"),
            Err(e) if e.kind == PathErrorKind::SameEndpoints
        );
        // Rejected even for unknown vertices.
        assert_matches!(
            graph.get_path(&"Z", &"Z"),
            Err(e) if e.kind == PathErrorKind::SameEndpoints
        );
    }
}
