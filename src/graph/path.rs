//! Depth-first path search.
//!
//! The search keeps an explicit stack of frames instead of recursing, so the
//! depth of the graph is not limited by the native call stack. Each frame
//! holds a vertex and a cursor into its neighbor list. The frames on the stack
//! always form a path from the start vertex to the vertex on top, which makes
//! reconstructing the result trivial once the goal is on top.

use log::debug;

use crate::{
    common::{TypedBitSet, VisitSet},
    core::{
        error::{PathError, PathErrorKind},
        id::{IdType, VertexIndex},
        marker::EdgeType,
    },
};

use super::Graph;

#[derive(Debug, Clone, Copy)]
struct Frame {
    vertex: VertexIndex,
    cursor: usize,
}

impl Frame {
    fn new(vertex: VertexIndex) -> Self {
        Self { vertex, cursor: 0 }
    }
}

/// Finds the intermediate vertices of some path from `from` to `to`.
///
/// See [`Graph::get_path`] for details.
pub fn find<I, Ty>(
    graph: &Graph<I, Ty>,
    from: &I,
    to: &I,
) -> Result<Option<Vec<I>>, PathError<I>>
where
    I: IdType,
    Ty: EdgeType,
{
    let error = |kind| PathError::new(from.clone(), to.clone(), kind);

    if from == to {
        return Err(error(PathErrorKind::SameEndpoints));
    }

    let start = graph
        .index_of(from)
        .ok_or_else(|| error(PathErrorKind::SourceAbsent))?;
    let goal = graph
        .index_of(to)
        .ok_or_else(|| error(PathErrorKind::DestinationAbsent))?;

    let mut visited = TypedBitSet::<VertexIndex>::with_capacity(graph.vertex_count());
    visited.visit(start);

    let mut stack = vec![Frame::new(start)];

    while let Some(frame) = stack.last_mut() {
        if frame.vertex == goal {
            // The bottom frame is the start, the top one is the goal.
            let path = stack[1..stack.len() - 1]
                .iter()
                .map(|frame| graph.vertex_at(frame.vertex).id().clone())
                .collect::<Vec<_>>();

            debug!(
                "found path {from:?} ~> {to:?} with {} intermediate vertices after visiting {}",
                path.len(),
                visited.visited_count()
            );

            return Ok(Some(path));
        }

        let neighbors = graph.vertex_at(frame.vertex).neighbors();
        let mut next = None;

        while let Some(neighbor) = neighbors.get(frame.cursor) {
            frame.cursor += 1;

            // Neighbors always refer to existing vertices.
            if let Some(index) = graph.index_of(neighbor) {
                if visited.visit(index) {
                    next = Some(index);
                    break;
                }
            }
        }

        match next {
            Some(index) => stack.push(Frame::new(index)),
            None => {
                stack.pop();
            }
        }
    }

    debug!(
        "no path {from:?} ~> {to:?} after visiting {}",
        visited.visited_count()
    );

    Ok(None)
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::{
        core::marker::{Directed, Undirected},
        infra::{
            proptest::{graph_directed, graph_undirected},
            testing::check_path,
        },
    };

    use super::*;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    /// Checks that `path` is a valid answer for the query using an independent
    /// reachability check.
    fn assert_valid<Ty: EdgeType>(graph: &Graph<usize, Ty>, from: usize, to: usize) {
        let path = graph.get_path(&from, &to).unwrap();

        let mut reference = petgraph::graphmap::GraphMap::<usize, (), petgraph::Directed>::new();
        for id in graph.vertex_ids() {
            reference.add_node(*id);
        }
        for id in graph.vertex_ids() {
            for neighbor in graph.neighbors(id).unwrap() {
                reference.add_edge(*id, *neighbor, ());
            }
        }

        let reachable = petgraph::algo::has_path_connecting(&reference, from, to, None);

        match path {
            Some(path) => {
                assert!(
                    reachable,
                    "path found between unreachable vertices ({from}, {to})"
                );

                if let Err(error) = check_path(graph, &from, &to, &path) {
                    panic!("invalid path {path:?} from {from} to {to}: {error}");
                }
            }
            None => assert!(
                !reachable,
                "no path reported between reachable vertices ({from}, {to})"
            ),
        }
    }

    fn random_graph<Ty: EdgeType>(
        vertex_count: usize,
        density: f32,
        rng: &mut fastrand::Rng,
    ) -> Graph<usize, Ty> {
        let mut graph = Graph::with_capacity(vertex_count);

        for id in 0..vertex_count {
            graph.add_vertex(id).unwrap();
        }

        for u in 0..vertex_count {
            for v in 0..vertex_count {
                if u != v && rng.f32() < density {
                    // Duplicates of undirected edges are expected here.
                    let _ = graph.add_edge(&u, &v);
                }
            }
        }

        graph
    }

    #[test]
    fn adjacent_vertices_give_empty_path() {
        let mut graph = Graph::<_, Directed>::new();

        graph.add_vertex(0).unwrap();
        graph.add_vertex(1).unwrap();
        graph.add_edge(&0, &1).unwrap();

        assert_eq!(find(&graph, &0, &1), Ok(Some(Vec::new())));
    }

    #[test]
    fn adjacent_target_reached_through_earlier_neighbor() {
        let mut graph = Graph::<_, Directed>::new();

        for id in 0..3 {
            graph.add_vertex(id).unwrap();
        }

        graph.add_edge(&0, &1).unwrap();
        graph.add_edge(&1, &2).unwrap();
        graph.add_edge(&0, &2).unwrap();

        assert!(graph.contains_edge(&0, &2));
        assert_eq!(find(&graph, &0, &2), Ok(Some(vec![1])));
        assert_eq!(find(&graph, &1, &2), Ok(Some(Vec::new())));
    }

    #[test]
    fn unknown_endpoints() {
        let mut graph = Graph::<_, Undirected>::new();

        graph.add_vertex(0).unwrap();

        assert_eq!(
            find(&graph, &1, &0),
            Err(PathError::new(1, 0, PathErrorKind::SourceAbsent))
        );
        assert_eq!(
            find(&graph, &0, &1),
            Err(PathError::new(0, 1, PathErrorKind::DestinationAbsent))
        );
        assert_eq!(
            find(&graph, &2, &1),
            Err(PathError::new(2, 1, PathErrorKind::SourceAbsent))
        );
    }

    #[test]
    fn isolated_vertices() {
        let mut graph = Graph::<_, Directed>::new();

        graph.add_vertex("lonely").unwrap();
        graph.add_vertex("alone").unwrap();

        assert_eq!(graph.get_path(&"lonely", &"alone"), Ok(None));
    }

    #[test]
    fn first_path_in_insertion_order() {
        let mut graph = Graph::<_, Directed>::new();

        for id in 0..5 {
            graph.add_vertex(id).unwrap();
        }

        // The long branch is explored first because its edge was added first.
        graph.add_edge(&0, &1).unwrap();
        graph.add_edge(&1, &2).unwrap();
        graph.add_edge(&2, &3).unwrap();
        graph.add_edge(&3, &4).unwrap();
        graph.add_edge(&0, &4).unwrap();

        assert_eq!(graph.get_path(&0, &4), Ok(Some(vec![1, 2, 3])));
    }

    #[test]
    fn dead_ends_are_not_in_path() {
        let mut graph = Graph::<_, Directed>::new();

        for id in 0..6 {
            graph.add_vertex(id).unwrap();
        }

        graph.add_edge(&0, &1).unwrap();
        graph.add_edge(&1, &2).unwrap();
        graph.add_edge(&1, &3).unwrap();
        graph.add_edge(&3, &1).unwrap();
        graph.add_edge(&0, &4).unwrap();
        graph.add_edge(&4, &5).unwrap();

        assert_eq!(graph.get_path(&0, &5), Ok(Some(vec![4])));
    }

    #[test]
    fn long_path_does_not_overflow_stack() {
        const N: usize = 200_000;

        let mut graph = Graph::<_, Directed>::with_capacity(N);

        for id in 0..N {
            graph.add_vertex(id).unwrap();
        }

        for id in 1..N {
            graph.add_edge(&(id - 1), &id).unwrap();
        }

        let path = graph.get_path(&0, &(N - 1)).unwrap().unwrap();
        assert_eq!(path.len(), N - 2);
        assert_eq!(path.first(), Some(&1));
        assert_eq!(path.last(), Some(&(N - 2)));

        assert_eq!(graph.get_path(&(N - 1), &0), Ok(None));
    }

    #[test]
    fn random_graphs_directed() {
        init_logger();
        let mut rng = fastrand::Rng::with_seed(0xef6f79ed30ba75a);

        for density in [0.02, 0.1, 0.3] {
            let graph = random_graph::<Directed>(30, density, &mut rng);

            for _ in 0..50 {
                let from = rng.usize(0..30);
                let to = rng.usize(0..30);

                if from != to {
                    assert_valid(&graph, from, to);
                }
            }
        }
    }

    #[test]
    fn random_graphs_undirected() {
        init_logger();
        let mut rng = fastrand::Rng::with_seed(0x5eed);

        for density in [0.02, 0.05, 0.2] {
            let graph = random_graph::<Undirected>(30, density, &mut rng);

            for _ in 0..50 {
                let from = rng.usize(0..30);
                let to = rng.usize(0..30);

                if from != to {
                    assert_valid(&graph, from, to);
                }
            }
        }
    }

    proptest! {
        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_path_directed(graph in graph_directed().max_size(64), src: usize, dst: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 1);

            let src = src % n;
            let dst = dst % n;
            prop_assume!(src != dst);

            assert_valid(&*graph, src, dst);
        }

        #[test]
        #[ignore = "run property-based tests with `cargo test proptest_ -- --ignored`"]
        fn proptest_path_undirected(graph in graph_undirected().max_size(64), src: usize, dst: usize) {
            let n = graph.vertex_count();
            prop_assume!(n > 1);

            let src = src % n;
            let dst = dst % n;
            prop_assume!(src != dst);

            assert_valid(&*graph, src, dst);
        }
    }
}
