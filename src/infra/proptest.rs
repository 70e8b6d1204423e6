use std::{fmt, marker::PhantomData};

use proptest::{
    prelude::Rng,
    strategy::{NewTree, Strategy, ValueTree},
    test_runner::TestRunner,
};
use rustc_hash::FxHashSet;

use crate::{
    core::marker::{Directed, EdgeType, Undirected},
    graph::Graph,
};

use super::testing::AsDot;

pub fn graph<Ty: EdgeType>() -> GraphStrategy<Ty> {
    GraphStrategy::new()
}

pub fn graph_undirected() -> GraphStrategy<Undirected> {
    GraphStrategy::new()
}

pub fn graph_directed() -> GraphStrategy<Directed> {
    GraphStrategy::new()
}

/// Strategy generating graphs with vertices `0..n` and random edges.
pub struct GraphStrategy<Ty> {
    params: StrategyParams,
    ty: PhantomData<fn() -> Ty>,
}

impl<Ty> fmt::Debug for GraphStrategy<Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphStrategy")
            .field("params", &self.params)
            .finish()
    }
}

macro_rules! delegate_builder_fn {
    ($name:ident$(, $param:ident: $param_type:ty)*) => {
        #[doc = concat!("See [StrategyParams::", stringify!($name), "](StrategyParams::", stringify!($name), ") for details.")]
        pub fn $name(self, $($param: $param_type),*) -> Self {
            Self {
                params: self.params.$name($($param,)*),
                ..self
            }
        }
    }
}

impl<Ty: EdgeType> GraphStrategy<Ty> {
    pub fn new() -> Self {
        Self::with_params(StrategyParams::default())
    }

    pub fn with_params(params: StrategyParams) -> Self {
        Self {
            params,
            ty: PhantomData,
        }
    }

    // Builder pattern on the strategy itself to allow usage as in
    // `graph_directed().max_size(100).sparse()`.
    delegate_builder_fn!(max_size, max_size: usize);
    delegate_builder_fn!(density, density: f32);
    delegate_builder_fn!(sparse);
}

impl<Ty: EdgeType> Default for GraphStrategy<Ty> {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug)]
pub struct StrategyParams {
    max_size: usize,
    // (0, 1] - 1 means no limitation in choosing p, lower values artificially decrease chosen p
    density: f32,
}

impl Default for StrategyParams {
    fn default() -> Self {
        Self {
            max_size: 256,
            density: 1.0,
        }
    }
}

impl StrategyParams {
    pub fn max_size(self, max_size: usize) -> Self {
        Self { max_size, ..self }
    }

    pub fn density(self, density: f32) -> Self {
        assert!(
            density > 0.0 && density <= 1.0,
            "density must be in (0, 1] range"
        );
        Self { density, ..self }
    }

    pub fn sparse(self) -> Self {
        self.density(0.05)
    }
}

impl<Ty: EdgeType> Strategy for GraphStrategy<Ty> {
    type Tree = GraphValueTree<Ty>;
    type Value = AsDot<usize, Ty>;

    fn new_tree(&self, runner: &mut TestRunner) -> NewTree<Self> {
        let n = runner.rng().gen_range(0..=self.params.max_size);
        let p = runner.rng().gen::<f64>() * self.params.density as f64;

        let mut edges = Vec::new();

        // Too small probability makes the skip computation degenerate.
        if p >= 1e-6 {
            // Efficient generation of large random networks
            // http://vlado.fmf.uni-lj.si/pub/networks/doc/ms/rndgen.pdf
            let mut v = 1;
            let mut w = usize::MAX; // -1

            while v < n {
                let r: f64 = runner.rng().gen();
                let skip = ((1.0 - r).ln() / (1.0 - p).ln()).floor();
                w = w.wrapping_add(1).saturating_add(skip as usize);

                while w >= v && v < n {
                    w -= v;
                    v += 1;
                }

                if v < n {
                    // Always w < v, swap in half of the cases so that directed
                    // cycles are possible.
                    if runner.rng().gen_bool(0.5) {
                        edges.push((w, v));
                    } else {
                        edges.push((v, w));
                    }
                }
            }
        }

        Ok(GraphValueTree {
            vertex_count: n,
            edges,
            removed_edges: FxHashSet::default(),
            next_edge: 0,
            shrink_vertices: true,
            last: None,
            ty: PhantomData,
        })
    }
}

#[derive(Debug, Clone, Copy)]
enum Shrink {
    Edge(usize),
    Vertex,
}

/// Shrinks the graph by removing edges one by one and then vertices from the
/// end.
pub struct GraphValueTree<Ty> {
    vertex_count: usize,
    edges: Vec<(usize, usize)>,
    removed_edges: FxHashSet<usize>,
    next_edge: usize,
    shrink_vertices: bool,
    last: Option<Shrink>,
    ty: PhantomData<fn() -> Ty>,
}

impl<Ty> fmt::Debug for GraphValueTree<Ty> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphValueTree")
            .field("vertex_count", &self.vertex_count)
            .field("edges", &self.edges)
            .field("removed_edges", &self.removed_edges)
            .finish()
    }
}

impl<Ty: EdgeType> ValueTree for GraphValueTree<Ty> {
    type Value = AsDot<usize, Ty>;

    fn current(&self) -> Self::Value {
        let mut graph = Graph::with_capacity(self.vertex_count);

        for id in 0..self.vertex_count {
            // Ids are unique.
            let _ = graph.add_vertex(id);
        }

        for (e, (src, dst)) in self.edges.iter().enumerate() {
            if !self.removed_edges.contains(&e)
                && *src < self.vertex_count
                && *dst < self.vertex_count
            {
                // Generated pairs are unique and never loops.
                let _ = graph.add_edge(src, dst);
            }
        }

        AsDot::new(graph)
    }

    fn simplify(&mut self) -> bool {
        self.last = None;

        while self.next_edge < self.edges.len() {
            let e = self.next_edge;
            self.next_edge += 1;

            if self.removed_edges.insert(e) {
                self.last = Some(Shrink::Edge(e));
                return true;
            }
        }

        if self.shrink_vertices && self.vertex_count > 0 {
            self.vertex_count -= 1;
            self.last = Some(Shrink::Vertex);
            return true;
        }

        false
    }

    fn complicate(&mut self) -> bool {
        match self.last.take() {
            Some(Shrink::Edge(e)) => {
                self.removed_edges.remove(&e);
                true
            }
            Some(Shrink::Vertex) => {
                // Removing the last vertex made the failure disappear, keep
                // the remaining vertices.
                self.vertex_count += 1;
                self.shrink_vertices = false;
                true
            }
            None => false,
        }
    }
}
