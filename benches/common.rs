#![allow(dead_code)]

use fastrand::Rng;
use pathgraph::{EdgeType, Graph};

pub const RANDOM_SEED: u64 = 0xef6f79ed30ba75a;

pub struct RandomEdges {
    v: usize,
    w: usize,
    n: usize,
    p: f32,
}

impl RandomEdges {
    pub fn new(vertex_count: usize, p: f32) -> Self {
        Self {
            v: 1,
            w: usize::MAX,
            n: vertex_count,
            p,
        }
    }

    pub fn next_edge(&mut self, rng: &mut Rng) -> Option<(usize, usize)> {
        // Based on the implementation in pathgraph::infra::proptest.

        let Self { v, w, .. } = self;
        let n = self.n;
        let p = self.p;

        if *v >= n {
            return None;
        }

        let r = rng.f32();
        *w = w
            .wrapping_add(1)
            .saturating_add(((1.0 - r).ln() / (1.0 - p).ln()).floor() as usize);

        while *w >= *v && *v < n {
            *w -= *v;
            *v += 1;
        }

        if *v < n {
            // Randomize the orientation so that directed cycles are possible.
            if rng.bool() {
                Some((*v, *w))
            } else {
                Some((*w, *v))
            }
        } else {
            None
        }
    }
}

pub fn pathgraph_random<Ty: EdgeType>(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> Graph<usize, Ty> {
    let mut graph = Graph::with_capacity(vertex_count);

    for id in 0..vertex_count {
        graph.add_vertex(id).unwrap();
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(&u, &v).unwrap();
    }

    graph
}

pub fn petgraph_random(
    vertex_count: usize,
    density: f32,
    rng: &mut Rng,
) -> petgraph::graphmap::DiGraphMap<usize, ()> {
    let mut graph = petgraph::graphmap::DiGraphMap::new();

    for id in 0..vertex_count {
        graph.add_node(id);
    }

    let mut edges = RandomEdges::new(vertex_count, density);

    while let Some((u, v)) = edges.next_edge(rng) {
        graph.add_edge(u, v, ());
    }

    graph
}
