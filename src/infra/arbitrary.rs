use std::fmt;

use arbitrary::{Arbitrary, Unstructured};

use crate::{
    core::{
        error::{AddEdgeError, AddVertexError, PathError},
        id::{IdType, VertexIndex},
        marker::EdgeType,
    },
    graph::Graph,
};

/// Position of a vertex, reduced modulo the current vertex count.
#[derive(Debug, Arbitrary, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Index(pub usize);

impl Index {
    pub fn get(&self, m: usize) -> Option<usize> {
        if m > 0 {
            Some(self.0 % m)
        } else {
            None
        }
    }
}

#[derive(Debug, Arbitrary, Clone)]
pub enum MutOp<I> {
    AddVertex(I),
    /// Edge between existing vertices.
    AddEdge(Index, Index),
    /// Edge between arbitrary identifiers, which may not be in the graph.
    AddEdgeById(I, I),
    GetPath(Index, Index),
}

#[derive(Debug, PartialEq)]
pub enum MutOpResult<I> {
    AddVertex(Result<(), AddVertexError<I>>),
    AddEdge(Result<(), AddEdgeError<I>>),
    GetPath {
        from: I,
        to: I,
        result: Result<Option<Vec<I>>, PathError<I>>,
    },
    /// The operation referred to a vertex of an empty graph.
    Skipped,
}

impl<I: IdType> MutOp<I> {
    pub fn apply<Ty: EdgeType>(self, graph: &mut Graph<I, Ty>) -> MutOpResult<I> {
        let n = graph.vertex_count();
        let id_at = |graph: &Graph<I, Ty>, index: Index| {
            index
                .get(n)
                .map(|i| graph.vertex_at(VertexIndex(i)).id().clone())
        };

        match self {
            MutOp::AddVertex(id) => MutOpResult::AddVertex(graph.add_vertex(id)),
            MutOp::AddEdge(src, dst) => match (id_at(graph, src), id_at(graph, dst)) {
                (Some(src), Some(dst)) => MutOpResult::AddEdge(graph.add_edge(&src, &dst)),
                _ => MutOpResult::Skipped,
            },
            MutOp::AddEdgeById(src, dst) => MutOpResult::AddEdge(graph.add_edge(&src, &dst)),
            MutOp::GetPath(from, to) => match (id_at(graph, from), id_at(graph, to)) {
                (Some(from), Some(to)) => {
                    let result = graph.get_path(&from, &to);
                    MutOpResult::GetPath { from, to, result }
                }
                _ => MutOpResult::Skipped,
            },
        }
    }
}

pub struct MutOpsSeq<I>(pub Vec<MutOp<I>>);

impl<I> IntoIterator for MutOpsSeq<I> {
    type Item = MutOp<I>;
    type IntoIter = std::vec::IntoIter<MutOp<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<I: IdType> MutOpsSeq<I> {
    /// Prints the sequence as Rust code operating on named identifiers and
    /// applies it to the graph, so that a failing fuzz case can be turned into
    /// a unit test.
    pub fn replay<Ty: EdgeType>(self, graph: &mut Graph<I, Ty>) {
        println!("let mut graph; // directed or undirected graph");
        println!();

        for op in self {
            let n = graph.vertex_count();
            let id_at = |index: Index| {
                index
                    .get(n)
                    .map(|i| graph.vertex_at(VertexIndex(i)).id().clone())
            };

            match &op {
                MutOp::AddVertex(id) => println!("graph.add_vertex({id:?});"),
                MutOp::AddEdge(src, dst) => {
                    if let (Some(src), Some(dst)) = (id_at(*src), id_at(*dst)) {
                        println!("graph.add_edge(&{src:?}, &{dst:?});");
                    }
                }
                MutOp::AddEdgeById(src, dst) => println!("graph.add_edge(&{src:?}, &{dst:?});"),
                MutOp::GetPath(from, to) => {
                    if let (Some(from), Some(to)) = (id_at(*from), id_at(*to)) {
                        println!("graph.get_path(&{from:?}, &{to:?});");
                    }
                }
            }

            op.apply(graph);
        }

        println!();
        println!("check_consistency(&graph).unwrap();");
    }
}

impl<I: fmt::Debug> fmt::Debug for MutOpsSeq<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "MutOpsSeq(vec![")?;

        for op in self.0.iter() {
            writeln!(f, "    MutOp::{:?},", op)?;
        }

        writeln!(f, "])")?;
        writeln!(f, ".replay(&mut graph);")
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
enum OpKind {
    AddVertex,
    AddEdge,
    AddEdgeById,
    GetPath,
}

impl<'a, I> Arbitrary<'a> for MutOpsSeq<I>
where
    I: Arbitrary<'a>,
{
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut seq = Vec::new();

        while !u.is_empty() {
            // Edges are needed more often than vertices for interesting paths,
            // edges by arbitrary ids mostly exercise the error paths.
            let kind = match u.choose(&[
                OpKind::AddVertex,
                OpKind::AddVertex,
                OpKind::AddEdge,
                OpKind::AddEdge,
                OpKind::AddEdge,
                OpKind::AddEdgeById,
                OpKind::GetPath,
                OpKind::GetPath,
            ]) {
                Ok(kind) => *kind,
                Err(_) => break,
            };

            let op = match kind {
                OpKind::AddVertex => u.arbitrary().map(MutOp::AddVertex),
                OpKind::AddEdge => u
                    .arbitrary()
                    .and_then(|src| Ok(MutOp::AddEdge(src, u.arbitrary()?))),
                OpKind::AddEdgeById => u
                    .arbitrary()
                    .and_then(|src| Ok(MutOp::AddEdgeById(src, u.arbitrary()?))),
                OpKind::GetPath => u
                    .arbitrary()
                    .and_then(|from| Ok(MutOp::GetPath(from, u.arbitrary()?))),
            };

            match op {
                Ok(op) => seq.push(op),
                Err(_) => break,
            }
        }

        Ok(MutOpsSeq(seq))
    }
}
