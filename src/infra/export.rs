use std::{
    fmt::Display,
    io::{self, Cursor, Write},
};

use crate::{
    core::{id::IdType, marker::EdgeType},
    graph::Graph,
};

pub trait Export<G> {
    fn export<W: Write>(&self, graph: &G, out: &mut W) -> io::Result<()>;
}

/// Exporter to the [DOT](https://graphviz.org/doc/info/lang.html) format.
///
/// Vertices are named `v0`, `v1`, ... in the order in which they were added
/// and labeled by the given function.
pub struct Dot<I> {
    name: String,
    get_vertex_label: Box<dyn Fn(&I) -> String>,
}

impl<I> Dot<I> {
    pub fn new<F>(name: Option<String>, get_vertex_label: F) -> Self
    where
        F: Fn(&I) -> String + 'static,
    {
        Self {
            name: name.unwrap_or_else(|| String::from("G")),
            get_vertex_label: Box::new(get_vertex_label),
        }
    }

    pub fn to_string<Ty>(&self, graph: &Graph<I, Ty>) -> String
    where
        I: IdType,
        Ty: EdgeType,
    {
        let mut cursor = Cursor::new(Vec::new());
        self.export(graph, &mut cursor)
            .expect("writing to vec in cursor does not fail");

        String::from_utf8(cursor.into_inner()).expect("dot format is text format")
    }
}

impl<I: Display> Dot<I> {
    pub fn with_display(name: Option<String>) -> Self {
        Self::new(name, |id| format!("{id}"))
    }
}

impl<I, Ty> Export<Graph<I, Ty>> for Dot<I>
where
    I: IdType,
    Ty: EdgeType,
{
    fn export<W: Write>(&self, graph: &Graph<I, Ty>, out: &mut W) -> io::Result<()> {
        if graph.is_directed() {
            out.write_all(b"digraph ")?;
        } else {
            out.write_all(b"graph ")?;
        }

        out.write_all(self.name.as_bytes())?;
        out.write_all(b" {\n")?;

        for (i, id) in graph.vertex_ids().enumerate() {
            writeln!(out, "    v{} [label={:?}];", i, (self.get_vertex_label)(id))?;
        }

        let line = if graph.is_directed() { "->" } else { "--" };

        for (src, dst) in graph.edges() {
            // Every edge endpoint is a vertex of the graph.
            if let (Some(src), Some(dst)) = (graph.index_of(src), graph.index_of(dst)) {
                writeln!(out, "    v{} {} v{};", src, line, dst)?;
            }
        }

        out.write_all(b"}\n")?;

        Ok(())
    }
}
