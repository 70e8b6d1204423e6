use std::fmt;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
#[error("adding vertex failed: {kind}")]
pub struct AddVertexError<I> {
    pub id: I,
    pub kind: AddVertexErrorKind,
}

impl<I> AddVertexError<I> {
    pub fn new(id: I, kind: AddVertexErrorKind) -> Self {
        Self { id, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddVertexErrorKind {
    AlreadyExists,
}

impl fmt::Display for AddVertexErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddVertexErrorKind::AlreadyExists => "the graph already contains the vertex",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("adding edge failed: {kind}")]
pub struct AddEdgeError<I> {
    pub src: I,
    pub dst: I,
    pub kind: AddEdgeErrorKind,
}

impl<I> AddEdgeError<I> {
    pub fn new(src: I, dst: I, kind: AddEdgeErrorKind) -> Self {
        Self { src, dst, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddEdgeErrorKind {
    SourceAbsent,
    DestinationAbsent,
    MultiEdge,
    SelfLoop,
}

impl fmt::Display for AddEdgeErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            AddEdgeErrorKind::SourceAbsent => "source does not exist",
            AddEdgeErrorKind::DestinationAbsent => "destination does not exist",
            AddEdgeErrorKind::MultiEdge => {
                "an edge already exists and the graph does not allow multi edges"
            }
            AddEdgeErrorKind::SelfLoop => "the graph does not allow self-loops",
        };
        f.write_str(reason)
    }
}

#[derive(Debug, Error, PartialEq)]
#[error("finding path failed: {kind}")]
pub struct PathError<I> {
    pub from: I,
    pub to: I,
    pub kind: PathErrorKind,
}

impl<I> PathError<I> {
    pub fn new(from: I, to: I, kind: PathErrorKind) -> Self {
        Self { from, to, kind }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathErrorKind {
    /// Both endpoints are the same vertex.
    SameEndpoints,
    SourceAbsent,
    DestinationAbsent,
}

impl fmt::Display for PathErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            PathErrorKind::SameEndpoints => "endpoints must be different vertices",
            PathErrorKind::SourceAbsent => "source does not exist",
            PathErrorKind::DestinationAbsent => "destination does not exist",
        };
        f.write_str(reason)
    }
}

/// Any error returned by the graph operations.
#[derive(Debug, Error, PartialEq)]
pub enum Error<I> {
    #[error("{0}")]
    AddVertex(#[from] AddVertexError<I>),
    #[error("{0}")]
    AddEdge(#[from] AddEdgeError<I>),
    #[error("{0}")]
    Path(#[from] PathError<I>),
}
