pub mod error;
pub mod id;
pub mod marker;
pub mod vertex;

pub use error::{
    AddEdgeError, AddEdgeErrorKind, AddVertexError, AddVertexErrorKind, Error, PathError,
    PathErrorKind,
};
pub use id::{IdType, VertexIndex};
pub use vertex::Vertex;
