//! All data types for the matrix-graph library.

pub mod edge;
pub mod error;
pub mod vertex;

pub use edge::{EdgeRecord, Unweighted};
pub use error::{GraphError, GraphResult};
pub use vertex::{VertexFactory, VertexId};

/// Vertex capacity reserved by `GraphBuilder::new`.
pub const DEFAULT_VERTEX_CAPACITY: usize = 16;

/// First identifier handed out by a fresh `VertexFactory`.
pub const FIRST_VERTEX_ID: u64 = 1;
