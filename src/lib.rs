//! matrix-graph — dense adjacency-matrix graph container.
//!
//! Stores caller-labelled vertices and optional per-edge payloads in a
//! row-major `n × n` matrix, giving O(1) edge lookup once labels are
//! resolved. Directedness and weightedness are chosen through type
//! parameters when the graph is declared.

pub mod graph;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{
    DiMatrixGraph, Directed, Direction, GraphBuilder, MatrixGraph, UnMatrixGraph, Undirected,
};
pub use types::{
    EdgeRecord, GraphError, GraphResult, Unweighted, VertexFactory, VertexId,
    DEFAULT_VERTEX_CAPACITY, FIRST_VERTEX_ID,
};
