//! In-memory graph container — the core data structure.

pub mod builder;
pub mod direction;
pub mod matrix_graph;

pub use builder::GraphBuilder;
pub use direction::{Directed, Direction, Undirected};
pub use matrix_graph::{DiMatrixGraph, MatrixGraph, UnMatrixGraph};
