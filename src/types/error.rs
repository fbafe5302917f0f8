//! Error types for the matrix-graph library.

use thiserror::Error;

/// All errors that can occur in the matrix-graph library.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The source vertex of an edge operation is not registered.
    #[error("Source vertex does not exist in the graph")]
    UnknownSource,

    /// The destination vertex of an edge operation is not registered.
    #[error("Destination vertex does not exist in the graph")]
    UnknownDestination,

    /// A single-vertex query named an unregistered vertex.
    #[error("Vertex does not exist in the graph")]
    UnknownVertex,

    /// Both vertices are registered but no edge connects them.
    #[error("No edge exists from vertex index {src} to vertex index {dest}")]
    NoSuchEdge { src: usize, dest: usize },

    /// In-place payload mutation was requested on an undirected graph.
    #[error("Cannot mutate one side of an undirected edge in place; re-insert the edge instead")]
    UndirectedPayloadMutation,
}

impl GraphError {
    /// Whether this error reports an unregistered vertex argument.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            Self::UnknownSource | Self::UnknownDestination | Self::UnknownVertex
        )
    }
}

/// Convenience result type for matrix-graph operations.
pub type GraphResult<T> = Result<T, GraphError>;
