//! Fluent API for building MatrixGraph instances.

use std::cmp;
use std::hash::Hash;
use std::marker::PhantomData;

use crate::types::{GraphResult, Unweighted, DEFAULT_VERTEX_CAPACITY};

use super::direction::{Directed, Direction};
use super::MatrixGraph;

/// Fluent builder for constructing a MatrixGraph.
///
/// Vertices and edges are collected as given and validated by `build`.
pub struct GraphBuilder<V, E = Unweighted, D = Directed> {
    vertices: Vec<V>,
    edges: Vec<(V, V, E)>,
    vertex_capacity: usize,
    direction: PhantomData<D>,
}

impl<V, E, D> GraphBuilder<V, E, D>
where
    V: Eq + Hash + Clone,
    E: Clone,
    D: Direction,
{
    /// Create a new builder with the default vertex capacity.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_VERTEX_CAPACITY)
    }

    /// Create a new builder sized for `vertex_capacity` vertices.
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_capacity),
            edges: Vec::new(),
            vertex_capacity,
            direction: PhantomData,
        }
    }

    /// Add a vertex.
    pub fn vertex(&mut self, vertex: V) -> &mut Self {
        self.vertices.push(vertex);
        self
    }

    /// Add several vertices.
    pub fn vertices<I>(&mut self, vertices: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
    {
        self.vertices.extend(vertices);
        self
    }

    /// Add an edge between two vertices.
    pub fn edge(&mut self, src: V, dest: V, value: E) -> &mut Self {
        self.edges.push((src, dest, value));
        self
    }

    /// Build the final MatrixGraph.
    pub fn build(self) -> GraphResult<MatrixGraph<V, E, D>> {
        let capacity = cmp::max(self.vertex_capacity, self.vertices.len());
        MatrixGraph::with_capacity(capacity).populate(self.vertices, self.edges)
    }
}

impl<V, D> GraphBuilder<V, Unweighted, D>
where
    V: Eq + Hash + Clone,
    D: Direction,
{
    /// Add a presence-only edge.
    pub fn link(&mut self, src: V, dest: V) -> &mut Self {
        self.edge(src, dest, Unweighted)
    }
}

impl<V, E, D> Default for GraphBuilder<V, E, D>
where
    V: Eq + Hash + Clone,
    E: Clone,
    D: Direction,
{
    fn default() -> Self {
        Self::new()
    }
}
