//! Core graph structure — vertex index map + dense adjacency matrix.

use std::any::TypeId;
use std::collections::{BTreeSet, HashMap};
use std::hash::Hash;
use std::cmp;
use std::marker::PhantomData;

use crate::types::{EdgeRecord, GraphError, GraphResult, Unweighted, VertexFactory, VertexId};

use super::direction::{Directed, Direction, Undirected};

/// Smallest vertex count the matrix reserves for once it has to reallocate.
const MIN_GROWTH_CAPACITY: usize = 4;

/// In-memory graph backed by a row-major `n × n` adjacency matrix.
///
/// Vertex labels of type `V` are mapped to dense indices in registration
/// order. Slot `src * n + dest` holds the record of the edge from `src` to
/// `dest`, or `None`. Undirected graphs write both `(src, dest)` and
/// `(dest, src)` on every mutation, so the matrix stays symmetric.
#[derive(Debug, Clone)]
pub struct MatrixGraph<V, E = Unweighted, D = Directed> {
    /// Label -> dense vertex index.
    index_of: HashMap<V, usize>,
    /// Dense vertex index -> label, in registration order.
    vertices: Vec<V>,
    /// Row-major slots, always `vertices.len()²` long.
    matrix: Vec<Option<EdgeRecord<E>>>,
    /// Distinct edges; an undirected pair counts once.
    edge_count: usize,
    direction: PhantomData<D>,
}

/// A `MatrixGraph` with directed edges.
pub type DiMatrixGraph<V, E = Unweighted> = MatrixGraph<V, E, Directed>;

/// A `MatrixGraph` with undirected edges.
pub type UnMatrixGraph<V, E = Unweighted> = MatrixGraph<V, E, Undirected>;

impl<V, E, D> MatrixGraph<V, E, D>
where
    V: Eq + Hash + Clone,
    D: Direction,
{
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            index_of: HashMap::new(),
            vertices: Vec::new(),
            matrix: Vec::new(),
            edge_count: 0,
            direction: PhantomData,
        }
    }

    /// Pre-allocate for a known vertex count.
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            index_of: HashMap::with_capacity(vertex_capacity),
            vertices: Vec::with_capacity(vertex_capacity),
            matrix: Vec::with_capacity(vertex_capacity.saturating_mul(vertex_capacity)),
            edge_count: 0,
            direction: PhantomData,
        }
    }

    /// Build a graph from a vertex list and `(src, dest, payload)` triples.
    ///
    /// Fails on the first edge naming a vertex missing from `vertices`.
    pub fn from_parts<I, J>(vertices: I, edges: J) -> GraphResult<Self>
    where
        I: IntoIterator<Item = V>,
        J: IntoIterator<Item = (V, V, E)>,
        E: Clone,
    {
        let vertices = vertices.into_iter();
        Self::with_capacity(vertices.size_hint().0).populate(vertices, edges)
    }

    /// Number of registered vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of distinct edges. An undirected edge counts once.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether no vertex has been registered.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Whether edges have an orientation.
    pub fn is_directed(&self) -> bool {
        D::DIRECTED
    }

    /// Whether edges carry a payload (anything but [`Unweighted`]).
    pub fn is_weighted(&self) -> bool
    where
        E: 'static,
    {
        TypeId::of::<E>() != TypeId::of::<Unweighted>()
    }

    /// Whether `vertex` is registered.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.index_of.contains_key(vertex)
    }

    /// Dense index assigned to `vertex`.
    pub fn index_of(&self, vertex: &V) -> Option<usize> {
        self.index_of.get(vertex).copied()
    }

    /// Label registered at `index`.
    pub fn vertex_at(&self, index: usize) -> Option<&V> {
        self.vertices.get(index)
    }

    /// All vertices in registration order.
    pub fn vertices(&self) -> &[V] {
        &self.vertices
    }

    /// Register a vertex, returning its index. Re-registering is a no-op.
    pub fn add_vertex(&mut self, vertex: V) -> usize {
        let old_count = self.vertices.len();
        let index = self.register(vertex);
        self.grow_matrix(old_count);
        index
    }

    /// Register several vertices, growing the matrix once.
    pub fn add_vertices<I>(&mut self, vertices: I)
    where
        I: IntoIterator<Item = V>,
    {
        let old_count = self.vertices.len();
        for vertex in vertices {
            self.register(vertex);
        }
        self.grow_matrix(old_count);
    }

    /// Lenient edge probe: unknown vertices yield `false` instead of an error.
    pub fn contains_edge(&self, src: &V, dest: &V) -> bool {
        match (self.index_of(src), self.index_of(dest)) {
            (Some(s), Some(d)) => self.matrix[self.slot(s, d)].is_some(),
            _ => false,
        }
    }

    /// Insert or overwrite the edge from `src` to `dest`.
    ///
    /// Undirected graphs store the same payload in the mirrored slot.
    /// Returns the payload that was replaced, if any.
    pub fn add_edge(&mut self, src: &V, dest: &V, value: E) -> GraphResult<Option<E>>
    where
        E: Clone,
    {
        let (s, d) = self.resolve_pair(src, dest)?;

        if !D::DIRECTED && s != d {
            let mirror = self.slot(d, s);
            self.matrix[mirror] = Some(EdgeRecord::new(value.clone()));
        }
        let pos = self.slot(s, d);
        let previous = self.matrix[pos].replace(EdgeRecord::new(value));
        if previous.is_none() {
            self.edge_count += 1;
        }

        log::trace!("Stored edge {} -> {}", s, d);
        Ok(previous.map(EdgeRecord::into_value))
    }

    /// Clear the edge from `src` to `dest` (and its mirror when undirected).
    ///
    /// Removing an absent edge is not an error. Returns the removed payload.
    pub fn remove_edge(&mut self, src: &V, dest: &V) -> GraphResult<Option<E>> {
        let (s, d) = self.resolve_pair(src, dest)?;

        let pos = self.slot(s, d);
        let removed = self.matrix[pos].take();
        if !D::DIRECTED {
            let mirror = self.slot(d, s);
            self.matrix[mirror] = None;
        }
        if removed.is_some() {
            self.edge_count -= 1;
            log::trace!("Removed edge {} -> {}", s, d);
        }

        Ok(removed.map(EdgeRecord::into_value))
    }

    /// Strict edge query: unknown vertices are an error.
    pub fn has_edge(&self, src: &V, dest: &V) -> GraphResult<bool> {
        let (s, d) = self.resolve_pair(src, dest)?;
        Ok(self.matrix[self.slot(s, d)].is_some())
    }

    /// Borrow the payload of the edge from `src` to `dest`.
    pub fn edge(&self, src: &V, dest: &V) -> GraphResult<&E> {
        let (s, d) = self.resolve_pair(src, dest)?;
        self.matrix[self.slot(s, d)]
            .as_ref()
            .map(EdgeRecord::value)
            .ok_or(GraphError::NoSuchEdge { src: s, dest: d })
    }

    /// Mutably borrow the payload of a directed edge.
    ///
    /// Undirected graphs reject this: a one-sided write would desynchronise
    /// the mirrored slot. Re-insert with `add_edge` instead.
    pub fn edge_mut(&mut self, src: &V, dest: &V) -> GraphResult<&mut E> {
        let (s, d) = self.resolve_pair(src, dest)?;
        if !D::DIRECTED {
            return Err(GraphError::UndirectedPayloadMutation);
        }
        let pos = self.slot(s, d);
        self.matrix[pos]
            .as_mut()
            .map(EdgeRecord::value_mut)
            .ok_or(GraphError::NoSuchEdge { src: s, dest: d })
    }

    /// Every present slot as `(src, dest, payload)`, row-major.
    ///
    /// An undirected edge between distinct vertices is yielded once per
    /// stored direction.
    pub fn edges(&self) -> impl Iterator<Item = (&V, &V, &E)> + '_ {
        let n = self.vertices.len();
        let vertices = &self.vertices;
        self.matrix
            .iter()
            .enumerate()
            .filter_map(move |(pos, slot)| {
                let record = slot.as_ref()?;
                Some((&vertices[pos / n], &vertices[pos % n], record.value()))
            })
    }

    /// Owned copy of [`edges`](Self::edges).
    pub fn all_edges(&self) -> Vec<(V, V, E)>
    where
        E: Clone,
    {
        self.edges()
            .map(|(src, dest, value)| (src.clone(), dest.clone(), value.clone()))
            .collect()
    }

    /// Vertices reachable over one outgoing slot, ordered by label.
    ///
    /// Undirected graphs also scan the incoming column.
    pub fn neighbors(&self, vertex: &V) -> GraphResult<BTreeSet<V>>
    where
        V: Ord,
    {
        let v = self.index_of(vertex).ok_or(GraphError::UnknownVertex)?;
        let mut neighbors = BTreeSet::new();

        for other in 0..self.vertices.len() {
            let outgoing = self.matrix[self.slot(v, other)].is_some();
            if outgoing {
                neighbors.insert(self.vertices[other].clone());
            }

            if !D::DIRECTED {
                let incoming = self.matrix[self.slot(other, v)].is_some();
                if incoming != outgoing {
                    log::warn!(
                        "Asymmetric undirected slots between vertex {} and {}",
                        v,
                        other
                    );
                }
                if incoming {
                    neighbors.insert(self.vertices[other].clone());
                }
            }
        }

        Ok(neighbors)
    }

    fn register(&mut self, vertex: V) -> usize {
        if let Some(&index) = self.index_of.get(&vertex) {
            return index;
        }
        let index = self.vertices.len();
        self.index_of.insert(vertex.clone(), index);
        self.vertices.push(vertex);
        index
    }

    fn resolve_pair(&self, src: &V, dest: &V) -> GraphResult<(usize, usize)> {
        let s = self.index_of(src).ok_or(GraphError::UnknownSource)?;
        let d = self.index_of(dest).ok_or(GraphError::UnknownDestination)?;
        Ok((s, d))
    }

    #[inline]
    fn slot(&self, src: usize, dest: usize) -> usize {
        src * self.vertices.len() + dest
    }

    /// Relayout the matrix from `old_count²` to `vertex_count²` slots.
    ///
    /// Row width changes with the vertex count, so every old row is moved
    /// to its new offset. Rows move last-first: a row's new offset is never
    /// before its old one, so no unmoved slot is overwritten. Storage is
    /// reused when the reserved capacity suffices.
    fn grow_matrix(&mut self, old_count: usize) {
        let new_count = self.vertices.len();
        if new_count == old_count {
            return;
        }

        let needed = new_count * new_count;
        if self.matrix.capacity() < needed {
            let reserved = cmp::max(new_count.next_power_of_two(), MIN_GROWTH_CAPACITY);
            let reserved_slots = reserved.saturating_mul(reserved);
            self.matrix.reserve_exact(reserved_slots - self.matrix.len());
            log::debug!("Reserved adjacency matrix for {} vertices", reserved);
        }
        self.matrix.resize_with(needed, || None);

        for row in (1..old_count).rev() {
            let from = row * old_count;
            let to = row * new_count;
            for col in (0..old_count).rev() {
                let slot = self.matrix[from + col].take();
                self.matrix[to + col] = slot;
            }
        }

        log::debug!(
            "Relaid adjacency matrix from {} to {} vertices",
            old_count,
            new_count
        );
    }

    /// Register `vertices`, then insert every edge.
    pub(crate) fn populate<I, J>(mut self, vertices: I, edges: J) -> GraphResult<Self>
    where
        I: IntoIterator<Item = V>,
        J: IntoIterator<Item = (V, V, E)>,
        E: Clone,
    {
        self.add_vertices(vertices);

        for (src, dest, value) in edges {
            self.add_edge(&src, &dest, value)?;
        }

        log::debug!(
            "Built matrix graph with {} vertices and {} edges",
            self.vertex_count(),
            self.edge_count()
        );
        Ok(self)
    }
}

impl<V, D> MatrixGraph<V, Unweighted, D>
where
    V: Eq + Hash + Clone,
    D: Direction,
{
    /// Insert a presence-only edge from `src` to `dest`.
    pub fn add_unweighted_edge(&mut self, src: &V, dest: &V) -> GraphResult<()> {
        self.add_edge(src, dest, Unweighted).map(|_| ())
    }
}

impl<E, D> MatrixGraph<VertexId, E, D>
where
    D: Direction,
{
    /// Register a vertex with a fresh identifier from `factory`.
    pub fn add_fresh_vertex(&mut self, factory: &mut VertexFactory) -> VertexId {
        let id = factory.next_id();
        self.add_vertex(id);
        id
    }
}

impl<V, E, D> Default for MatrixGraph<V, E, D>
where
    V: Eq + Hash + Clone,
    D: Direction,
{
    fn default() -> Self {
        Self::new()
    }
}
