//! Auto-assigned vertex identifiers.

use std::fmt;

/// Identifier handed out by a [`VertexFactory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(pub u64);

impl VertexId {
    /// The raw numeric identifier.
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}

/// Monotonic source of [`VertexId`]s.
///
/// Identifiers are unique per factory. The counter lives in the factory, so
/// callers that need process-wide uniqueness share one factory explicitly.
#[derive(Debug, Clone)]
pub struct VertexFactory {
    next: u64,
}

impl VertexFactory {
    /// Create a factory whose first identifier is `FIRST_VERTEX_ID`.
    pub fn new() -> Self {
        Self {
            next: super::FIRST_VERTEX_ID,
        }
    }

    /// Hand out the next identifier.
    pub fn next_id(&mut self) -> VertexId {
        let id = VertexId(self.next);
        self.next += 1;
        id
    }

    /// The identifier the next call to `next_id` will return.
    pub fn peek(&self) -> VertexId {
        VertexId(self.next)
    }
}

impl Default for VertexFactory {
    fn default() -> Self {
        Self::new()
    }
}
