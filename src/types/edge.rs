//! Edge payload wrapper and the unweighted marker.

/// Payload type for graphs whose edges carry no value.
///
/// A slot holding `EdgeRecord<Unweighted>` still marks the edge as present.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Unweighted;

/// The value stored in one present slot of the adjacency matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct EdgeRecord<E> {
    value: E,
}

impl<E> EdgeRecord<E> {
    /// Wrap an edge payload.
    pub fn new(value: E) -> Self {
        Self { value }
    }

    /// Borrow the payload.
    pub fn value(&self) -> &E {
        &self.value
    }

    /// Mutably borrow the payload.
    pub fn value_mut(&mut self) -> &mut E {
        &mut self.value
    }

    /// Unwrap the payload.
    pub fn into_value(self) -> E {
        self.value
    }
}

impl EdgeRecord<Unweighted> {
    /// A presence-only record.
    pub fn unweighted() -> Self {
        Self { value: Unweighted }
    }
}

impl<E> From<E> for EdgeRecord<E> {
    fn from(value: E) -> Self {
        Self::new(value)
    }
}
