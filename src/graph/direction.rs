//! Compile-time directedness markers.

mod private {
    pub trait Sealed {}

    impl Sealed for super::Directed {}
    impl Sealed for super::Undirected {}
}

/// Selects whether a graph stores each direction of an edge independently.
pub trait Direction: private::Sealed {
    /// `true` when slot(a, b) and slot(b, a) are independent.
    const DIRECTED: bool;
}

/// Marker for graphs whose edges have an orientation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Directed;

/// Marker for graphs whose edges are mirrored in both directions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Undirected;

impl Direction for Directed {
    const DIRECTED: bool = true;
}

impl Direction for Undirected {
    const DIRECTED: bool = false;
}
