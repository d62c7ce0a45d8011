//! Vertex Identifiers
//!
//! Vertices are not separate objects: an identifier IS the vertex. Any value
//! that can be cloned, compared, hashed and debug-printed can serve as one.

use std::fmt::Debug;
use std::hash::Hash;

/// Bound satisfied by every type usable as a vertex identifier.
///
/// `Debug` is required so errors and log events can name a vertex.
pub trait VertexId: Clone + Eq + Hash + Debug {}

impl<T> VertexId for T where T: Clone + Eq + Hash + Debug {}

/// Whether edges are one-way or mirrored.
///
/// Fixed at construction and immutable for the life of a graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphKind {
    /// Each inserted edge connects `from -> to` only.
    Directed,

    /// Each inserted edge is stored twice, once per direction.
    Undirected,
}

impl GraphKind {
    /// Whether edges of this kind are one-way.
    pub fn is_directed(self) -> bool {
        self == GraphKind::Directed
    }
}
