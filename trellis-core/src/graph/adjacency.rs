//! Adjacency-List Graph
//!
//! The graph owns a map from vertex to its outgoing edge list. Every key is a
//! known vertex, even when its list is empty.
//!
//! # Invariants
//!
//! - Inserting an edge inserts both endpoints as vertices first, so every
//!   edge's destination is also a key.
//! - In an undirected graph every stored edge `(s, d, w)` has a mirror
//!   `(d, s, w)` in `d`'s list. Only this type's mutators touch the lists,
//!   so the mirror is always present.
//! - Parallel edges are kept. Inserting the same edge twice stores it twice.
//!
//! The map preserves insertion order, so vertex enumeration is deterministic.

use indexmap::IndexMap;
use smallvec::SmallVec;
use tracing::trace;

use super::edge::Edge;
use super::vertex::{GraphKind, VertexId};

/// Outgoing edges of one vertex. Most vertices have only a handful.
type EdgeList<V> = SmallVec<[Edge<V>; 4]>;

/// An in-memory directed or undirected graph.
#[derive(Debug, Clone)]
pub struct Graph<V> {
    /// Directed or undirected, fixed at construction.
    kind: GraphKind,

    /// Outgoing edges per vertex, in vertex insertion order.
    adjacency: IndexMap<V, EdgeList<V>>,
}

impl<V: VertexId> Graph<V> {
    /// Create an empty graph of the given kind.
    pub fn new(kind: GraphKind) -> Self {
        Self {
            kind,
            adjacency: IndexMap::new(),
        }
    }

    /// Create an empty directed graph.
    pub fn directed() -> Self {
        Self::new(GraphKind::Directed)
    }

    /// Create an empty undirected graph.
    pub fn undirected() -> Self {
        Self::new(GraphKind::Undirected)
    }

    /// Create an empty graph with room for `vertices` vertices.
    pub fn with_capacity(kind: GraphKind, vertices: usize) -> Self {
        Self {
            kind,
            adjacency: IndexMap::with_capacity(vertices),
        }
    }

    /// Build a graph by inserting each `(from, to, weight)` triple in order.
    pub fn from_edges<I>(kind: GraphKind, edges: I) -> Self
    where
        I: IntoIterator<Item = (V, V, Option<f64>)>,
    {
        let mut graph = Self::new(kind);
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight);
        }
        graph
    }

    /// Get the graph kind.
    pub fn kind(&self) -> GraphKind {
        self.kind
    }

    /// Check if the graph is directed.
    pub fn is_directed(&self) -> bool {
        self.kind.is_directed()
    }

    /// Insert a vertex with no edges.
    ///
    /// Returns `false` and changes nothing if the vertex already exists.
    pub fn add_vertex(&mut self, vertex: V) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        trace!(?vertex, "vertex added");
        self.adjacency.insert(vertex, EdgeList::new());
        true
    }

    /// Insert an edge `from -> to`, creating either endpoint if missing.
    ///
    /// Undirected graphs also store the mirror edge `to -> from`.
    pub fn add_edge(&mut self, from: V, to: V, weight: Option<f64>) {
        self.add_vertex(from.clone());
        self.add_vertex(to.clone());

        let edge = Edge::new(from, to, weight);
        trace!(?edge, kind = ?self.kind, "edge added");

        if self.kind == GraphKind::Undirected {
            let mirror = edge.reversed();
            self.push_edge(mirror);
        }
        self.push_edge(edge);
    }

    fn push_edge(&mut self, edge: Edge<V>) {
        // Both endpoints were inserted by the caller.
        if let Some(list) = self.adjacency.get_mut(edge.source()) {
            list.push(edge);
        }
    }

    /// Outgoing edges of `vertex`, or an empty slice if it is unknown.
    pub fn edges(&self, vertex: &V) -> &[Edge<V>] {
        self.adjacency
            .get(vertex)
            .map(|list| list.as_slice())
            .unwrap_or(&[])
    }

    /// Weight of the first `from -> to` edge.
    ///
    /// `None` if there is no such edge or it is unweighted.
    pub fn weight(&self, from: &V, to: &V) -> Option<f64> {
        self.edges(from)
            .iter()
            .find(|edge| edge.destination() == to)
            .and_then(Edge::weight)
    }

    /// Check if at least one `from -> to` edge exists.
    pub fn has_edge(&self, from: &V, to: &V) -> bool {
        self.edges(from).iter().any(|edge| edge.destination() == to)
    }

    /// Destinations of the outgoing edges of `vertex`, in insertion order.
    ///
    /// Parallel edges yield the same neighbor more than once.
    pub fn neighbors<'a>(&'a self, vertex: &V) -> impl Iterator<Item = &'a V> + 'a {
        self.edges(vertex).iter().map(Edge::destination)
    }

    /// Remove a vertex and every edge pointing at it.
    ///
    /// Returns `false` and changes nothing if the vertex is absent.
    pub fn remove_vertex(&mut self, vertex: &V) -> bool {
        if self.adjacency.shift_remove(vertex).is_none() {
            return false;
        }

        let mut purged = 0;
        for list in self.adjacency.values_mut() {
            let before = list.len();
            list.retain(|edge| edge.destination() != vertex);
            purged += before - list.len();
        }

        trace!(?vertex, purged, "vertex removed");
        true
    }

    /// Remove every `from -> to` edge regardless of weight.
    ///
    /// Undirected graphs also drop every `to -> from` edge. Returns the number
    /// of edges removed from `from`'s list; zero means nothing changed.
    pub fn remove_edge(&mut self, from: &V, to: &V) -> usize {
        let removed = Self::retain_not_to(self.adjacency.get_mut(from), to);
        if self.kind == GraphKind::Undirected {
            Self::retain_not_to(self.adjacency.get_mut(to), from);
        }

        if removed > 0 {
            trace!(?from, ?to, removed, "edge removed");
        }
        removed
    }

    fn retain_not_to(list: Option<&mut EdgeList<V>>, to: &V) -> usize {
        match list {
            Some(list) => {
                let before = list.len();
                list.retain(|edge| edge.destination() != to);
                before - list.len()
            }
            None => 0,
        }
    }

    /// Drop every vertex and edge, keeping the graph kind.
    pub fn remove_all(&mut self) {
        trace!(vertices = self.adjacency.len(), "graph cleared");
        self.adjacency.clear();
    }

    /// Check if `vertex` is part of the graph.
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// Get the number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of logical edges.
    ///
    /// Undirected edges are stored twice but counted once.
    pub fn edge_count(&self) -> usize {
        let stored: usize = self.adjacency.values().map(|list| list.len()).sum();
        match self.kind {
            GraphKind::Directed => stored,
            GraphKind::Undirected => stored / 2,
        }
    }

    /// Check if the graph has no vertices.
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }

    /// All vertices in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// Every stored edge entry, grouped by source vertex.
    ///
    /// Undirected edges appear once per direction.
    pub fn all_edges(&self) -> impl Iterator<Item = &Edge<V>> {
        self.adjacency.values().flat_map(|list| list.iter())
    }
}

impl<V: VertexId> Default for Graph<V> {
    fn default() -> Self {
        Self::directed()
    }
}

impl<V: VertexId> Extend<Edge<V>> for Graph<V> {
    fn extend<I: IntoIterator<Item = Edge<V>>>(&mut self, iter: I) {
        for edge in iter {
            let (from, to, weight) = edge.into_parts();
            self.add_edge(from, to, weight);
        }
    }
}
