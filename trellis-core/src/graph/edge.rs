//! Graph Edges
//!
//! An edge is an immutable directed connection between two vertices with an
//! optional numeric weight.

use std::hash::{Hash, Hasher};

use super::VertexId;

/// Weight assumed for unweighted edges by path algorithms.
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// A directed edge `source -> destination`.
///
/// Equality and hashing are structural over all three fields. Weights are
/// compared by bit pattern, so `NaN` equals itself and `0.0` differs from
/// `-0.0`; this keeps `Eq` and `Hash` consistent.
#[derive(Debug, Clone)]
pub struct Edge<V> {
    source: V,
    destination: V,
    weight: Option<f64>,
}

impl<V: VertexId> Edge<V> {
    /// Create an edge with an optional weight.
    pub fn new(source: V, destination: V, weight: Option<f64>) -> Self {
        Self {
            source,
            destination,
            weight,
        }
    }

    /// Create a weighted edge.
    pub fn weighted(source: V, destination: V, weight: f64) -> Self {
        Self::new(source, destination, Some(weight))
    }

    /// Create an unweighted edge.
    pub fn unweighted(source: V, destination: V) -> Self {
        Self::new(source, destination, None)
    }

    /// Get the vertex the edge starts at.
    pub fn source(&self) -> &V {
        &self.source
    }

    /// Get the vertex the edge points to.
    pub fn destination(&self) -> &V {
        &self.destination
    }

    /// The stored weight; `None` means unweighted, not zero.
    pub fn weight(&self) -> Option<f64> {
        self.weight
    }

    /// The cost of traversing this edge: its weight, or [`DEFAULT_WEIGHT`].
    pub fn cost(&self) -> f64 {
        self.weight.unwrap_or(DEFAULT_WEIGHT)
    }

    /// Whether the edge starts and ends at the same vertex.
    pub fn is_self_loop(&self) -> bool {
        self.source == self.destination
    }

    /// Split into `(source, destination, weight)`.
    pub fn into_parts(self) -> (V, V, Option<f64>) {
        (self.source, self.destination, self.weight)
    }

    /// The mirror edge `destination -> source` with the same weight.
    pub fn reversed(&self) -> Self {
        Self::new(self.destination.clone(), self.source.clone(), self.weight)
    }
}

impl<V: PartialEq> PartialEq for Edge<V> {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
            && self.destination == other.destination
            && self.weight.map(f64::to_bits) == other.weight.map(f64::to_bits)
    }
}

impl<V: Eq> Eq for Edge<V> {}

impl<V: Hash> Hash for Edge<V> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.source.hash(state);
        self.destination.hash(state);
        self.weight.map(f64::to_bits).hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn unweighted_edge_costs_one() {
        let edge = Edge::unweighted("a", "b");
        assert_eq!(edge.weight(), None);
        assert_eq!(edge.cost(), 1.0);
    }

    #[test]
    fn weighted_edge_keeps_weight() {
        let edge = Edge::weighted(1, 2, 0.0);
        assert_eq!(edge.weight(), Some(0.0));
        assert_eq!(edge.cost(), 0.0);
    }

    #[test]
    fn equality_is_structural() {
        assert_eq!(Edge::weighted(1, 2, 3.5), Edge::weighted(1, 2, 3.5));
        assert_ne!(Edge::weighted(1, 2, 3.5), Edge::weighted(1, 2, 4.0));
        assert_ne!(Edge::weighted(1, 2, 3.5), Edge::unweighted(1, 2));
        assert_ne!(Edge::unweighted(1, 2), Edge::unweighted(2, 1));
    }

    #[test]
    fn hashing_matches_equality() {
        let mut set = HashSet::new();
        set.insert(Edge::weighted("a", "b", 2.0));
        set.insert(Edge::weighted("a", "b", 2.0));
        set.insert(Edge::unweighted("a", "b"));
        set.insert(Edge::new("a", "b", Some(f64::NAN)));
        set.insert(Edge::new("a", "b", Some(f64::NAN)));
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn reversed_mirrors_endpoints() {
        let edge = Edge::weighted('x', 'y', 7.0);
        let mirror = edge.reversed();
        assert_eq!(mirror.source(), &'y');
        assert_eq!(mirror.destination(), &'x');
        assert_eq!(mirror.weight(), Some(7.0));
        assert_eq!(mirror.reversed(), edge);
    }

    #[test]
    fn self_loop_is_accepted() {
        let edge = Edge::unweighted(4, 4);
        assert!(edge.is_self_loop());
    }
}
