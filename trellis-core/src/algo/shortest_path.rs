//! Single-Source Shortest Path
//!
//! Dijkstra-style relaxation over the whole vertex set. Each round scans the
//! unvisited vertices for the smallest tentative distance instead of using a
//! priority queue, then relaxes that vertex's outgoing edges. Unweighted edges
//! cost [`DEFAULT_WEIGHT`](crate::graph::DEFAULT_WEIGHT).
//!
//! Weights are assumed non-negative. Negative weights are not rejected: the
//! search still terminates, since finalized vertices are never relaxed again
//! and path reconstruction is bounded by the vertex count, but the returned
//! path is then not guaranteed to be minimal.

use std::collections::HashMap;

use indexmap::IndexSet;
use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, VertexId};

/// A path found by [`Graph::shortest_path`].
#[derive(Debug, Clone, PartialEq)]
pub struct ShortestPath<V> {
    /// Vertices from source to target, both inclusive.
    pub path: Vec<V>,

    /// Sum of the edge costs along `path`.
    pub distance: f64,
}

impl<V> ShortestPath<V> {
    /// Number of edges on the path.
    pub fn len(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Whether the path has no edges, i.e. source and target coincide.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// First vertex of the path.
    pub fn source(&self) -> Option<&V> {
        self.path.first()
    }

    /// Last vertex of the path.
    pub fn target(&self) -> Option<&V> {
        self.path.last()
    }
}

impl<V: VertexId> Graph<V> {
    /// Cheapest path from `start` to `end`.
    ///
    /// Both endpoints are validated before any work is done and a missing one
    /// yields [`GraphError::VertexNotFound`]. `Ok(None)` means both exist but
    /// `end` is unreachable.
    pub fn shortest_path(&self, start: &V, end: &V) -> GraphResult<Option<ShortestPath<V>>> {
        for endpoint in [start, end] {
            if !self.contains_vertex(endpoint) {
                return Err(GraphError::vertex_not_found(endpoint));
            }
        }

        let mut distances: HashMap<&V, f64> = HashMap::new();
        let mut previous: HashMap<&V, &V> = HashMap::new();
        let mut unvisited: IndexSet<&V> = self.vertices().collect();
        distances.insert(start, 0.0);

        while let Some(current) = Self::closest_unvisited(&unvisited, &distances) {
            unvisited.shift_remove(current);
            if current == end {
                break;
            }

            let base = distances.get(current).copied().unwrap_or(f64::INFINITY);
            for edge in self.edges(current) {
                let neighbor = edge.destination();
                if !unvisited.contains(neighbor) {
                    continue;
                }
                let candidate = base + edge.cost();
                let known = distances.get(neighbor).copied().unwrap_or(f64::INFINITY);
                if candidate < known {
                    distances.insert(neighbor, candidate);
                    previous.insert(neighbor, current);
                }
            }
        }

        let Some(&distance) = distances.get(end) else {
            debug!(?start, ?end, "no path");
            return Ok(None);
        };

        let mut path = vec![end.clone()];
        let mut cursor = end;
        while cursor != start {
            let Some(&prev) = previous.get(cursor) else {
                break;
            };
            if path.len() > self.vertex_count() {
                debug!(?start, ?end, "predecessor chain longer than vertex count");
                return Ok(None);
            }
            path.push(prev.clone());
            cursor = prev;
        }
        path.reverse();

        if path.first() != Some(start) {
            debug!(?start, ?end, "path reconstruction did not reach start");
            return Ok(None);
        }

        debug!(?start, ?end, distance, hops = path.len() - 1, "shortest path found");
        Ok(Some(ShortestPath { path, distance }))
    }

    /// Unvisited vertex with the smallest finite tentative distance.
    ///
    /// Ties go to the earliest-inserted vertex.
    fn closest_unvisited<'a>(
        unvisited: &IndexSet<&'a V>,
        distances: &HashMap<&'a V, f64>,
    ) -> Option<&'a V> {
        let mut best: Option<(&'a V, f64)> = None;
        for &vertex in unvisited {
            if let Some(&distance) = distances.get(vertex) {
                let closer = match best {
                    Some((_, current)) => distance < current,
                    None => true,
                };
                if closer {
                    best = Some((vertex, distance));
                }
            }
        }
        best.map(|(vertex, _)| vertex)
    }
}
