//! Topological Ordering
//!
//! Depth-first post-order over every vertex, reversed. Roots are taken in
//! vertex insertion order; when several valid orders exist, which one is
//! returned is not part of the contract.

use std::collections::HashSet;

use tracing::debug;

use crate::error::{GraphError, GraphResult};
use crate::graph::{Graph, GraphKind, VertexId};

impl<V: VertexId> Graph<V> {
    /// A linear order in which every edge points from an earlier vertex to a
    /// later one.
    ///
    /// # Errors
    ///
    /// - [`GraphError::UnsupportedOperation`] for undirected graphs
    /// - [`GraphError::CycleDetected`] if the graph has a cycle; this is
    ///   checked in full before any ordering work
    pub fn topological_sort(&self) -> GraphResult<Vec<V>> {
        if self.kind() == GraphKind::Undirected {
            return Err(GraphError::UnsupportedOperation(
                "topological sort requires a directed graph",
            ));
        }
        if self.has_cycle() {
            return Err(GraphError::CycleDetected);
        }

        let mut visited: HashSet<&V> = HashSet::with_capacity(self.vertex_count());
        let mut postorder: Vec<&V> = Vec::with_capacity(self.vertex_count());

        for root in self.vertices() {
            if !visited.insert(root) {
                continue;
            }

            let mut stack = vec![(root, 0usize)];
            while let Some(frame) = stack.last_mut() {
                let vertex = frame.0;
                match self.edges(vertex).get(frame.1) {
                    Some(edge) => {
                        frame.1 += 1;
                        let neighbor = edge.destination();
                        if visited.insert(neighbor) {
                            stack.push((neighbor, 0));
                        }
                    }
                    None => {
                        postorder.push(vertex);
                        stack.pop();
                    }
                }
            }
        }

        debug!(vertices = postorder.len(), "topological sort complete");
        Ok(postorder.into_iter().rev().cloned().collect())
    }
}
