//! Breadth-First and Depth-First Traversal
//!
//! Both traversals return every vertex reachable from `start` exactly once, in
//! visitation order. Neighbors are explored in adjacency-list order, which is
//! edge insertion order. An unknown `start` yields an empty order.

use std::collections::{HashSet, VecDeque};

use tracing::debug;

use crate::graph::{Graph, VertexId};

impl<V: VertexId> Graph<V> {
    /// Breadth-first visitation order from `start`.
    pub fn bfs(&self, start: &V) -> Vec<V> {
        let mut order = Vec::new();
        if !self.contains_vertex(start) {
            return order;
        }

        let mut visited: HashSet<&V> = HashSet::new();
        let mut queue: VecDeque<&V> = VecDeque::new();
        queue.push_back(start);

        while let Some(vertex) = queue.pop_front() {
            if !visited.insert(vertex) {
                continue;
            }
            order.push(vertex.clone());

            for neighbor in self.neighbors(vertex) {
                if !visited.contains(neighbor) {
                    queue.push_back(neighbor);
                }
            }
        }

        debug!(?start, visited = order.len(), "bfs complete");
        order
    }

    /// Depth-first pre-order from `start`.
    ///
    /// Uses an explicit stack, so depth is bounded by heap rather than call
    /// stack. Neighbors are pushed in reverse so the first neighbor is
    /// explored first, matching the recursive formulation.
    pub fn dfs(&self, start: &V) -> Vec<V> {
        let mut order = Vec::new();
        if !self.contains_vertex(start) {
            return order;
        }

        let mut visited: HashSet<&V> = HashSet::new();
        let mut stack: Vec<&V> = vec![start];

        while let Some(vertex) = stack.pop() {
            if !visited.insert(vertex) {
                continue;
            }
            order.push(vertex.clone());

            let edges = self.edges(vertex);
            for edge in edges.iter().rev() {
                if !visited.contains(edge.destination()) {
                    stack.push(edge.destination());
                }
            }
        }

        debug!(?start, visited = order.len(), "dfs complete");
        order
    }
}
