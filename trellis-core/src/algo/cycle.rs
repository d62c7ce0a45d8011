//! Cycle Detection
//!
//! Depth-first search from every vertex, tracking the vertices on the current
//! path. Reaching a vertex that is still on the path is a back-edge.
//!
//! The check does not skip the edge leading back to the immediate parent. In
//! an undirected graph every stored edge has a mirror, so any graph with at
//! least one edge reports a cycle.

use std::collections::HashSet;

use tracing::debug;

use crate::graph::{Graph, VertexId};

/// One level of the explicit DFS stack: a vertex and the index of the next
/// outgoing edge to examine.
struct Frame<'a, V> {
    vertex: &'a V,
    next_edge: usize,
}

impl<V: VertexId> Graph<V> {
    /// Whether the graph contains a cycle.
    pub fn has_cycle(&self) -> bool {
        let mut visited: HashSet<&V> = HashSet::new();
        let mut on_path: HashSet<&V> = HashSet::new();

        for root in self.vertices() {
            if visited.contains(root) {
                continue;
            }
            if self.back_edge_from(root, &mut visited, &mut on_path) {
                debug!(?root, "cycle detected");
                return true;
            }
        }

        debug!(vertices = visited.len(), "graph is acyclic");
        false
    }

    fn back_edge_from<'a>(
        &'a self,
        root: &'a V,
        visited: &mut HashSet<&'a V>,
        on_path: &mut HashSet<&'a V>,
    ) -> bool {
        visited.insert(root);
        on_path.insert(root);
        let mut stack = vec![Frame {
            vertex: root,
            next_edge: 0,
        }];

        while let Some(frame) = stack.last_mut() {
            let Some(edge) = self.edges(frame.vertex).get(frame.next_edge) else {
                on_path.remove(frame.vertex);
                stack.pop();
                continue;
            };
            frame.next_edge += 1;

            let neighbor = edge.destination();
            if on_path.contains(neighbor) {
                return true;
            }
            if visited.insert(neighbor) {
                on_path.insert(neighbor);
                stack.push(Frame {
                    vertex: neighbor,
                    next_edge: 0,
                });
            }
        }

        false
    }
}

#[cfg(test)]
mod tests {
    use crate::graph::Graph;

    #[test]
    fn empty_graph_is_acyclic() {
        let graph: Graph<u8> = Graph::directed();
        assert!(!graph.has_cycle());
    }

    #[test]
    fn closing_a_chain_creates_a_cycle() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2, None);
        graph.add_edge(2, 3, None);
        assert!(!graph.has_cycle());

        graph.add_edge(3, 1, None);
        assert!(graph.has_cycle());
    }

    #[test]
    fn diamond_is_not_a_cycle() {
        let mut graph = Graph::directed();
        graph.add_edge('a', 'b', None);
        graph.add_edge('a', 'c', None);
        graph.add_edge('b', 'd', None);
        graph.add_edge('c', 'd', None);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let mut graph = Graph::directed();
        graph.add_vertex(1);
        graph.add_edge(2, 2, None);
        assert!(graph.has_cycle());
    }

    #[test]
    fn cycle_in_later_component_is_found() {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2, None);
        graph.add_edge(3, 4, None);
        graph.add_edge(4, 5, None);
        graph.add_edge(5, 4, None);
        assert!(graph.has_cycle());
    }

    #[test]
    fn cross_edge_into_finished_vertex_is_not_a_cycle() {
        let mut graph = Graph::directed();
        graph.add_vertex(2);
        graph.add_edge(1, 2, None);
        graph.add_edge(3, 2, None);
        assert!(!graph.has_cycle());
    }

    #[test]
    fn any_undirected_edge_reports_a_cycle() {
        let mut graph = Graph::undirected();
        graph.add_vertex(1);
        graph.add_vertex(2);
        assert!(!graph.has_cycle());

        graph.add_edge(1, 2, None);
        assert!(graph.has_cycle());
    }

    #[test]
    fn long_chain_does_not_overflow() {
        let mut graph = Graph::directed();
        for v in 0..100_000u32 {
            graph.add_edge(v, v + 1, None);
        }
        assert!(!graph.has_cycle());

        graph.add_edge(100_000, 0, None);
        assert!(graph.has_cycle());
    }
}
