//! Graph Algorithms
//!
//! Every algorithm is a read-only method on [`Graph`](crate::graph::Graph)
//! and returns a fresh value; none of them mutate the graph.
//!
//! | Method              | Result                             | Errors                                  |
//! |---------------------|------------------------------------|-----------------------------------------|
//! | `bfs`, `dfs`        | visitation order, empty if unknown | none                                    |
//! | `shortest_path`     | `Option<ShortestPath>`             | `VertexNotFound`                        |
//! | `has_cycle`         | `bool`                             | none                                    |
//! | `topological_sort`  | vertex order                       | `UnsupportedOperation`, `CycleDetected` |
//!
//! Depth-first algorithms run on explicit stacks, so very deep graphs cannot
//! exhaust the call stack.

mod cycle;
mod shortest_path;
mod topo;
mod traversal;

pub use shortest_path::ShortestPath;
