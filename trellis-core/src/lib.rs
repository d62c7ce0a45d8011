//! Trellis Core
//!
//! This crate provides an in-memory graph and the classical algorithms that
//! run over it. It implements:
//!
//! - Directed and undirected adjacency-list graphs with optional edge weights
//! - Breadth-first and depth-first traversal
//! - Single-source shortest path (Dijkstra-style relaxation)
//! - Cycle detection and topological ordering
//!
//! The whole structure lives in memory and every operation runs synchronously
//! on the calling thread. Algorithms only read the graph, so several may run
//! at once against a graph nobody is mutating.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - `graph`: Vertex, edge and graph types plus their mutators
//! - `algo`: Traversal, path and ordering algorithms as methods on `Graph`
//! - `error`: The error conditions algorithms report
//!
//! Log events are emitted through `tracing`; install a subscriber to see them.
//!
//! # Example
//!
//! ```rust
//! use trellis_core::Graph;
//!
//! let mut graph = Graph::directed();
//! graph.add_edge("A", "B", Some(4.0));
//! graph.add_edge("A", "C", Some(2.0));
//! graph.add_edge("C", "B", Some(1.0));
//! graph.add_edge("B", "D", Some(5.0));
//! graph.add_edge("C", "D", Some(8.0));
//!
//! let route = graph.shortest_path(&"A", &"D").unwrap().unwrap();
//! assert_eq!(route.path, vec!["A", "C", "B", "D"]);
//! assert_eq!(route.distance, 8.0);
//!
//! assert!(!graph.has_cycle());
//! let order = graph.topological_sort().unwrap();
//! assert_eq!(order.first(), Some(&"A"));
//! ```

pub mod algo;
pub mod error;
pub mod graph;

pub use algo::ShortestPath;
pub use error::{GraphError, GraphResult};
pub use graph::{Edge, Graph, GraphKind, VertexId};
