//! Graph Data Model
//!
//! This module implements the adjacency-list graph that every algorithm in
//! [`crate::algo`] reads from.
//!
//! # Overview
//!
//! A graph maps each vertex identifier to the list of its outgoing edges:
//!
//! - Vertices are plain identifiers; there is no separate vertex object
//! - Edges are immutable values carrying a source, a destination and an
//!   optional weight
//!
//! # Design Decisions
//!
//! 1. The adjacency map is insertion-ordered, so vertex enumeration (and
//!    therefore algorithm output on ties) is deterministic across runs.
//!
//! 2. Undirected graphs store each edge twice. Lookups and traversals then
//!    treat both kinds identically; only the mutators and `edge_count` know
//!    the difference.
//!
//! 3. Inserting an edge creates missing endpoints. Read operations on an
//!    unknown vertex never create it and behave as "no such vertex".

mod adjacency;
mod edge;
mod vertex;

pub use adjacency::Graph;
pub use edge::{Edge, DEFAULT_WEIGHT};
pub use vertex::{GraphKind, VertexId};
