//! Core graph data structures for graphpack.
//!
//! A graph enters the codec as a flat list of weighted, undirected edges
//! (`from to weight` triples). This crate parses that list and builds the
//! symmetric adjacency structure the encoder consumes:
//!
//! - [`edge`]: vertex ids, weights, adjacency entries and edge-list triples
//! - [`adjacency`]: the owned vertex -> ordered adjacency set map
//! - [`loader`]: the whitespace-separated text edge-list parser

pub mod adjacency;
pub mod edge;
pub mod error;
pub mod loader;

pub use adjacency::AdjacencyGraph;
pub use edge::{symmetrized, Edge, Triple, VertexId, Weight};
pub use error::{LoadError, Result};
pub use loader::{load_graph, parse_edge_list, read_graph};
