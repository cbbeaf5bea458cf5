//! Directed weighted graph and single-pair shortest paths.
//!
//! The graph knows nothing about transit: every edge carries an opaque label
//! chosen by whoever builds it.

pub mod dijkstra;
pub mod directed;

pub use dijkstra::{Path, ShortestPathEngine};
pub use directed::{DirectedWeightedGraph, Edge, EdgeId, GraphError, VertexId};
