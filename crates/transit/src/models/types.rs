//! Core data types for transit data.

use crate::graph::GraphError;
use crate::identifiers::*;

// ============================================================================
// Statistics
// ============================================================================

/// Summary of a single route over its full run
///
/// A non-roundtrip route is counted out and back, so `stop_count` is
/// `2n - 1` for `n` listed stops.
#[derive(Clone, Debug, PartialEq)]
pub struct RouteStats {
    pub name: RouteIdentifier,
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Road length in meters
    pub route_length: u64,
    /// Ratio of road length to great-circle length
    pub curvature: f64,
}

/// Routes serving a single stop, sorted by name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StopStats {
    pub name: StopIdentifier,
    pub routes: Vec<RouteIdentifier>,
}

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum TransitError {
    #[error("Stop not found: {0}")]
    UnknownStop(StopIdentifier),

    #[error("No road distance between {from} and {to} in either direction")]
    MissingDistance {
        from: StopIdentifier,
        to: StopIdentifier,
    },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error(transparent)]
    Graph(#[from] GraphError),
}

pub type Result<T> = std::result::Result<T, TransitError>;
