//! Core traits for transit entities.
//!
//! These traits define what the routing layer needs from a transit network.
//! The in-memory catalogue implements them, but any read-only source of stops,
//! routes and road distances can be routed over.

use geo::Point;
use std::sync::Arc;

use crate::identifiers::*;

// ============================================================================
// Core Entity Traits
// ============================================================================

/// A named stop
pub trait TransitStop: Send + Sync {
    fn id(&self) -> &StopIdentifier;

    /// Geographic position (x = longitude, y = latitude)
    fn location(&self) -> Point;
}

/// A bus route (e.g., "256", "828")
pub trait Route: Send + Sync {
    fn id(&self) -> &RouteIdentifier;

    /// Stops in the order they are served on the forward traversal
    fn stops(&self) -> &[StopIdentifier];

    /// A roundtrip route is served in one direction only. Other routes are
    /// served forward and then in reverse.
    fn is_roundtrip(&self) -> bool;

    /// Every traversal of this route: the forward stop order, followed by the
    /// reverse order unless the route is a roundtrip.
    fn traversals(&self) -> Vec<Vec<StopIdentifier>> {
        let forward = self.stops().to_vec();
        if self.is_roundtrip() {
            vec![forward]
        } else {
            let reverse = forward.iter().rev().cloned().collect();
            vec![forward, reverse]
        }
    }
}

// ============================================================================
// Network Trait
// ============================================================================

/// Read-only transit network consumed by the router
pub trait TransitNetwork: Send + Sync {
    /// All stops, in a stable enumeration order
    fn stops(&self) -> Vec<Arc<dyn TransitStop>>;

    /// All routes, in a stable enumeration order
    fn routes(&self) -> Vec<Arc<dyn Route>>;

    /// Road distance in meters, only if it was given for this direction
    fn road_distance(&self, from: &StopIdentifier, to: &StopIdentifier) -> Option<u32>;

    /// Road distance in meters, falling back to the opposite direction
    fn distance_between(&self, from: &StopIdentifier, to: &StopIdentifier) -> Option<u32> {
        self.road_distance(from, to)
            .or_else(|| self.road_distance(to, from))
    }
}
