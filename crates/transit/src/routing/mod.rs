//! Fastest-itinerary routing over a transit network.

pub mod builder;
pub mod router;
pub mod settings;

pub use builder::{EdgeLabel, RouteGraph, RouteGraphBuilder, StopVertices};
pub use router::{Itinerary, Leg, TransitRouter};
pub use settings::RoutingSettings;
