//! # transit-catalogue
//!
//! Bus network catalogue with fastest-itinerary routing.
//!
//! ## Features
//!
//! - **Catalogue**: Stops, routes and road distances with per-route and
//!   per-stop statistics
//! - **Routing graph**: Waiting and riding become separate weighted edges, two
//!   vertices per stop
//! - **Shortest paths**: Dijkstra with deterministic tie-breaking
//! - **Itineraries**: Paths translated back into wait and ride legs
//!
//! ## Example
//!
//! ```
//! use transit_catalogue::prelude::*;
//! use geo::Point;
//!
//! let mut catalogue = TransitCatalogue::new();
//! catalogue.add_stop("A", Point::new(0.0, 0.0)).unwrap();
//! catalogue.add_stop("B", Point::new(0.0, 1.0)).unwrap();
//! catalogue.add_stop("C", Point::new(0.0, 2.0)).unwrap();
//! catalogue.set_road_distance("A", "B", 1000).unwrap();
//! catalogue.set_road_distance("B", "C", 2000).unwrap();
//! catalogue.add_route("1", &["A", "B", "C"], false).unwrap();
//!
//! // 5 minutes waiting per boarding, buses at 60 km/h
//! let settings = RoutingSettings::new(5, 60.0).unwrap();
//! let router = TransitRouter::new(&catalogue, settings).unwrap();
//!
//! let itinerary = router.route("A", "C").unwrap().unwrap();
//! assert_eq!(itinerary.total_time, 8.0);
//! assert_eq!(itinerary.legs.len(), 2);
//! ```

pub mod graph;
pub mod handler;
pub mod identifiers;
pub mod models;
pub mod provider;
pub mod routing;
pub mod spatial;

// Re-exports for convenience
pub mod prelude {
    pub use crate::handler::RequestHandler;
    pub use crate::identifiers::*;
    pub use crate::models::{traits::*, types::*};
    pub use crate::provider::{
        static_provider::TransitCatalogue,
        RouteImpl, StopImpl,
    };
    pub use crate::routing::{Itinerary, Leg, RoutingSettings, TransitRouter};
}

pub use prelude::*;
