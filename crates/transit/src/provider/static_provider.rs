//! In-memory transit catalogue.
//!
//! Stores stops, routes and road distances as they are inserted and answers
//! lookups and per-route/per-stop statistics. It is the network the router is
//! built from.

use std::collections::{BTreeSet, HashMap, HashSet};
use std::sync::Arc;

use geo::Point;

use crate::identifiers::*;
use crate::models::{traits::*, types::*};
use crate::spatial::queries::great_circle_length;

// ============================================================================
// Concrete Implementations of Traits
// ============================================================================

#[derive(Clone, Debug)]
pub struct StopImpl {
    pub id: StopIdentifier,
    pub location: Point,
}

impl TransitStop for StopImpl {
    fn id(&self) -> &StopIdentifier {
        &self.id
    }

    fn location(&self) -> Point {
        self.location
    }
}

#[derive(Clone, Debug)]
pub struct RouteImpl {
    pub id: RouteIdentifier,
    pub stops: Vec<StopIdentifier>,
    pub is_roundtrip: bool,
}

impl RouteImpl {
    /// Stops in the order a bus visits them over one full run
    ///
    /// Non-roundtrip routes turn around at the last stop, so `A, B, C` runs as
    /// `A, B, C, B, A`.
    pub fn full_run(&self) -> Vec<StopIdentifier> {
        let mut run = self.stops.clone();
        if !self.is_roundtrip {
            run.extend(self.stops.iter().rev().skip(1).cloned());
        }
        run
    }
}

impl Route for RouteImpl {
    fn id(&self) -> &RouteIdentifier {
        &self.id
    }

    fn stops(&self) -> &[StopIdentifier] {
        &self.stops
    }

    fn is_roundtrip(&self) -> bool {
        self.is_roundtrip
    }
}

// ============================================================================
// Catalogue
// ============================================================================

/// In-memory transit network
///
/// Stops and routes are enumerated in insertion order.
#[derive(Clone, Debug, Default)]
pub struct TransitCatalogue {
    // Core data
    stops: Vec<Arc<StopImpl>>,
    routes: Vec<Arc<RouteImpl>>,

    // Lookup maps
    stop_map: HashMap<StopIdentifier, Arc<StopImpl>>,
    route_map: HashMap<RouteIdentifier, Arc<RouteImpl>>,
    stop_routes: HashMap<StopIdentifier, BTreeSet<RouteIdentifier>>,

    // Road distances in meters, keyed by direction
    road_distances: HashMap<(StopIdentifier, StopIdentifier), u32>,
}

impl TransitCatalogue {
    /// Create a new empty catalogue
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_stop(&mut self, name: impl AsRef<str>, location: Point) -> Result<()> {
        let id = StopIdentifier::new(name);
        if self.stop_map.contains_key(&id) {
            return Err(TransitError::InvalidData(format!("Duplicate stop: {}", id)));
        }

        let stop = Arc::new(StopImpl {
            id: id.clone(),
            location,
        });
        self.stops.push(stop.clone());
        self.stop_map.insert(id, stop);
        Ok(())
    }

    /// Record the road distance from `from` to `to`
    ///
    /// Only this direction is stored. Lookups through
    /// [`TransitNetwork::distance_between`] fall back to the opposite
    /// direction when one is missing.
    pub fn set_road_distance(&mut self, from: &str, to: &str, meters: u32) -> Result<()> {
        let from = self.stop_id(from)?;
        let to = self.stop_id(to)?;
        self.road_distances.insert((from, to), meters);
        Ok(())
    }

    pub fn add_route<S: AsRef<str>>(
        &mut self,
        name: impl AsRef<str>,
        stops: &[S],
        is_roundtrip: bool,
    ) -> Result<()> {
        let id = RouteIdentifier::new(name);
        if self.route_map.contains_key(&id) {
            return Err(TransitError::InvalidData(format!("Duplicate route: {}", id)));
        }
        if stops.len() < 2 {
            return Err(TransitError::InvalidData(format!(
                "Route {} needs at least two stops, got {}",
                id,
                stops.len()
            )));
        }

        let stops = stops
            .iter()
            .map(|name| self.stop_id(name.as_ref()))
            .collect::<Result<Vec<_>>>()?;

        for stop in &stops {
            self.stop_routes
                .entry(stop.clone())
                .or_default()
                .insert(id.clone());
        }

        let route = Arc::new(RouteImpl {
            id: id.clone(),
            stops,
            is_roundtrip,
        });
        self.routes.push(route.clone());
        self.route_map.insert(id, route);
        Ok(())
    }

    // ---- Lookups ----

    pub fn get_stop(&self, name: &str) -> Option<Arc<StopImpl>> {
        self.stop_map.get(name).cloned()
    }

    pub fn get_route(&self, name: &str) -> Option<Arc<RouteImpl>> {
        self.route_map.get(name).cloned()
    }

    pub fn all_stops(&self) -> &[Arc<StopImpl>] {
        &self.stops
    }

    pub fn all_routes(&self) -> &[Arc<RouteImpl>] {
        &self.routes
    }

    /// Routes serving `stop`, sorted by name
    pub fn routes_through(&self, stop: &str) -> Vec<RouteIdentifier> {
        self.stop_routes
            .get(stop)
            .map(|routes| routes.iter().cloned().collect())
            .unwrap_or_default()
    }

    // ---- Statistics ----

    /// Statistics for a route, or `None` if there is no such route
    pub fn route_stats(&self, name: &str) -> Result<Option<RouteStats>> {
        let Some(route) = self.route_map.get(name) else {
            return Ok(None);
        };

        let run = route.full_run();
        let unique_stop_count = run.iter().collect::<HashSet<_>>().len();

        let mut route_length = 0u64;
        for pair in run.windows(2) {
            let meters = self.distance_between(&pair[0], &pair[1]).ok_or_else(|| {
                TransitError::MissingDistance {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                }
            })?;
            route_length += u64::from(meters);
        }

        let points = run
            .iter()
            .map(|stop| {
                self.stop_map
                    .get(stop)
                    .map(|s| s.location)
                    .ok_or_else(|| TransitError::UnknownStop(stop.clone()))
            })
            .collect::<Result<Vec<_>>>()?;
        let geographic_length = great_circle_length(&points);

        // Every stop in one place: road and straight line agree trivially
        let curvature = if geographic_length > 0.0 {
            route_length as f64 / geographic_length
        } else {
            1.0
        };

        Ok(Some(RouteStats {
            name: route.id.clone(),
            stop_count: run.len(),
            unique_stop_count,
            route_length,
            curvature,
        }))
    }

    /// Routes serving a stop, or `None` if there is no such stop
    pub fn stop_stats(&self, name: &str) -> Option<StopStats> {
        let stop = self.stop_map.get(name)?;
        Some(StopStats {
            name: stop.id.clone(),
            routes: self.routes_through(name),
        })
    }

    fn stop_id(&self, name: &str) -> Result<StopIdentifier> {
        self.stop_map
            .get(name)
            .map(|stop| stop.id.clone())
            .ok_or_else(|| TransitError::UnknownStop(StopIdentifier::new(name)))
    }
}

impl TransitNetwork for TransitCatalogue {
    fn stops(&self) -> Vec<Arc<dyn TransitStop>> {
        self.stops
            .iter()
            .map(|s| s.clone() as Arc<dyn TransitStop>)
            .collect()
    }

    fn routes(&self) -> Vec<Arc<dyn Route>> {
        self.routes
            .iter()
            .map(|r| r.clone() as Arc<dyn Route>)
            .collect()
    }

    fn road_distance(&self, from: &StopIdentifier, to: &StopIdentifier) -> Option<u32> {
        self.road_distances
            .get(&(from.clone(), to.clone()))
            .copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use crate::spatial::queries::haversine_distance;

    fn stop_points() -> [(&'static str, Point); 4] {
        [
            ("Tolstopaltsevo", Point::new(37.20829, 55.611087)),
            ("Marushkino", Point::new(37.209755, 55.595884)),
            ("Rasskazovka", Point::new(37.333324, 55.632761)),
            ("Biryusinka", Point::new(37.64839, 55.581065)),
        ]
    }

    fn catalogue() -> TransitCatalogue {
        let mut catalogue = TransitCatalogue::new();
        for (name, point) in stop_points() {
            catalogue.add_stop(name, point).unwrap();
        }
        catalogue.set_road_distance("Tolstopaltsevo", "Marushkino", 3900).unwrap();
        catalogue.set_road_distance("Marushkino", "Rasskazovka", 9900).unwrap();
        catalogue.set_road_distance("Rasskazovka", "Marushkino", 9500).unwrap();
        catalogue
            .add_route("750", &["Tolstopaltsevo", "Marushkino", "Rasskazovka"], false)
            .unwrap();
        catalogue
    }

    #[test]
    fn test_empty_catalogue() {
        let catalogue = TransitCatalogue::new();
        assert!(catalogue.all_stops().is_empty());
        assert!(catalogue.all_routes().is_empty());
        assert!(catalogue.stops().is_empty());
    }

    #[test]
    fn test_lookups_preserve_insertion_order() {
        let catalogue = catalogue();

        let stops = catalogue.stops();
        let names: Vec<&str> = stops.iter().map(|s| s.id().as_str()).collect();
        assert_eq!(names, vec!["Tolstopaltsevo", "Marushkino", "Rasskazovka", "Biryusinka"]);

        let stop = catalogue.get_stop("Marushkino").unwrap();
        assert_eq!(stop.location, Point::new(37.209755, 55.595884));
        assert!(catalogue.get_stop("Nowhere").is_none());
        assert!(catalogue.get_route("750").is_some());
        assert!(catalogue.get_route("751").is_none());
    }

    #[test]
    fn test_rejects_bad_input() {
        let mut catalogue = catalogue();

        assert!(matches!(
            catalogue.add_stop("Marushkino", Point::new(0.0, 0.0)),
            Err(TransitError::InvalidData(_))
        ));
        assert!(matches!(
            catalogue.add_route("750", &["Marushkino", "Rasskazovka"], true),
            Err(TransitError::InvalidData(_))
        ));
        assert!(matches!(
            catalogue.add_route("1", &["Marushkino"], true),
            Err(TransitError::InvalidData(_))
        ));
        assert!(matches!(
            catalogue.add_route("2", &["Marushkino", "Nowhere"], true),
            Err(TransitError::UnknownStop(_))
        ));
        assert!(matches!(
            catalogue.set_road_distance("Nowhere", "Marushkino", 10),
            Err(TransitError::UnknownStop(_))
        ));
        // Failed inserts leave no trace
        assert!(catalogue.get_route("2").is_none());
        assert_eq!(catalogue.routes_through("Marushkino"), vec![RouteIdentifier::new("750")]);
    }

    #[test]
    fn test_distance_fallback() {
        let catalogue = catalogue();
        let t = StopIdentifier::new("Tolstopaltsevo");
        let m = StopIdentifier::new("Marushkino");
        let r = StopIdentifier::new("Rasskazovka");
        let b = StopIdentifier::new("Biryusinka");

        assert_eq!(catalogue.road_distance(&m, &t), None);
        assert_eq!(catalogue.distance_between(&m, &t), Some(3900));
        // Both directions given: each is used as is
        assert_eq!(catalogue.distance_between(&m, &r), Some(9900));
        assert_eq!(catalogue.distance_between(&r, &m), Some(9500));
        assert_eq!(catalogue.distance_between(&t, &b), None);
    }

    #[test]
    fn test_linear_route_stats() {
        let catalogue = catalogue();
        let stats = catalogue.route_stats("750").unwrap().unwrap();

        assert_eq!(stats.name.as_str(), "750");
        assert_eq!(stats.stop_count, 5);
        assert_eq!(stats.unique_stop_count, 3);
        assert_eq!(stats.route_length, 3900 + 9900 + 9500 + 3900);

        let [(_, t), (_, m), (_, r), _] = stop_points();
        let geographic = 2.0 * (haversine_distance(t, m) + haversine_distance(m, r));
        assert_relative_eq!(stats.curvature, 27200.0 / geographic, max_relative = 1e-9);
    }

    #[test]
    fn test_roundtrip_route_stats() {
        let mut catalogue = catalogue();
        catalogue.set_road_distance("Rasskazovka", "Biryusinka", 20000).unwrap();
        catalogue.set_road_distance("Biryusinka", "Tolstopaltsevo", 30000).unwrap();
        catalogue
            .add_route(
                "256",
                &["Tolstopaltsevo", "Rasskazovka", "Biryusinka", "Tolstopaltsevo"],
                true,
            )
            .unwrap();

        // Tolstopaltsevo -> Rasskazovka has no distance in either direction
        assert!(matches!(
            catalogue.route_stats("256"),
            Err(TransitError::MissingDistance { .. })
        ));

        catalogue.set_road_distance("Rasskazovka", "Tolstopaltsevo", 10000).unwrap();
        let stats = catalogue.route_stats("256").unwrap().unwrap();
        assert_eq!(stats.stop_count, 4);
        assert_eq!(stats.unique_stop_count, 3);
        assert_eq!(stats.route_length, 60000);
        assert!(stats.curvature > 1.0);
    }

    #[test]
    fn test_unknown_route_stats() {
        assert_eq!(catalogue().route_stats("999").unwrap(), None);
    }

    #[test]
    fn test_stop_stats() {
        let mut catalogue = catalogue();
        catalogue.set_road_distance("Biryusinka", "Marushkino", 100).unwrap();
        catalogue.add_route("828", &["Biryusinka", "Marushkino"], false).unwrap();
        catalogue.add_route("11", &["Marushkino", "Biryusinka"], true).unwrap();

        let stats = catalogue.stop_stats("Marushkino").unwrap();
        let routes: Vec<&str> = stats.routes.iter().map(|r| r.as_str()).collect();
        assert_eq!(routes, vec!["11", "750", "828"]);

        let empty = TransitCatalogue::new();
        assert!(empty.stop_stats("Marushkino").is_none());

        let mut lonely = TransitCatalogue::new();
        lonely.add_stop("Prazhskaya", Point::new(37.6, 55.6)).unwrap();
        assert!(lonely.stop_stats("Prazhskaya").unwrap().routes.is_empty());
    }

    #[test]
    fn test_full_run() {
        let route = catalogue().get_route("750").unwrap();
        let run = route.full_run();
        let run: Vec<&str> = run.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            run,
            vec!["Tolstopaltsevo", "Marushkino", "Rasskazovka", "Marushkino", "Tolstopaltsevo"]
        );
    }
}
