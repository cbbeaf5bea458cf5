use anyhow::{Context, Result};
use geo::Point;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::io::Read;
use transit_catalogue::prelude::*;

/// Top-level input document
#[derive(Debug, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub base_requests: Vec<BaseRequest>,
    pub routing_settings: Option<RoutingSettings>,
    #[serde(default)]
    pub stat_requests: Vec<StatRequest>,
}

/// Network description entries
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum BaseRequest {
    Stop {
        name: String,
        latitude: f64,
        longitude: f64,
        /// Road distances in meters to neighbouring stops
        #[serde(default)]
        road_distances: BTreeMap<String, u32>,
    },
    Bus {
        name: String,
        stops: Vec<String>,
        is_roundtrip: bool,
    },
}

/// Queries answered against the network
#[derive(Debug, Deserialize)]
#[serde(tag = "type")]
pub enum StatRequest {
    Bus { id: i64, name: String },
    Stop { id: i64, name: String },
    Route { id: i64, from: String, to: String },
    /// Map rendering, answered as "not found"
    Map { id: i64 },
}

/// Parse a document from any reader
pub fn read_document(reader: impl Read) -> Result<Document> {
    serde_json::from_reader(reader).context("Failed to parse input document")
}

/// Build a catalogue from base requests
///
/// Stops are inserted first, then road distances, then buses, so entries may
/// refer to stops that appear later in the list.
pub fn build_catalogue(requests: &[BaseRequest]) -> Result<TransitCatalogue> {
    let mut catalogue = TransitCatalogue::new();

    for request in requests {
        if let BaseRequest::Stop {
            name,
            latitude,
            longitude,
            ..
        } = request
        {
            catalogue
                .add_stop(name, Point::new(*longitude, *latitude))
                .with_context(|| format!("Failed to add stop {}", name))?;
        }
    }

    for request in requests {
        if let BaseRequest::Stop {
            name,
            road_distances,
            ..
        } = request
        {
            for (neighbour, meters) in road_distances {
                catalogue
                    .set_road_distance(name, neighbour, *meters)
                    .with_context(|| format!("Failed to set distance {} -> {}", name, neighbour))?;
            }
        }
    }

    for request in requests {
        if let BaseRequest::Bus {
            name,
            stops,
            is_roundtrip,
        } = request
        {
            catalogue
                .add_route(name, stops.as_slice(), *is_roundtrip)
                .with_context(|| format!("Failed to add bus {}", name))?;
        }
    }

    log::debug!(
        "Loaded {} stops and {} buses",
        catalogue.all_stops().len(),
        catalogue.all_routes().len()
    );

    Ok(catalogue)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn document(value: serde_json::Value) -> Document {
        read_document(value.to_string().as_bytes()).unwrap()
    }

    #[test]
    fn test_parse_document() {
        let doc = document(json!({
            "base_requests": [
                {"type": "Bus", "name": "114", "stops": ["Morskoy vokzal", "Rivyerskiy most"], "is_roundtrip": false},
                {"type": "Stop", "name": "Rivyerskiy most", "latitude": 43.587795, "longitude": 39.716901,
                 "road_distances": {"Morskoy vokzal": 850}},
                {"type": "Stop", "name": "Morskoy vokzal", "latitude": 43.581969, "longitude": 39.719848}
            ],
            "routing_settings": {"bus_wait_time": 6, "bus_velocity": 40},
            "render_settings": {"width": 200},
            "stat_requests": [
                {"id": 1, "type": "Bus", "name": "114"},
                {"id": 2, "type": "Route", "from": "Morskoy vokzal", "to": "Rivyerskiy most"},
                {"id": 3, "type": "Map"}
            ]
        }));

        assert_eq!(doc.base_requests.len(), 3);
        let settings = doc.routing_settings.unwrap();
        assert_eq!(settings.bus_wait_time, 6);
        assert_eq!(settings.bus_velocity, 40.0);
        assert!(matches!(doc.stat_requests[1], StatRequest::Route { id: 2, .. }));
        assert!(matches!(doc.stat_requests[2], StatRequest::Map { id: 3 }));
    }

    #[test]
    fn test_build_catalogue_in_dependency_order() {
        let doc = document(json!({
            "base_requests": [
                {"type": "Bus", "name": "114", "stops": ["Morskoy vokzal", "Rivyerskiy most"], "is_roundtrip": false},
                {"type": "Stop", "name": "Rivyerskiy most", "latitude": 43.587795, "longitude": 39.716901,
                 "road_distances": {"Morskoy vokzal": 850}},
                {"type": "Stop", "name": "Morskoy vokzal", "latitude": 43.581969, "longitude": 39.719848}
            ]
        }));

        let catalogue = build_catalogue(&doc.base_requests).unwrap();
        let stop = catalogue.get_stop("Morskoy vokzal").unwrap();
        assert_eq!(stop.location.x(), 39.719848);
        assert_eq!(stop.location.y(), 43.581969);

        let stats = catalogue.route_stats("114").unwrap().unwrap();
        assert_eq!(stats.route_length, 1700);
        assert!(doc.routing_settings.is_none());
        assert!(doc.stat_requests.is_empty());
    }

    #[test]
    fn test_unknown_stop_in_bus_fails() {
        let doc = document(json!({
            "base_requests": [
                {"type": "Bus", "name": "1", "stops": ["Ghost", "Town"], "is_roundtrip": true}
            ]
        }));

        let err = build_catalogue(&doc.base_requests).unwrap_err();
        assert!(err.to_string().contains("Failed to add bus 1"));
    }

    #[test]
    fn test_malformed_document() {
        assert!(read_document("{\"base_requests\": 5}".as_bytes()).is_err());
    }

    #[test]
    fn test_unknown_stat_request_type_is_rejected() {
        let input = json!({"stat_requests": [{"id": 1, "type": "Timetable"}]});
        assert!(read_document(input.to_string().as_bytes()).is_err());
    }
}
