use anyhow::{Context, Result};
use serde::Serialize;
use std::io::Write;
use transit_catalogue::prelude::*;

use crate::input::StatRequest;

const NOT_FOUND: &str = "not found";

/// One answer per stat request, in request order
#[derive(Debug, Serialize, PartialEq)]
#[serde(untagged)]
pub enum Response {
    Bus {
        request_id: i64,
        curvature: f64,
        route_length: u64,
        stop_count: usize,
        unique_stop_count: usize,
    },
    Stop {
        request_id: i64,
        buses: Vec<String>,
    },
    Route {
        request_id: i64,
        total_time: f64,
        items: Vec<Item>,
    },
    Error {
        request_id: i64,
        error_message: String,
    },
}

/// A single leg of a route response
#[derive(Debug, Serialize, PartialEq)]
#[serde(tag = "type")]
pub enum Item {
    Wait { stop_name: String, time: f64 },
    Bus { bus: String, span_count: usize, time: f64 },
}

impl From<&Leg> for Item {
    fn from(leg: &Leg) -> Self {
        match leg {
            Leg::Wait { stop, time } => Item::Wait {
                stop_name: stop.to_string(),
                time: *time,
            },
            Leg::Ride {
                route,
                span_count,
                time,
            } => Item::Bus {
                bus: route.to_string(),
                span_count: *span_count,
                time: *time,
            },
        }
    }
}

fn not_found(request_id: i64) -> Response {
    Response::Error {
        request_id,
        error_message: NOT_FOUND.to_string(),
    }
}

/// Answer every stat request
///
/// Unknown buses, stops, unroutable pairs and map requests become "not found"
/// answers, so there is exactly one response per request.
/// Inconsistent network data (a missing road distance) fails the whole run.
pub fn answer_requests(handler: &RequestHandler, requests: &[StatRequest]) -> Result<Vec<Response>> {
    let mut responses = Vec::with_capacity(requests.len());

    for request in requests {
        let response = match request {
            StatRequest::Bus { id, name } => match handler.route_stats(name)? {
                Some(stats) => Response::Bus {
                    request_id: *id,
                    curvature: stats.curvature,
                    route_length: stats.route_length,
                    stop_count: stats.stop_count,
                    unique_stop_count: stats.unique_stop_count,
                },
                None => not_found(*id),
            },
            StatRequest::Stop { id, name } => match handler.stop_stats(name) {
                Some(stats) => Response::Stop {
                    request_id: *id,
                    buses: stats.routes.iter().map(|r| r.to_string()).collect(),
                },
                None => not_found(*id),
            },
            StatRequest::Route { id, from, to } => match handler.route(from, to) {
                Ok(Some(itinerary)) => Response::Route {
                    request_id: *id,
                    total_time: itinerary.total_time,
                    items: itinerary.legs.iter().map(Item::from).collect(),
                },
                Ok(None) | Err(TransitError::UnknownStop(_)) => not_found(*id),
                Err(err) => {
                    return Err(err).with_context(|| format!("Failed to answer route request {}", id))
                }
            },
            StatRequest::Map { id } => {
                log::warn!("Map request {} cannot be rendered", id);
                not_found(*id)
            }
        };
        responses.push(response);
    }

    Ok(responses)
}

/// Write responses as a JSON array
pub fn write_responses(writer: impl Write, responses: &[Response], pretty: bool) -> Result<()> {
    if pretty {
        serde_json::to_writer_pretty(writer, responses)
    } else {
        serde_json::to_writer(writer, responses)
    }
    .context("Failed to write responses")
}
