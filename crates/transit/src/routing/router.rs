//! Fastest-itinerary queries between two stops.

use std::collections::HashMap;

use tracing::info;

use crate::graph::ShortestPathEngine;
use crate::identifiers::*;
use crate::models::traits::TransitNetwork;
use crate::models::types::{Result, TransitError};
use crate::routing::builder::{EdgeLabel, RouteGraph, RouteGraphBuilder, StopVertices};
use crate::routing::settings::RoutingSettings;

/// A single step of an itinerary. Times are in minutes.
#[derive(Clone, Debug, PartialEq)]
pub enum Leg {
    Wait {
        stop: StopIdentifier,
        time: f64,
    },
    Ride {
        route: RouteIdentifier,
        span_count: usize,
        time: f64,
    },
}

impl Leg {
    pub fn time(&self) -> f64 {
        match self {
            Leg::Wait { time, .. } | Leg::Ride { time, .. } => *time,
        }
    }
}

/// Ordered legs of a trip and their total time in minutes
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Itinerary {
    pub total_time: f64,
    pub legs: Vec<Leg>,
}

/// Answers routing queries over a graph built once from a network
///
/// The graph is built eagerly by [`TransitRouter::new`] and never changes
/// afterwards, so a router can be shared between threads freely.
#[derive(Debug, Clone)]
pub struct TransitRouter {
    settings: RoutingSettings,
    engine: ShortestPathEngine<EdgeLabel>,
    stop_vertices: HashMap<StopIdentifier, StopVertices>,
}

impl TransitRouter {
    pub fn new<N: TransitNetwork + ?Sized>(network: &N, settings: RoutingSettings) -> Result<Self> {
        let RouteGraph {
            graph,
            stop_vertices,
        } = RouteGraphBuilder::new(network, settings)?.build()?;

        info!(
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "Transit router ready"
        );

        Ok(Self {
            settings,
            engine: ShortestPathEngine::new(graph),
            stop_vertices,
        })
    }

    pub fn settings(&self) -> &RoutingSettings {
        &self.settings
    }

    /// Fastest itinerary from `from` to `to`
    ///
    /// Returns `Ok(None)` when no sequence of rides connects the two stops and
    /// `Err(UnknownStop)` when either name is not a stop of the network.
    pub fn route(&self, from: &str, to: &str) -> Result<Option<Itinerary>> {
        let source = self.vertices_of(from)?;
        let target = self.vertices_of(to)?;

        if from == to {
            return Ok(Some(Itinerary::default()));
        }

        let Some(path) = self.engine.find_path(source.wait, target.wait) else {
            return Ok(None);
        };

        let graph = self.engine.graph();
        let legs = path
            .edges
            .iter()
            .map(|&edge_id| {
                let edge = graph.edge(edge_id)?;
                Ok(match &edge.label {
                    EdgeLabel::Wait { stop } => Leg::Wait {
                        stop: stop.clone(),
                        time: edge.weight,
                    },
                    EdgeLabel::Ride { route, span_count } => Leg::Ride {
                        route: route.clone(),
                        span_count: *span_count,
                        time: edge.weight,
                    },
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Some(Itinerary {
            total_time: path.weight,
            legs,
        }))
    }

    fn vertices_of(&self, stop: &str) -> Result<StopVertices> {
        self.stop_vertices
            .get(stop)
            .copied()
            .ok_or_else(|| TransitError::UnknownStop(StopIdentifier::new(stop)))
    }
}
