//! Builds the routing graph from a transit network.
//!
//! ## Vertex Layout
//!
//! Every stop gets two vertices. For the stop at enumeration position `i`:
//!
//! - `2i` is "waiting at the stop". Queries start and end here.
//! - `2i + 1` is "ready to board". It is reached only through the stop's
//!   wait edge, whose weight is the configured wait time.
//!
//! Ride edges leave a "ready to board" vertex and enter a "waiting" vertex.
//! Since a ride edge exists for every pair of stops along a traversal, staying
//! on the same bus through intermediate stops never pays the wait again, while
//! every change of bus passes through exactly one wait edge.

use std::collections::HashMap;

use tracing::debug;

use crate::graph::{DirectedWeightedGraph, VertexId};
use crate::identifiers::*;
use crate::models::traits::{Route, TransitNetwork, TransitStop};
use crate::models::types::{Result, TransitError};
use crate::routing::settings::RoutingSettings;

/// What an edge of the routing graph stands for
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EdgeLabel {
    /// Waiting for a bus at `stop`
    Wait { stop: StopIdentifier },
    /// Riding `route` for `span_count` stops without getting off
    Ride {
        route: RouteIdentifier,
        span_count: usize,
    },
}

/// The two vertices standing for a single stop
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StopVertices {
    pub wait: VertexId,
    pub board: VertexId,
}

impl StopVertices {
    fn at(position: usize) -> Self {
        Self {
            wait: 2 * position,
            board: 2 * position + 1,
        }
    }
}

/// A fully built routing graph together with its stop-to-vertex mapping
#[derive(Debug, Clone)]
pub struct RouteGraph {
    pub graph: DirectedWeightedGraph<EdgeLabel>,
    pub stop_vertices: HashMap<StopIdentifier, StopVertices>,
}

pub struct RouteGraphBuilder<'a, N: TransitNetwork + ?Sized> {
    network: &'a N,
    settings: RoutingSettings,
}

impl<'a, N: TransitNetwork + ?Sized> RouteGraphBuilder<'a, N> {
    pub fn new(network: &'a N, settings: RoutingSettings) -> Result<Self> {
        settings.validate()?;
        Ok(Self { network, settings })
    }

    /// Build the whole graph
    ///
    /// Fails without a partial result if any consecutive pair of stops on a
    /// traversal has no road distance in either direction.
    pub fn build(&self) -> Result<RouteGraph> {
        let stops = self.network.stops();
        let mut graph = DirectedWeightedGraph::new(stops.len() * 2);
        let mut stop_vertices = HashMap::with_capacity(stops.len());

        for (position, stop) in stops.iter().enumerate() {
            let vertices = StopVertices::at(position);
            graph.add_edge(
                vertices.wait,
                vertices.board,
                self.settings.wait_minutes(),
                EdgeLabel::Wait {
                    stop: stop.id().clone(),
                },
            )?;
            stop_vertices.insert(stop.id().clone(), vertices);
        }

        let routes = self.network.routes();
        for route in &routes {
            for traversal in route.traversals() {
                self.add_traversal(&mut graph, &stop_vertices, route.id(), &traversal)?;
            }
        }

        debug!(
            stops = stops.len(),
            routes = routes.len(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "Built routing graph"
        );

        Ok(RouteGraph {
            graph,
            stop_vertices,
        })
    }

    fn add_traversal(
        &self,
        graph: &mut DirectedWeightedGraph<EdgeLabel>,
        stop_vertices: &HashMap<StopIdentifier, StopVertices>,
        route: &RouteIdentifier,
        stops: &[StopIdentifier],
    ) -> Result<()> {
        let vertices = stops
            .iter()
            .map(|stop| {
                stop_vertices
                    .get(stop)
                    .copied()
                    .ok_or_else(|| TransitError::UnknownStop(stop.clone()))
            })
            .collect::<Result<Vec<_>>>()?;

        // hops[k] is the road distance from stops[k] to stops[k + 1]
        let hops = stops
            .windows(2)
            .map(|pair| {
                self.network
                    .distance_between(&pair[0], &pair[1])
                    .map(u64::from)
                    .ok_or_else(|| TransitError::MissingDistance {
                        from: pair[0].clone(),
                        to: pair[1].clone(),
                    })
            })
            .collect::<Result<Vec<_>>>()?;

        for start in 0..stops.len() {
            let mut meters = 0;
            for end in start + 1..stops.len() {
                meters += hops[end - 1];
                graph.add_edge(
                    vertices[start].board,
                    vertices[end].wait,
                    self.settings.ride_minutes(meters),
                    EdgeLabel::Ride {
                        route: route.clone(),
                        span_count: end - start,
                    },
                )?;
            }
        }

        Ok(())
    }
}
