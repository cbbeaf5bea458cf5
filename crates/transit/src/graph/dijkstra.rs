//! Single-pair shortest paths over a [`DirectedWeightedGraph`].

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use super::directed::{DirectedWeightedGraph, EdgeId, VertexId};

/// A shortest path: total weight and the traversed edges in order
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    pub weight: f64,
    pub edges: Vec<EdgeId>,
}

/// Heap entry ordered so that `BinaryHeap` pops the smallest cost first.
/// Equal costs pop in push order.
#[derive(Debug)]
struct SmallestHolder {
    cost: f64,
    sequence: usize,
    vertex: VertexId,
}

impl PartialEq for SmallestHolder {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for SmallestHolder {}

impl PartialOrd for SmallestHolder {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SmallestHolder {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Dijkstra search over a finished graph
///
/// The engine owns the graph it searches, so it can be built once and queried
/// any number of times. Queries never mutate it.
#[derive(Debug, Clone)]
pub struct ShortestPathEngine<L> {
    graph: DirectedWeightedGraph<L>,
}

impl<L> ShortestPathEngine<L> {
    pub fn new(graph: DirectedWeightedGraph<L>) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &DirectedWeightedGraph<L> {
        &self.graph
    }

    /// Cheapest path from `source` to `target`, or `None` when `target` cannot
    /// be reached (or either vertex is outside the graph).
    ///
    /// Among equally cheap paths the one discovered first wins, which depends
    /// only on edge insertion order.
    pub fn find_path(&self, source: VertexId, target: VertexId) -> Option<Path> {
        let vertex_count = self.graph.vertex_count();
        if source >= vertex_count || target >= vertex_count {
            return None;
        }

        let mut distances = vec![f64::INFINITY; vertex_count];
        let mut previous: Vec<Option<EdgeId>> = vec![None; vertex_count];
        let mut settled = vec![false; vertex_count];
        let mut to_see = BinaryHeap::new();
        let mut sequence = 0;

        distances[source] = 0.0;
        to_see.push(SmallestHolder {
            cost: 0.0,
            sequence,
            vertex: source,
        });

        while let Some(SmallestHolder { cost, vertex, .. }) = to_see.pop() {
            if settled[vertex] {
                continue;
            }
            settled[vertex] = true;

            if vertex == target {
                break;
            }

            for &edge_id in self.graph.edges_from(vertex) {
                // Adjacency lists only hold ids of edges already in the graph.
                let edge = &self.graph[edge_id];
                if settled[edge.to] {
                    continue;
                }

                let new_cost = cost + edge.weight;
                if new_cost < distances[edge.to] {
                    distances[edge.to] = new_cost;
                    previous[edge.to] = Some(edge_id);
                    sequence += 1;
                    to_see.push(SmallestHolder {
                        cost: new_cost,
                        sequence,
                        vertex: edge.to,
                    });
                }
            }
        }

        if !settled[target] {
            return None;
        }

        let mut edges = Vec::new();
        let mut current = target;
        while let Some(edge_id) = previous[current] {
            edges.push(edge_id);
            current = self.graph[edge_id].from;
        }
        edges.reverse();

        Some(Path {
            weight: distances[target],
            edges,
        })
    }
}
