//! Append-only directed graph with non-negative edge weights.

use std::ops::Index;

pub type VertexId = usize;
pub type EdgeId = usize;

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GraphError {
    #[error("Vertex {vertex} out of range for graph with {vertex_count} vertices")]
    VertexOutOfRange {
        vertex: VertexId,
        vertex_count: usize,
    },

    #[error("Edge weight must be a non-negative number, got {0}")]
    InvalidWeight(f64),

    #[error("Edge not found: {0}")]
    UnknownEdge(EdgeId),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Edge<L> {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64,
    pub label: L,
}

/// Directed graph over a fixed vertex set `0..vertex_count`
///
/// Edge ids are handed out sequentially. Edges are never removed or changed
/// once added, and `edges_from` reports them in insertion order.
#[derive(Debug, Clone)]
pub struct DirectedWeightedGraph<L> {
    edges: Vec<Edge<L>>,
    adjacency: Vec<Vec<EdgeId>>,
}

impl<L> DirectedWeightedGraph<L> {
    pub fn new(vertex_count: usize) -> Self {
        Self {
            edges: Vec::new(),
            adjacency: vec![Vec::new(); vertex_count],
        }
    }

    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn add_edge(
        &mut self,
        from: VertexId,
        to: VertexId,
        weight: f64,
        label: L,
    ) -> Result<EdgeId, GraphError> {
        for vertex in [from, to] {
            if vertex >= self.vertex_count() {
                return Err(GraphError::VertexOutOfRange {
                    vertex,
                    vertex_count: self.vertex_count(),
                });
            }
        }

        if weight.is_nan() || weight < 0.0 {
            return Err(GraphError::InvalidWeight(weight));
        }

        let id = self.edges.len();
        self.edges.push(Edge {
            from,
            to,
            weight,
            label,
        });
        self.adjacency[from].push(id);
        Ok(id)
    }

    pub fn edge(&self, id: EdgeId) -> Result<&Edge<L>, GraphError> {
        self.edges.get(id).ok_or(GraphError::UnknownEdge(id))
    }

    /// Outgoing edge ids of `vertex` in insertion order
    ///
    /// Empty for vertices outside the graph.
    pub fn edges_from(&self, vertex: VertexId) -> &[EdgeId] {
        self.adjacency
            .get(vertex)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

/// Direct access for ids taken from `edges_from` or returned by `add_edge`.
/// Panics on any other id; use [`DirectedWeightedGraph::edge`] for untrusted ids.
impl<L> Index<EdgeId> for DirectedWeightedGraph<L> {
    type Output = Edge<L>;

    fn index(&self, id: EdgeId) -> &Self::Output {
        &self.edges[id]
    }
}
