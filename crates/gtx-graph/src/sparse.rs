use std::collections::{BTreeMap, BTreeSet};

use gtx_core::errors::GraphError;
use gtx_core::{Edge, Graph, VertexId};

use crate::ids::unknown_vertex;

/// Ordered adjacency-set graph over any edge kind.
///
/// Vertices are kept in a `BTreeMap`, so every iteration (vertices, edges and
/// adjacency lists) is in ascending order and reproducible across runs.
#[derive(Debug, Clone)]
pub struct SparseGraph<E> {
    adjacency: BTreeMap<VertexId, BTreeSet<E>>,
    edges: BTreeSet<E>,
}

impl<E: Edge> SparseGraph<E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            adjacency: BTreeMap::new(),
            edges: BTreeSet::new(),
        }
    }

    /// Builds a graph holding the provided edges and their endpoints.
    pub fn from_edges(edges: impl IntoIterator<Item = E>) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.insert_edge(edge);
        }
        graph
    }

    /// Adds an isolated vertex. Returns `false` if it was already present.
    pub fn insert_vertex(&mut self, vertex: VertexId) -> bool {
        if self.adjacency.contains_key(&vertex) {
            return false;
        }
        self.adjacency.insert(vertex, BTreeSet::new());
        true
    }

    /// Adds an edge and its endpoints. Returns `false` if an equal edge exists.
    pub fn insert_edge(&mut self, edge: E) -> bool {
        if self.edges.contains(&edge) {
            return false;
        }
        self.adjacency
            .entry(edge.src())
            .or_default()
            .insert(edge.clone());
        self.adjacency
            .entry(edge.dst())
            .or_default()
            .insert(edge.clone());
        self.edges.insert(edge);
        true
    }

    /// Removes an edge. Returns `false` if it was absent.
    pub fn remove_edge(&mut self, edge: &E) -> bool {
        self.take_edge(edge).is_some()
    }

    /// Removes an edge and returns it in its stored orientation.
    pub fn take_edge(&mut self, edge: &E) -> Option<E> {
        let stored = self.edges.take(edge)?;
        for endpoint in [stored.src(), stored.dst()] {
            if let Some(incident) = self.adjacency.get_mut(&endpoint) {
                incident.remove(&stored);
            }
        }
        Some(stored)
    }

    /// Removes a vertex and returns the edges that were incident to it.
    pub fn detach_vertex(&mut self, vertex: VertexId) -> Option<Vec<E>> {
        let incident = self.adjacency.remove(&vertex)?;
        for edge in &incident {
            self.edges.remove(edge);
            for endpoint in [edge.src(), edge.dst()] {
                if let Some(others) = self.adjacency.get_mut(&endpoint) {
                    others.remove(edge);
                }
            }
        }
        Some(incident.into_iter().collect())
    }

    /// Returns the stored edges incident to `vertex`.
    pub fn incident(&self, vertex: VertexId) -> Result<&BTreeSet<E>, GraphError> {
        self.adjacency
            .get(&vertex)
            .ok_or_else(|| unknown_vertex(vertex))
    }
}

impl<E: Edge> Default for SparseGraph<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Edge> Graph for SparseGraph<E> {
    type Edge = E;

    fn order(&self) -> usize {
        self.adjacency.len()
    }

    fn size(&self) -> usize {
        self.edges.len()
    }

    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = VertexId> + '_> {
        Box::new(self.adjacency.keys().copied())
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = E> + '_> {
        Box::new(self.edges.iter().cloned())
    }

    fn adjacency_list(&self, vertex: VertexId) -> Result<Vec<E>, GraphError> {
        Ok(self.incident(vertex)?.iter().cloned().collect())
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    fn contains(&self, edge: &E) -> bool {
        self.edges.contains(edge)
    }

    fn connects(&self, src: VertexId, dst: VertexId) -> bool {
        let Some(incident) = self.adjacency.get(&src) else {
            return false;
        };
        incident.iter().any(|edge| {
            (edge.src() == src && edge.dst() == dst)
                || (!edge.is_directed() && edge.src() == dst && edge.dst() == src)
        })
    }

    fn add_vertex(&mut self, vertex: VertexId) -> Result<bool, GraphError> {
        Ok(self.insert_vertex(vertex))
    }

    fn add(&mut self, edge: E) -> Result<bool, GraphError> {
        Ok(self.insert_edge(edge))
    }

    fn remove(&mut self, edge: &E) -> Result<bool, GraphError> {
        Ok(self.remove_edge(edge))
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Result<bool, GraphError> {
        Ok(self.detach_vertex(vertex).is_some())
    }
}
