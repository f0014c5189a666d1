use std::collections::{BTreeMap, BTreeSet};

use gtx_core::errors::GraphError;
use gtx_core::{Graph, Multigraph, TypedEdge, VertexId};

use crate::sparse::SparseGraph;

/// Sparse graph of typed edges with a per-type edge index.
///
/// Two vertices may be joined by several edges as long as their type tags
/// differ. A type disappears from [`Multigraph::edge_types`] once its last
/// edge is removed.
#[derive(Debug, Clone)]
pub struct SparseMultigraph<E: TypedEdge> {
    graph: SparseGraph<E>,
    by_type: BTreeMap<E::Type, BTreeSet<E>>,
}

impl<E: TypedEdge> SparseMultigraph<E> {
    /// Creates an empty multigraph.
    pub fn new() -> Self {
        Self {
            graph: SparseGraph::new(),
            by_type: BTreeMap::new(),
        }
    }

    /// Builds a multigraph holding the provided edges and their endpoints.
    pub fn from_edges(edges: impl IntoIterator<Item = E>) -> Self {
        let mut graph = Self::new();
        for edge in edges {
            graph.insert_edge(edge);
        }
        graph
    }

    /// Adds an edge and its endpoints. Returns `false` if an equal edge exists.
    pub fn insert_edge(&mut self, edge: E) -> bool {
        if !self.graph.insert_edge(edge.clone()) {
            return false;
        }
        self.by_type
            .entry(edge.edge_type().clone())
            .or_default()
            .insert(edge);
        true
    }

    fn unindex(&mut self, edge: &E) {
        let edge_type = edge.edge_type();
        let now_empty = match self.by_type.get_mut(edge_type) {
            Some(edges) => {
                edges.remove(edge);
                edges.is_empty()
            }
            None => false,
        };
        if now_empty {
            self.by_type.remove(edge_type);
        }
    }
}

impl<E: TypedEdge> Default for SparseMultigraph<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: TypedEdge> Graph for SparseMultigraph<E> {
    type Edge = E;

    fn order(&self) -> usize {
        self.graph.order()
    }

    fn size(&self) -> usize {
        self.graph.size()
    }

    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = VertexId> + '_> {
        self.graph.vertices()
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = E> + '_> {
        self.graph.edges()
    }

    fn adjacency_list(&self, vertex: VertexId) -> Result<Vec<E>, GraphError> {
        self.graph.adjacency_list(vertex)
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.graph.contains_vertex(vertex)
    }

    fn contains(&self, edge: &E) -> bool {
        self.graph.contains(edge)
    }

    fn connects(&self, src: VertexId, dst: VertexId) -> bool {
        self.graph.connects(src, dst)
    }

    fn add_vertex(&mut self, vertex: VertexId) -> Result<bool, GraphError> {
        Ok(self.graph.insert_vertex(vertex))
    }

    fn add(&mut self, edge: E) -> Result<bool, GraphError> {
        Ok(self.insert_edge(edge))
    }

    fn remove(&mut self, edge: &E) -> Result<bool, GraphError> {
        let Some(stored) = self.graph.take_edge(edge) else {
            return Ok(false);
        };
        self.unindex(&stored);
        Ok(true)
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Result<bool, GraphError> {
        let Some(detached) = self.graph.detach_vertex(vertex) else {
            return Ok(false);
        };
        for edge in &detached {
            self.unindex(edge);
        }
        Ok(true)
    }
}

impl<E: TypedEdge> Multigraph<E::Type> for SparseMultigraph<E> {
    fn edge_types(&self) -> BTreeSet<E::Type> {
        self.by_type.keys().cloned().collect()
    }

    fn edges_of_type(&self, edge_type: &E::Type) -> Vec<E> {
        self.by_type
            .get(edge_type)
            .map(|edges| edges.iter().cloned().collect())
            .unwrap_or_default()
    }
}
