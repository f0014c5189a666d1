use std::collections::{BTreeMap, BTreeSet};

use gtx_core::errors::GraphError;
use gtx_core::{DirectedGraph, Edge, Graph, VertexId};

use crate::ids::unknown_vertex;
use crate::sparse::SparseGraph;

/// Sparse graph with native in/out indices.
///
/// Orientation is taken from the stored `(src, dst)` of each edge, so
/// undirected edges inserted here behave as if directed from `src` to `dst`
/// for the in/out queries.
#[derive(Debug, Clone)]
pub struct SparseDirectedGraph<E> {
    graph: SparseGraph<E>,
    incoming: BTreeMap<VertexId, BTreeSet<E>>,
    outgoing: BTreeMap<VertexId, BTreeSet<E>>,
}

impl<E: Edge> SparseDirectedGraph<E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            graph: SparseGraph::new(),
            incoming: BTreeMap::new(),
            outgoing: BTreeMap::new(),
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

    /// Adds an edge and its endpoints. Returns `false` if an equal edge exists.
    pub fn insert_edge(&mut self, edge: E) -> bool {
        if !self.graph.insert_edge(edge.clone()) {
            return false;
        }
        self.outgoing
            .entry(edge.src())
            .or_default()
            .insert(edge.clone());
        self.incoming.entry(edge.dst()).or_default().insert(edge);
        true
    }

    fn unindex(&mut self, edge: &E) {
        if let Some(out) = self.outgoing.get_mut(&edge.src()) {
            out.remove(edge);
        }
        if let Some(inc) = self.incoming.get_mut(&edge.dst()) {
            inc.remove(edge);
        }
    }

    fn indexed(
        &self,
        index: &BTreeMap<VertexId, BTreeSet<E>>,
        vertex: VertexId,
    ) -> Result<Vec<E>, GraphError> {
        if !self.graph.contains_vertex(vertex) {
            return Err(unknown_vertex(vertex));
        }
        Ok(index
            .get(&vertex)
            .map(|edges| edges.iter().cloned().collect())
            .unwrap_or_default())
    }
}

impl<E: Edge> Default for SparseDirectedGraph<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: Edge> Graph for SparseDirectedGraph<E> {
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
        self.incoming.remove(&vertex);
        self.outgoing.remove(&vertex);
        Ok(true)
    }
}

impl<E: Edge> DirectedGraph for SparseDirectedGraph<E> {
    fn in_edges(&self, vertex: VertexId) -> Result<Vec<E>, GraphError> {
        self.indexed(&self.incoming, vertex)
    }

    fn out_edges(&self, vertex: VertexId) -> Result<Vec<E>, GraphError> {
        self.indexed(&self.outgoing, vertex)
    }
}
