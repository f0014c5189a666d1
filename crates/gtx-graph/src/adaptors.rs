use std::collections::BTreeSet;

use gtx_core::errors::GraphError;
use gtx_core::{DirectedGraph, Edge, Graph, Multigraph, TypedEdge, VertexId};

use crate::directed::SparseDirectedGraph;
use crate::multigraph::SparseMultigraph;
use crate::sparse::SparseGraph;

/// Directed view over any graph, borrowing it mutably without copying.
///
/// In/out edges are derived from adjacency lists using each edge's stored
/// orientation.
#[derive(Debug)]
pub struct DirectedGraphAdaptor<'a, G: ?Sized> {
    graph: &'a mut G,
}

impl<'a, G: Graph + ?Sized> DirectedGraphAdaptor<'a, G> {
    /// Wraps `graph`.
    pub fn new(graph: &'a mut G) -> Self {
        Self { graph }
    }

    /// Releases the wrapped graph.
    pub fn into_inner(self) -> &'a mut G {
        self.graph
    }
}

/// Multigraph view over a graph of typed edges, borrowing it mutably without
/// copying. Type partitions are computed on demand from the edge set.
#[derive(Debug)]
pub struct MultigraphAdaptor<'a, G: ?Sized> {
    graph: &'a mut G,
}

impl<'a, G: Graph + ?Sized> MultigraphAdaptor<'a, G> {
    /// Wraps `graph`.
    pub fn new(graph: &'a mut G) -> Self {
        Self { graph }
    }

    /// Releases the wrapped graph.
    pub fn into_inner(self) -> &'a mut G {
        self.graph
    }
}

macro_rules! delegate_graph {
    ($adaptor:ident) => {
        impl<'a, G: Graph + ?Sized> Graph for $adaptor<'a, G> {
            type Edge = G::Edge;

            fn order(&self) -> usize {
                self.graph.order()
            }

            fn size(&self) -> usize {
                self.graph.size()
            }

            fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = VertexId> + '_> {
                self.graph.vertices()
            }

            fn edges(&self) -> Box<dyn ExactSizeIterator<Item = G::Edge> + '_> {
                self.graph.edges()
            }

            fn adjacency_list(&self, vertex: VertexId) -> Result<Vec<G::Edge>, GraphError> {
                self.graph.adjacency_list(vertex)
            }

            fn contains_vertex(&self, vertex: VertexId) -> bool {
                self.graph.contains_vertex(vertex)
            }

            fn contains(&self, edge: &G::Edge) -> bool {
                self.graph.contains(edge)
            }

            fn connects(&self, src: VertexId, dst: VertexId) -> bool {
                self.graph.connects(src, dst)
            }

            fn add_vertex(&mut self, vertex: VertexId) -> Result<bool, GraphError> {
                self.graph.add_vertex(vertex)
            }

            fn add(&mut self, edge: G::Edge) -> Result<bool, GraphError> {
                self.graph.add(edge)
            }

            fn remove(&mut self, edge: &G::Edge) -> Result<bool, GraphError> {
                self.graph.remove(edge)
            }

            fn remove_vertex(&mut self, vertex: VertexId) -> Result<bool, GraphError> {
                self.graph.remove_vertex(vertex)
            }
        }
    };
}

delegate_graph!(DirectedGraphAdaptor);
delegate_graph!(MultigraphAdaptor);

impl<'a, G: Graph + ?Sized> DirectedGraph for DirectedGraphAdaptor<'a, G> {
    fn in_edges(&self, vertex: VertexId) -> Result<Vec<G::Edge>, GraphError> {
        Ok(self
            .graph
            .adjacency_list(vertex)?
            .into_iter()
            .filter(|edge| edge.dst() == vertex)
            .collect())
    }

    fn out_edges(&self, vertex: VertexId) -> Result<Vec<G::Edge>, GraphError> {
        Ok(self
            .graph
            .adjacency_list(vertex)?
            .into_iter()
            .filter(|edge| edge.src() == vertex)
            .collect())
    }
}

impl<'a, G> Multigraph<<G::Edge as TypedEdge>::Type> for MultigraphAdaptor<'a, G>
where
    G: Graph + ?Sized,
    G::Edge: TypedEdge,
{
    fn edge_types(&self) -> BTreeSet<<G::Edge as TypedEdge>::Type> {
        self.graph
            .edges()
            .map(|edge| edge.edge_type().clone())
            .collect()
    }

    fn edges_of_type(&self, edge_type: &<G::Edge as TypedEdge>::Type) -> Vec<G::Edge> {
        self.graph
            .edges()
            .filter(|edge| edge.edge_type() == edge_type)
            .collect()
    }
}

/// Graphs that can present themselves as a [`DirectedGraph`].
///
/// Graphs that already are directed hand out themselves; the others are
/// wrapped in a [`DirectedGraphAdaptor`].
pub trait AsDirectedGraph: Graph {
    /// Directed view type.
    type Directed<'a>: DirectedGraph<Edge = Self::Edge>
    where
        Self: 'a;

    /// Returns the directed view.
    fn as_directed(&mut self) -> Self::Directed<'_>;
}

/// Graphs that can present themselves as a [`Multigraph`] over type tags `T`.
pub trait AsMultigraph<T>: Graph {
    /// Multigraph view type.
    type Multi<'a>: Multigraph<T, Edge = Self::Edge>
    where
        Self: 'a;

    /// Returns the multigraph view.
    fn as_multigraph(&mut self) -> Self::Multi<'_>;
}

/// Returns `graph` itself when it is directed, otherwise a directed view over it.
pub fn as_directed_graph<G: AsDirectedGraph>(graph: &mut G) -> G::Directed<'_> {
    graph.as_directed()
}

/// Returns `graph` itself when it is a multigraph, otherwise a multigraph view over it.
pub fn as_multigraph<T, G: AsMultigraph<T>>(graph: &mut G) -> G::Multi<'_> {
    graph.as_multigraph()
}

impl<E: Edge> AsDirectedGraph for SparseDirectedGraph<E> {
    type Directed<'a> = &'a mut Self where Self: 'a;

    fn as_directed(&mut self) -> &mut Self {
        self
    }
}

impl<E: Edge> AsDirectedGraph for SparseGraph<E> {
    type Directed<'a> = DirectedGraphAdaptor<'a, Self> where Self: 'a;

    fn as_directed(&mut self) -> DirectedGraphAdaptor<'_, Self> {
        DirectedGraphAdaptor::new(self)
    }
}

impl<E: TypedEdge> AsDirectedGraph for SparseMultigraph<E> {
    type Directed<'a> = DirectedGraphAdaptor<'a, Self> where Self: 'a;

    fn as_directed(&mut self) -> DirectedGraphAdaptor<'_, Self> {
        DirectedGraphAdaptor::new(self)
    }
}

impl<E: TypedEdge> AsMultigraph<E::Type> for SparseMultigraph<E> {
    type Multi<'a> = &'a mut Self where Self: 'a;

    fn as_multigraph(&mut self) -> &mut Self {
        self
    }
}

impl<E: TypedEdge> AsMultigraph<E::Type> for SparseGraph<E> {
    type Multi<'a> = MultigraphAdaptor<'a, Self> where Self: 'a;

    fn as_multigraph(&mut self) -> MultigraphAdaptor<'_, Self> {
        MultigraphAdaptor::new(self)
    }
}

impl<E: TypedEdge> AsMultigraph<E::Type> for SparseDirectedGraph<E> {
    type Multi<'a> = MultigraphAdaptor<'a, Self> where Self: 'a;

    fn as_multigraph(&mut self) -> MultigraphAdaptor<'_, Self> {
        MultigraphAdaptor::new(self)
    }
}
