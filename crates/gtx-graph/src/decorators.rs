use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use gtx_core::errors::GraphError;
use gtx_core::{Graph, VertexId};

/// Shareable handle to a graph guarded by a mutex.
///
/// Every trait call takes the lock for its own duration only, so a multi-step
/// operation such as a shuffle interleaves with other handles at call
/// granularity. Hold [`SynchronizedGraph::lock`] for the whole operation when
/// it must appear atomic. Iterators are materialized before the lock is
/// released.
#[derive(Debug)]
pub struct SynchronizedGraph<G> {
    inner: Arc<Mutex<G>>,
}

impl<G> Clone for SynchronizedGraph<G> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<G: Graph> SynchronizedGraph<G> {
    /// Moves `graph` behind a mutex.
    pub fn new(graph: G) -> Self {
        Self {
            inner: Arc::new(Mutex::new(graph)),
        }
    }

    /// Locks the graph. A poisoned lock is recovered rather than reported.
    pub fn lock(&self) -> MutexGuard<'_, G> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns the graph if this is the last handle, otherwise gives the handle back.
    pub fn try_unwrap(self) -> Result<G, Self> {
        match Arc::try_unwrap(self.inner) {
            Ok(mutex) => Ok(mutex.into_inner().unwrap_or_else(PoisonError::into_inner)),
            Err(inner) => Err(Self { inner }),
        }
    }
}

/// Wraps `graph` in a [`SynchronizedGraph`].
pub fn synchronized_graph<G: Graph>(graph: G) -> SynchronizedGraph<G> {
    SynchronizedGraph::new(graph)
}

impl<G: Graph> Graph for SynchronizedGraph<G> {
    type Edge = G::Edge;

    fn order(&self) -> usize {
        self.lock().order()
    }

    fn size(&self) -> usize {
        self.lock().size()
    }

    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = VertexId> + '_> {
        let snapshot: Vec<VertexId> = self.lock().vertices().collect();
        Box::new(snapshot.into_iter())
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = G::Edge> + '_> {
        let snapshot: Vec<G::Edge> = self.lock().edges().collect();
        Box::new(snapshot.into_iter())
    }

    fn adjacency_list(&self, vertex: VertexId) -> Result<Vec<G::Edge>, GraphError> {
        self.lock().adjacency_list(vertex)
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.lock().contains_vertex(vertex)
    }

    fn contains(&self, edge: &G::Edge) -> bool {
        self.lock().contains(edge)
    }

    fn connects(&self, src: VertexId, dst: VertexId) -> bool {
        self.lock().connects(src, dst)
    }

    fn add_vertex(&mut self, vertex: VertexId) -> Result<bool, GraphError> {
        self.lock().add_vertex(vertex)
    }

    fn add(&mut self, edge: G::Edge) -> Result<bool, GraphError> {
        self.lock().add(edge)
    }

    fn remove(&mut self, edge: &G::Edge) -> Result<bool, GraphError> {
        self.lock().remove(edge)
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Result<bool, GraphError> {
        self.lock().remove_vertex(vertex)
    }
}

/// Read-only view: queries pass through, every mutation fails with `read-only`.
#[derive(Debug)]
pub struct UnmodifiableGraph<'a, G: ?Sized> {
    graph: &'a G,
}

impl<'a, G: Graph + ?Sized> UnmodifiableGraph<'a, G> {
    /// Wraps `graph`.
    pub fn new(graph: &'a G) -> Self {
        Self { graph }
    }
}

/// Wraps `graph` in an [`UnmodifiableGraph`].
pub fn unmodifiable<G: Graph + ?Sized>(graph: &G) -> UnmodifiableGraph<'_, G> {
    UnmodifiableGraph::new(graph)
}

fn read_only(operation: &str) -> GraphError {
    GraphError::graph("read-only", "graph is unmodifiable").with_context("operation", operation)
}

impl<'a, G: Graph + ?Sized> Graph for UnmodifiableGraph<'a, G> {
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

    fn add_vertex(&mut self, _vertex: VertexId) -> Result<bool, GraphError> {
        Err(read_only("add_vertex"))
    }

    fn add(&mut self, _edge: G::Edge) -> Result<bool, GraphError> {
        Err(read_only("add"))
    }

    fn remove(&mut self, _edge: &G::Edge) -> Result<bool, GraphError> {
        Err(read_only("remove"))
    }

    fn remove_vertex(&mut self, _vertex: VertexId) -> Result<bool, GraphError> {
        Err(read_only("remove_vertex"))
    }
}
