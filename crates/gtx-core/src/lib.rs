#![deny(missing_docs)]
#![doc = "Core traits and data types for gtx graph transforms. Graph storage, edge kinds and indexers are consumed through the contracts defined here."]

use std::collections::BTreeSet;
use std::fmt::Debug;
use std::hash::Hash;
use std::iter::ExactSizeIterator;

use serde::{Deserialize, Serialize};

pub mod errors;
pub mod rng;
mod types;

pub use errors::{ErrorInfo, GraphError};
pub use rng::RngHandle;
pub use types::VertexDegree;

/// Identifier for a vertex within a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VertexId(u64);

impl VertexId {
    /// Creates a new identifier from its raw integer representation.
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw integer representation of the identifier.
    pub const fn as_raw(&self) -> u64 {
        self.0
    }
}

/// Immutable edge value.
///
/// Endpoints never change once an edge exists; [`Edge::with_endpoints`] and
/// [`Edge::flip`] produce new values of the same kind (directedness and type
/// tag are carried over). Undirected edges are stored with an arbitrary
/// orientation, so their equality, ordering and hashing must ignore it.
pub trait Edge: Clone + Eq + Ord + Hash + Debug {
    /// Tail of the edge as stored.
    fn src(&self) -> VertexId;

    /// Head of the edge as stored.
    fn dst(&self) -> VertexId;

    /// Whether the orientation of this edge is meaningful.
    fn is_directed(&self) -> bool;

    /// Returns an edge of the same kind connecting the provided endpoints.
    fn with_endpoints(&self, src: VertexId, dst: VertexId) -> Self;

    /// Returns an edge of the same kind with its endpoints reversed.
    fn flip(&self) -> Self {
        self.with_endpoints(self.dst(), self.src())
    }

    /// Whether both endpoints are the same vertex.
    fn is_self_loop(&self) -> bool {
        self.src() == self.dst()
    }

    /// Whether `vertex` is one of the endpoints.
    fn touches(&self, vertex: VertexId) -> bool {
        self.src() == vertex || self.dst() == vertex
    }

    /// Orientation-normalized copy: undirected edges are returned with `src <= dst`.
    fn canonical(&self) -> Self {
        if self.is_directed() || self.src() <= self.dst() {
            self.clone()
        } else {
            self.flip()
        }
    }
}

/// Edge carrying a type tag, as stored in a [`Multigraph`].
pub trait TypedEdge: Edge {
    /// Type space of the tags.
    type Type: Clone + Eq + Ord + Hash + Debug;

    /// Returns the type tag of this edge.
    fn edge_type(&self) -> &Self::Type;
}

/// Describes the mutable graph contract consumed by the transforms.
///
/// Implementations must never hold two equal edges at once: [`Graph::add`]
/// reports `false` instead of inserting a duplicate.
pub trait Graph {
    /// Edge kind stored by the graph.
    type Edge: Edge;

    /// Number of vertices.
    fn order(&self) -> usize;

    /// Number of edges.
    fn size(&self) -> usize;

    /// Returns an iterator over all vertex identifiers.
    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = VertexId> + '_>;

    /// Returns an iterator over all edges.
    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = Self::Edge> + '_>;

    /// Returns the edges incident to `vertex`.
    fn adjacency_list(&self, vertex: VertexId) -> Result<Vec<Self::Edge>, GraphError>;

    /// Whether `vertex` belongs to the graph.
    fn contains_vertex(&self, vertex: VertexId) -> bool;

    /// Whether an edge equal to `edge` belongs to the graph.
    fn contains(&self, edge: &Self::Edge) -> bool;

    /// Directed presence test: whether some edge runs from `src` to `dst`.
    ///
    /// Undirected edges run both ways.
    fn connects(&self, src: VertexId, dst: VertexId) -> bool;

    /// Adds an isolated vertex. Returns `false` if it was already present.
    fn add_vertex(&mut self, vertex: VertexId) -> Result<bool, GraphError>;

    /// Adds an edge and any missing endpoint. Returns `false` if an equal edge exists.
    fn add(&mut self, edge: Self::Edge) -> Result<bool, GraphError>;

    /// Removes an edge. Returns `false` if it was absent.
    fn remove(&mut self, edge: &Self::Edge) -> Result<bool, GraphError>;

    /// Removes a vertex together with its incident edges. Returns `false` if it was absent.
    fn remove_vertex(&mut self, vertex: VertexId) -> Result<bool, GraphError>;
}

/// Graph exposing edge orientation queries.
pub trait DirectedGraph: Graph {
    /// Edges whose head is `vertex`.
    fn in_edges(&self, vertex: VertexId) -> Result<Vec<Self::Edge>, GraphError>;

    /// Edges whose tail is `vertex`.
    fn out_edges(&self, vertex: VertexId) -> Result<Vec<Self::Edge>, GraphError>;

    /// Number of edges whose head is `vertex`.
    fn in_degree(&self, vertex: VertexId) -> Result<usize, GraphError> {
        Ok(self.in_edges(vertex)?.len())
    }

    /// Number of edges whose tail is `vertex`.
    fn out_degree(&self, vertex: VertexId) -> Result<usize, GraphError> {
        Ok(self.out_edges(vertex)?.len())
    }
}

/// Graph whose edges are partitioned by a type tag `T`.
pub trait Multigraph<T>: Graph {
    /// Types that currently have at least one edge.
    fn edge_types(&self) -> BTreeSet<T>;

    /// Edges carrying the given type tag.
    fn edges_of_type(&self, edge_type: &T) -> Vec<Self::Edge>;
}

/// Stable, injective mapping from items to dense indices.
pub trait Indexer<T> {
    /// Returns the index of `item`, assigning the next free index on first sight.
    fn index(&mut self, item: &T) -> usize;

    /// Returns the index of `item` without assigning one.
    fn find(&self, item: &T) -> Option<usize>;

    /// Returns the item stored under `index`.
    fn lookup(&self, index: usize) -> Option<&T>;

    /// Number of indexed items.
    fn len(&self) -> usize;

    /// Whether no item has been indexed yet.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<G: Graph + ?Sized> Graph for &mut G {
    type Edge = G::Edge;

    fn order(&self) -> usize {
        (**self).order()
    }

    fn size(&self) -> usize {
        (**self).size()
    }

    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = VertexId> + '_> {
        (**self).vertices()
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = Self::Edge> + '_> {
        (**self).edges()
    }

    fn adjacency_list(&self, vertex: VertexId) -> Result<Vec<Self::Edge>, GraphError> {
        (**self).adjacency_list(vertex)
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        (**self).contains_vertex(vertex)
    }

    fn contains(&self, edge: &Self::Edge) -> bool {
        (**self).contains(edge)
    }

    fn connects(&self, src: VertexId, dst: VertexId) -> bool {
        (**self).connects(src, dst)
    }

    fn add_vertex(&mut self, vertex: VertexId) -> Result<bool, GraphError> {
        (**self).add_vertex(vertex)
    }

    fn add(&mut self, edge: Self::Edge) -> Result<bool, GraphError> {
        (**self).add(edge)
    }

    fn remove(&mut self, edge: &Self::Edge) -> Result<bool, GraphError> {
        (**self).remove(edge)
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Result<bool, GraphError> {
        (**self).remove_vertex(vertex)
    }
}

impl<G: DirectedGraph + ?Sized> DirectedGraph for &mut G {
    fn in_edges(&self, vertex: VertexId) -> Result<Vec<Self::Edge>, GraphError> {
        (**self).in_edges(vertex)
    }

    fn out_edges(&self, vertex: VertexId) -> Result<Vec<Self::Edge>, GraphError> {
        (**self).out_edges(vertex)
    }

    fn in_degree(&self, vertex: VertexId) -> Result<usize, GraphError> {
        (**self).in_degree(vertex)
    }

    fn out_degree(&self, vertex: VertexId) -> Result<usize, GraphError> {
        (**self).out_degree(vertex)
    }
}

impl<T, G: Multigraph<T> + ?Sized> Multigraph<T> for &mut G {
    fn edge_types(&self) -> BTreeSet<T> {
        (**self).edge_types()
    }

    fn edges_of_type(&self, edge_type: &T) -> Vec<Self::Edge> {
        (**self).edges_of_type(edge_type)
    }
}
