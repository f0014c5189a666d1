use std::cmp::Ordering;
use std::fmt::{self, Debug, Display};
use std::hash::{Hash, Hasher};

use gtx_core::{Edge, TypedEdge, VertexId};

fn unordered(src: VertexId, dst: VertexId) -> (VertexId, VertexId) {
    if src <= dst {
        (src, dst)
    } else {
        (dst, src)
    }
}

/// Undirected edge between two vertices.
///
/// The stored orientation is whatever the edge was created with; equality,
/// ordering and hashing only look at the unordered endpoint pair.
#[derive(Debug, Clone, Copy)]
pub struct SimpleEdge {
    src: VertexId,
    dst: VertexId,
}

impl SimpleEdge {
    /// Creates an undirected edge.
    pub fn new(src: VertexId, dst: VertexId) -> Self {
        Self { src, dst }
    }

    /// Creates an undirected edge from raw vertex ids.
    pub fn from_raw(src: u64, dst: u64) -> Self {
        Self::new(VertexId::from_raw(src), VertexId::from_raw(dst))
    }
}

impl PartialEq for SimpleEdge {
    fn eq(&self, other: &Self) -> bool {
        unordered(self.src, self.dst) == unordered(other.src, other.dst)
    }
}

impl Eq for SimpleEdge {}

impl PartialOrd for SimpleEdge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SimpleEdge {
    fn cmp(&self, other: &Self) -> Ordering {
        unordered(self.src, self.dst).cmp(&unordered(other.src, other.dst))
    }
}

impl Hash for SimpleEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        unordered(self.src, self.dst).hash(state);
    }
}

impl Edge for SimpleEdge {
    fn src(&self) -> VertexId {
        self.src
    }

    fn dst(&self) -> VertexId {
        self.dst
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn with_endpoints(&self, src: VertexId, dst: VertexId) -> Self {
        Self::new(src, dst)
    }
}

impl Display for SimpleEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}--{}", self.src.as_raw(), self.dst.as_raw())
    }
}

/// Directed edge from `src` to `dst`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimpleDirectedEdge {
    src: VertexId,
    dst: VertexId,
}

impl SimpleDirectedEdge {
    /// Creates a directed edge.
    pub fn new(src: VertexId, dst: VertexId) -> Self {
        Self { src, dst }
    }

    /// Creates a directed edge from raw vertex ids.
    pub fn from_raw(src: u64, dst: u64) -> Self {
        Self::new(VertexId::from_raw(src), VertexId::from_raw(dst))
    }
}

impl Edge for SimpleDirectedEdge {
    fn src(&self) -> VertexId {
        self.src
    }

    fn dst(&self) -> VertexId {
        self.dst
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn with_endpoints(&self, src: VertexId, dst: VertexId) -> Self {
        Self::new(src, dst)
    }
}

impl Display for SimpleDirectedEdge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.src.as_raw(), self.dst.as_raw())
    }
}

/// Undirected edge carrying a type tag.
#[derive(Debug, Clone)]
pub struct SimpleTypedEdge<T> {
    src: VertexId,
    dst: VertexId,
    edge_type: T,
}

impl<T> SimpleTypedEdge<T> {
    /// Creates an undirected typed edge.
    pub fn new(src: VertexId, dst: VertexId, edge_type: T) -> Self {
        Self {
            src,
            dst,
            edge_type,
        }
    }

    /// Creates an undirected typed edge from raw vertex ids.
    pub fn from_raw(src: u64, dst: u64, edge_type: T) -> Self {
        Self::new(VertexId::from_raw(src), VertexId::from_raw(dst), edge_type)
    }

    fn key(&self) -> (&T, VertexId, VertexId) {
        let (low, high) = unordered(self.src, self.dst);
        (&self.edge_type, low, high)
    }
}

impl<T: PartialEq> PartialEq for SimpleTypedEdge<T> {
    fn eq(&self, other: &Self) -> bool {
        self.edge_type == other.edge_type
            && unordered(self.src, self.dst) == unordered(other.src, other.dst)
    }
}

impl<T: Eq> Eq for SimpleTypedEdge<T> {}

impl<T: Ord> PartialOrd for SimpleTypedEdge<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T: Ord> Ord for SimpleTypedEdge<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl<T: Hash> Hash for SimpleTypedEdge<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl<T> Edge for SimpleTypedEdge<T>
where
    T: Clone + Eq + Ord + Hash + Debug,
{
    fn src(&self) -> VertexId {
        self.src
    }

    fn dst(&self) -> VertexId {
        self.dst
    }

    fn is_directed(&self) -> bool {
        false
    }

    fn with_endpoints(&self, src: VertexId, dst: VertexId) -> Self {
        Self::new(src, dst, self.edge_type.clone())
    }
}

impl<T> TypedEdge for SimpleTypedEdge<T>
where
    T: Clone + Eq + Ord + Hash + Debug,
{
    type Type = T;

    fn edge_type(&self) -> &T {
        &self.edge_type
    }
}

/// Directed edge carrying a type tag.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SimpleDirectedTypedEdge<T> {
    src: VertexId,
    dst: VertexId,
    edge_type: T,
}

impl<T> SimpleDirectedTypedEdge<T> {
    /// Creates a directed typed edge.
    pub fn new(src: VertexId, dst: VertexId, edge_type: T) -> Self {
        Self {
            src,
            dst,
            edge_type,
        }
    }

    /// Creates a directed typed edge from raw vertex ids.
    pub fn from_raw(src: u64, dst: u64, edge_type: T) -> Self {
        Self::new(VertexId::from_raw(src), VertexId::from_raw(dst), edge_type)
    }
}

impl<T> Edge for SimpleDirectedTypedEdge<T>
where
    T: Clone + Eq + Ord + Hash + Debug,
{
    fn src(&self) -> VertexId {
        self.src
    }

    fn dst(&self) -> VertexId {
        self.dst
    }

    fn is_directed(&self) -> bool {
        true
    }

    fn with_endpoints(&self, src: VertexId, dst: VertexId) -> Self {
        Self::new(src, dst, self.edge_type.clone())
    }
}

impl<T> TypedEdge for SimpleDirectedTypedEdge<T>
where
    T: Clone + Eq + Ord + Hash + Debug,
{
    type Type = T;

    fn edge_type(&self) -> &T {
        &self.edge_type
    }
}
