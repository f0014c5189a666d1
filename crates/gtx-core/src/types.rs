use serde::{Deserialize, Serialize};

/// Incidence counts for a single vertex.
///
/// Directed edges contribute to `in_degree`/`out_degree`; undirected edges
/// contribute to `undirected` (a self loop counts twice).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct VertexDegree {
    /// Directed edges ending at the vertex.
    pub in_degree: usize,
    /// Directed edges starting at the vertex.
    pub out_degree: usize,
    /// Undirected edge endpoints at the vertex.
    pub undirected: usize,
}

impl VertexDegree {
    /// Total number of edge endpoints at the vertex.
    pub fn total(&self) -> usize {
        self.in_degree + self.out_degree + self.undirected
    }
}
