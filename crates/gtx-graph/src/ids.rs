use gtx_core::errors::GraphError;
use gtx_core::VertexId;

/// Creates a [`VertexId`] from a dense index.
pub(crate) fn make_vertex(index: usize) -> VertexId {
    VertexId::from_raw(index as u64)
}

/// Error reported when a vertex is not part of the graph.
pub(crate) fn unknown_vertex(vertex: VertexId) -> GraphError {
    GraphError::graph("unknown-vertex", "vertex does not exist").with_context("vertex", vertex.as_raw())
}
