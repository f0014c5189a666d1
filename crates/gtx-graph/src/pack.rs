use std::borrow::Cow;
use std::collections::BTreeMap;

use gtx_core::errors::GraphError;
use gtx_core::{Edge, Graph, VertexId};
use tracing::debug;

use crate::ids::make_vertex;

/// Relabels the vertices of `graph` to the contiguous range `0..order()`.
///
/// Returns `Cow::Borrowed(graph)` when the ids already form that range.
/// Otherwise new ids follow the graph's vertex iteration order and every edge
/// is re-created with [`Edge::with_endpoints`] in a fresh `G::default()`.
pub fn pack<G>(graph: &G) -> Result<Cow<'_, G>, GraphError>
where
    G: Graph + Clone + Default,
{
    let order = graph.order();
    let is_contiguous = graph
        .vertices()
        .all(|vertex| vertex.as_raw() < order as u64);
    if is_contiguous {
        return Ok(Cow::Borrowed(graph));
    }

    let remap: BTreeMap<VertexId, VertexId> = graph
        .vertices()
        .enumerate()
        .map(|(index, vertex)| (vertex, make_vertex(index)))
        .collect();

    let mut packed = G::default();
    for index in 0..order {
        packed.add_vertex(make_vertex(index))?;
    }
    for edge in graph.edges() {
        let src = translate(&remap, edge.src())?;
        let dst = translate(&remap, edge.dst())?;
        packed.add(edge.with_endpoints(src, dst))?;
    }

    if packed.size() != graph.size() {
        return Err(GraphError::invariant(
            "edge-count-drift",
            "packing dropped or merged edges",
        )
        .with_context("expected", graph.size())
        .with_context("actual", packed.size()));
    }
    debug!(order, size = packed.size(), "packed vertex ids");
    Ok(Cow::Owned(packed))
}

fn translate(remap: &BTreeMap<VertexId, VertexId>, vertex: VertexId) -> Result<VertexId, GraphError> {
    remap.get(&vertex).copied().ok_or_else(|| {
        GraphError::invariant("dangling-endpoint", "edge endpoint is not a vertex of the graph")
            .with_context("vertex", vertex.as_raw())
    })
}
