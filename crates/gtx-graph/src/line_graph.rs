use gtx_core::errors::GraphError;
use gtx_core::{Graph, Indexer};
use tracing::{debug, instrument};

use crate::edges::SimpleEdge;
use crate::ids::make_vertex;
use crate::indexer::HashIndexer;
use crate::sparse::SparseGraph;

/// Builds the line graph of `graph`: one vertex per edge, joined when the
/// two edges share an endpoint.
///
/// Line-graph vertex ids come from a fresh [`HashIndexer`] in first-seen
/// order.
pub fn to_line_graph<G>(graph: &G) -> Result<SparseGraph<SimpleEdge>, GraphError>
where
    G: Graph + ?Sized,
{
    let mut edge_indices = HashIndexer::new();
    to_line_graph_with_indexer(graph, &mut edge_indices)
}

/// [`to_line_graph`] with caller supplied edge indices.
///
/// Edges already known to `edge_indices` keep their index; unknown edges are
/// assigned one. Each pair of edges in a vertex's adjacency list is joined
/// once per shared vertex. For parallel edges of a multigraph the pairing
/// depends on adjacency-list iteration order.
#[instrument(skip_all, level = "debug", fields(order = graph.order(), size = graph.size()))]
pub fn to_line_graph_with_indexer<G, I>(
    graph: &G,
    edge_indices: &mut I,
) -> Result<SparseGraph<SimpleEdge>, GraphError>
where
    G: Graph + ?Sized,
    I: Indexer<G::Edge> + ?Sized,
{
    let mut line_graph = SparseGraph::new();
    for vertex in graph.vertices() {
        let adjacent = graph.adjacency_list(vertex)?;
        for e1 in &adjacent {
            let e1_vertex = make_vertex(edge_indices.index(e1));
            line_graph.insert_vertex(e1_vertex);
            for e2 in &adjacent {
                if e1 == e2 {
                    break;
                }
                let e2_vertex = make_vertex(edge_indices.index(e2));
                line_graph.insert_edge(SimpleEdge::new(e1_vertex, e2_vertex));
            }
        }
    }
    debug!(
        order = line_graph.order(),
        size = line_graph.size(),
        "built line graph"
    );
    Ok(line_graph)
}
