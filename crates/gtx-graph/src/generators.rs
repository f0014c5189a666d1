use gtx_core::errors::GraphError;
use gtx_core::{Graph, VertexId};
use rand::Rng;

use crate::ids::make_vertex;

/// Generates a random graph on vertices `0..n_vertices` with up to `n_edges`
/// distinct loop-free edges.
///
/// `make_edge` turns a sampled `(src, dst)` pair into the graph's edge kind
/// (and may draw a type tag from the generator). Sampling stops early when
/// duplicates keep colliding, so very dense requests can return fewer edges.
pub fn gen_random_graph<G, R, F>(
    n_vertices: usize,
    n_edges: usize,
    rng: &mut R,
    mut make_edge: F,
) -> Result<G, GraphError>
where
    G: Graph + Default,
    R: Rng + ?Sized,
    F: FnMut(VertexId, VertexId, &mut R) -> G::Edge,
{
    if n_vertices < 2 && n_edges > 0 {
        return Err(GraphError::invalid_argument(
            "too-few-vertices",
            "loop-free edges require at least two vertices",
        )
        .with_context("n_vertices", n_vertices)
        .with_context("n_edges", n_edges));
    }

    let mut graph = G::default();
    for index in 0..n_vertices {
        graph.add_vertex(make_vertex(index))?;
    }

    let mut stagnation = 0usize;
    while graph.size() < n_edges {
        let src = rng.gen_range(0..n_vertices);
        let dst = rng.gen_range(0..n_vertices);
        if src == dst {
            continue;
        }
        let edge = make_edge(make_vertex(src), make_vertex(dst), rng);
        if graph.add(edge)? {
            stagnation = 0;
        } else {
            stagnation += 1;
            if stagnation > n_vertices * 16 {
                break;
            }
        }
    }
    Ok(graph)
}
