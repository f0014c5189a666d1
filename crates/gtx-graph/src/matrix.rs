use gtx_core::{Graph, VertexId};

/// Renders `graph` as rows of `'0'`/`'1'`, one row and column per vertex in
/// vertex iteration order. Cell `(from, to)` is `'1'` when
/// [`Graph::connects`] reports an edge running from `from` to `to`.
pub fn to_adjacency_matrix_string<G: Graph + ?Sized>(graph: &G) -> String {
    let vertices: Vec<VertexId> = graph.vertices().collect();
    let mut rendered = String::with_capacity(vertices.len() * (vertices.len() + 1));
    for &from in &vertices {
        for &to in &vertices {
            rendered.push(if graph.connects(from, to) { '1' } else { '0' });
        }
        rendered.push('\n');
    }
    rendered
}
