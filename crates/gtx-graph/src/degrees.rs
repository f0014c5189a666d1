use std::collections::BTreeMap;

use gtx_core::{Edge, Graph, Multigraph, VertexDegree, VertexId};

/// Per-vertex incidence counts of `graph`, including isolated vertices.
pub fn degree_sequence<G: Graph + ?Sized>(graph: &G) -> BTreeMap<VertexId, VertexDegree> {
    let mut degrees: BTreeMap<VertexId, VertexDegree> = graph
        .vertices()
        .map(|vertex| (vertex, VertexDegree::default()))
        .collect();
    for edge in graph.edges() {
        record(&mut degrees, edge.src(), edge.dst(), edge.is_directed());
    }
    degrees
}

/// Per-vertex incidence counts broken down by edge type.
///
/// Only `(vertex, type)` pairs with at least one incident edge are present.
pub fn typed_degree_sequence<T, G>(graph: &G) -> BTreeMap<(VertexId, T), VertexDegree>
where
    T: Ord + Clone,
    G: Multigraph<T> + ?Sized,
{
    let mut degrees = BTreeMap::new();
    for edge_type in graph.edge_types() {
        let mut per_type: BTreeMap<VertexId, VertexDegree> = BTreeMap::new();
        for edge in graph.edges_of_type(&edge_type) {
            record(&mut per_type, edge.src(), edge.dst(), edge.is_directed());
        }
        for (vertex, degree) in per_type {
            degrees.insert((vertex, edge_type.clone()), degree);
        }
    }
    degrees
}

/// Degree multiset of `graph`, sorted, with vertex identities dropped.
pub fn sorted_degrees<G: Graph + ?Sized>(graph: &G) -> Vec<VertexDegree> {
    let mut degrees: Vec<VertexDegree> = degree_sequence(graph).into_values().collect();
    degrees.sort();
    degrees
}

fn record(
    degrees: &mut BTreeMap<VertexId, VertexDegree>,
    src: VertexId,
    dst: VertexId,
    directed: bool,
) {
    if directed {
        degrees.entry(src).or_default().out_degree += 1;
        degrees.entry(dst).or_default().in_degree += 1;
    } else {
        degrees.entry(src).or_default().undirected += 1;
        degrees.entry(dst).or_default().undirected += 1;
    }
}
