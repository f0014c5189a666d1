use sha2::{Digest, Sha256};

use gtx_core::{Edge, Graph, VertexId};

/// Computes the canonical structural hash for the provided graph.
///
/// Two graphs hash equal when they hold the same vertex ids and the same
/// edges, regardless of insertion order or the stored orientation of
/// undirected edges.
pub fn canonical_hash<G: Graph + ?Sized>(graph: &G) -> String {
    let mut hasher = Sha256::new();

    let mut vertices: Vec<VertexId> = graph.vertices().collect();
    vertices.sort();
    hasher.update((vertices.len() as u64).to_le_bytes());
    for vertex in vertices {
        hasher.update(vertex.as_raw().to_le_bytes());
    }

    let mut signatures: Vec<String> = graph
        .edges()
        .map(|edge| format!("{:?}", edge.canonical()))
        .collect();
    signatures.sort();
    hasher.update((signatures.len() as u64).to_le_bytes());
    for signature in signatures {
        update_bytes(signature.as_bytes(), &mut hasher);
    }

    format!("{:x}", hasher.finalize())
}

fn update_bytes(bytes: &[u8], hasher: &mut Sha256) {
    hasher.update((bytes.len() as u64).to_le_bytes());
    hasher.update(bytes);
}
