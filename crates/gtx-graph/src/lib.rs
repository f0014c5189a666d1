#![deny(missing_docs)]
#![doc = "Sparse graph storage and structural transforms implementing the `gtx-core` contracts: degree-preserving edge shuffles, vertex packing, line graphs, adjacency matrices and directed/multigraph views."]

mod adaptors;
mod decorators;
mod degrees;
mod directed;
mod edges;
mod flags;
mod generators;
mod hash;
mod ids;
mod indexer;
mod line_graph;
mod matrix;
mod multigraph;
mod pack;
mod shuffle;
mod sparse;

pub use adaptors::{
    as_directed_graph, as_multigraph, AsDirectedGraph, AsMultigraph, DirectedGraphAdaptor,
    MultigraphAdaptor,
};
pub use decorators::{synchronized_graph, unmodifiable, SynchronizedGraph, UnmodifiableGraph};
pub use degrees::{degree_sequence, sorted_degrees, typed_degree_sequence};
pub use directed::SparseDirectedGraph;
pub use edges::{SimpleDirectedEdge, SimpleDirectedTypedEdge, SimpleEdge, SimpleTypedEdge};
pub use flags::ShuffleConfig;
pub use generators::gen_random_graph;
pub use hash::canonical_hash;
pub use indexer::HashIndexer;
pub use line_graph::{to_line_graph, to_line_graph_with_indexer};
pub use matrix::to_adjacency_matrix_string;
pub use multigraph::SparseMultigraph;
pub use pack::pack;
pub use shuffle::{
    shuffle_preserve, shuffle_preserve_type, shuffle_preserve_type_with_rng,
    shuffle_preserve_with_rng,
};
pub use sparse::SparseGraph;
