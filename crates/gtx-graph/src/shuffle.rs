use std::fmt::Debug;

use gtx_core::errors::GraphError;
use gtx_core::rng::RngHandle;
use gtx_core::{Edge, Graph, Multigraph};
use rand::Rng;
use tracing::{debug, instrument, trace};

/// Shuffles the edges of `graph` while preserving its degree sequence.
///
/// Every edge is paired `shuffles_per_edge` times with another random edge and
/// the two exchange their heads. A pairing that would create a self loop or
/// an edge already present is skipped, so the return value (the number of
/// committed swaps) is at most `shuffles_per_edge * graph.size()` and usually
/// much lower on dense graphs. A pairing whose two replacement edges coincide
/// (two undirected self loops) is skipped too, so the edge count never drops.
/// Uses a fresh unseeded generator; see [`shuffle_preserve_with_rng`] for
/// reproducible runs.
pub fn shuffle_preserve<G>(graph: &mut G, shuffles_per_edge: usize) -> Result<usize, GraphError>
where
    G: Graph + ?Sized,
{
    let mut rng = RngHandle::from_entropy();
    shuffle_preserve_with_rng(graph, shuffles_per_edge, &mut rng)
}

/// [`shuffle_preserve`] drawing from the provided generator.
#[instrument(skip(graph, rng), level = "debug", fields(order = graph.order(), size = graph.size()))]
pub fn shuffle_preserve_with_rng<G, R>(
    graph: &mut G,
    shuffles_per_edge: usize,
    rng: &mut R,
) -> Result<usize, GraphError>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    ensure_positive(shuffles_per_edge)?;
    let edges: Vec<G::Edge> = graph.edges().collect();
    let swaps = shuffle_scope(graph, edges, shuffles_per_edge, rng)?;
    debug!(swaps, "shuffled edges");
    Ok(swaps)
}

/// Shuffles the edges of a multigraph, swapping endpoints only between edges
/// of the same type.
///
/// Each vertex keeps, per type, the number of incident edges it started with.
/// Returns the total number of committed swaps over all types.
pub fn shuffle_preserve_type<T, G>(graph: &mut G, shuffles_per_edge: usize) -> Result<usize, GraphError>
where
    T: Debug,
    G: Multigraph<T> + ?Sized,
{
    let mut rng = RngHandle::from_entropy();
    shuffle_preserve_type_with_rng(graph, shuffles_per_edge, &mut rng)
}

/// [`shuffle_preserve_type`] drawing from the provided generator.
#[instrument(skip(graph, rng), level = "debug", fields(order = graph.order(), size = graph.size()))]
pub fn shuffle_preserve_type_with_rng<T, G, R>(
    graph: &mut G,
    shuffles_per_edge: usize,
    rng: &mut R,
) -> Result<usize, GraphError>
where
    T: Debug,
    G: Multigraph<T> + ?Sized,
    R: Rng + ?Sized,
{
    ensure_positive(shuffles_per_edge)?;
    let order = graph.order();
    let size = graph.size();

    // Swapping can empty or refill a type's partition; iterate over a snapshot.
    let types: Vec<T> = graph.edge_types().into_iter().collect();
    let mut total = 0usize;
    for edge_type in &types {
        let edges = graph.edges_of_type(edge_type);
        let scope = edges.len();
        let swaps = shuffle_scope(graph, edges, shuffles_per_edge, rng)?;
        total += swaps;
        debug!(swaps, edges = scope, edge_type = ?edge_type, "shuffled edges of one type");
    }

    if graph.order() != order {
        return Err(GraphError::invariant(
            "vertex-count-drift",
            "type-restricted shuffle changed the number of vertices",
        )
        .with_context("expected", order)
        .with_context("actual", graph.order()));
    }
    if graph.size() != size {
        return Err(GraphError::invariant(
            "edge-count-drift",
            "type-restricted shuffle changed the number of edges",
        )
        .with_context("expected", size)
        .with_context("actual", graph.size()));
    }
    Ok(total)
}

fn ensure_positive(shuffles_per_edge: usize) -> Result<(), GraphError> {
    if shuffles_per_edge < 1 {
        return Err(GraphError::invalid_argument(
            "non-positive-shuffles",
            "must shuffle at least once",
        )
        .with_context("shuffles_per_edge", shuffles_per_edge));
    }
    Ok(())
}

/// Swaps heads among `edges`, checking candidates against `graph`.
///
/// `edges` is owned so committed swaps can be written back in place; later
/// draws then see the replacement rather than the removed edge.
fn shuffle_scope<G, R>(
    graph: &mut G,
    mut edges: Vec<G::Edge>,
    shuffles_per_edge: usize,
    rng: &mut R,
) -> Result<usize, GraphError>
where
    G: Graph + ?Sized,
    R: Rng + ?Sized,
{
    let num_edges = edges.len();
    if num_edges < 2 {
        return Ok(0);
    }
    let original_size = graph.size();
    let mut committed = 0usize;

    for i in 0..num_edges {
        for _ in 0..shuffles_per_edge {
            let j = draw_partner(i, num_edges, rng);

            let e1 = random_orientation(&edges[i], rng);
            let e2 = random_orientation(&edges[j], rng);

            let swapped1 = e1.with_endpoints(e1.src(), e2.dst());
            let swapped2 = e2.with_endpoints(e2.src(), e1.dst());

            if graph.contains(&swapped1) || graph.contains(&swapped2) || swapped1 == swapped2 {
                continue;
            }
            if swapped1.is_self_loop() || swapped2.is_self_loop() {
                continue;
            }

            graph.remove(&edges[i])?;
            graph.remove(&edges[j])?;
            graph.add(swapped1.clone())?;
            graph.add(swapped2.clone())?;
            trace!(?swapped1, ?swapped2, "committed swap");

            edges[i] = swapped1;
            edges[j] = swapped2;
            committed += 1;

            let size = graph.size();
            if size != original_size {
                return Err(GraphError::invariant(
                    "edge-count-drift",
                    "swap changed the number of edges",
                )
                .with_context("expected", original_size)
                .with_context("actual", size)
                .with_context("edge", format!("{:?}", edges[i]))
                .with_context("partner", format!("{:?}", edges[j]))
                .with_hint("the graph's add/remove must reject duplicates and drop exactly one edge"));
            }
        }
    }
    Ok(committed)
}

/// Uniform draw over `0..n` excluding `i`.
fn draw_partner<R: Rng + ?Sized>(i: usize, n: usize, rng: &mut R) -> usize {
    let j = rng.gen_range(0..n - 1);
    if j >= i {
        j + 1
    } else {
        j
    }
}

/// Undirected edges are stored in an arbitrary orientation; flipping half of
/// them keeps vertices from only ever donating their `src` side.
fn random_orientation<E: Edge, R: Rng + ?Sized>(edge: &E, rng: &mut R) -> E {
    if !edge.is_directed() && rng.gen_bool(0.5) {
        edge.flip()
    } else {
        edge.clone()
    }
}
