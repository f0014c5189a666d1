use std::thread;

use gtx_core::rng::RngHandle;
use gtx_core::{DirectedGraph, Graph, GraphError, Multigraph, VertexId};
use gtx_graph::{
    as_directed_graph, as_multigraph, degree_sequence, shuffle_preserve, shuffle_preserve_with_rng,
    synchronized_graph, unmodifiable, DirectedGraphAdaptor, SimpleDirectedEdge, SimpleEdge,
    SimpleTypedEdge, SparseDirectedGraph, SparseGraph, SparseMultigraph,
};

fn v(raw: u64) -> VertexId {
    VertexId::from_raw(raw)
}

#[test]
fn directed_graph_is_its_own_directed_view() {
    let mut graph = SparseDirectedGraph::from_edges([SimpleDirectedEdge::from_raw(0, 1)]);
    let address: *const SparseDirectedGraph<SimpleDirectedEdge> = &graph;
    let view = as_directed_graph(&mut graph);
    assert!(std::ptr::eq(&*view, address));
    assert_eq!(view.out_degree(v(0)).unwrap(), 1);
}

#[test]
fn multigraph_is_its_own_multigraph_view() {
    let mut graph = SparseMultigraph::from_edges([SimpleTypedEdge::from_raw(0, 1, 'x')]);
    let address: *const SparseMultigraph<SimpleTypedEdge<char>> = &graph;
    let view = as_multigraph::<char, _>(&mut graph);
    assert!(std::ptr::eq(&*view, address));
}

#[test]
fn undirected_graph_gets_orientation_from_stored_endpoints() {
    let mut graph = SparseGraph::from_edges([
        SimpleEdge::from_raw(0, 1),
        SimpleEdge::from_raw(2, 1),
        SimpleEdge::from_raw(1, 3),
    ]);
    let view: DirectedGraphAdaptor<'_, _> = as_directed_graph(&mut graph);

    assert_eq!(view.in_degree(v(1)).unwrap(), 2);
    assert_eq!(view.out_degree(v(1)).unwrap(), 1);
    assert_eq!(view.out_edges(v(2)).unwrap(), vec![SimpleEdge::from_raw(2, 1)]);
    assert!(view.in_edges(v(0)).unwrap().is_empty());
    assert!(matches!(view.in_edges(v(9)), Err(GraphError::Graph(_))));
}

#[test]
fn writes_through_an_adaptor_reach_the_graph() {
    let mut graph = SparseGraph::from_edges([SimpleEdge::from_raw(0, 1)]);
    {
        let mut view = as_directed_graph(&mut graph);
        assert!(view.add(SimpleEdge::from_raw(1, 2)).unwrap());
        assert!(view.remove(&SimpleEdge::from_raw(1, 0)).unwrap());
    }
    assert_eq!(graph.size(), 1);
    assert!(graph.contains(&SimpleEdge::from_raw(2, 1)));
}

#[test]
fn multigraph_view_partitions_by_type() {
    let mut graph = SparseGraph::from_edges([
        SimpleTypedEdge::from_raw(0, 1, "road"),
        SimpleTypedEdge::from_raw(0, 1, "rail"),
        SimpleTypedEdge::from_raw(1, 2, "road"),
    ]);
    assert_eq!(graph.size(), 3);

    let view = as_multigraph::<&str, _>(&mut graph);
    assert_eq!(view.edge_types().into_iter().collect::<Vec<_>>(), vec!["rail", "road"]);
    assert_eq!(view.edges_of_type(&"road").len(), 2);
    assert!(view.edges_of_type(&"air").is_empty());
}

#[test]
fn emptied_type_disappears_from_native_multigraph() {
    let mut graph = SparseMultigraph::from_edges([
        SimpleTypedEdge::from_raw(0, 1, 1u8),
        SimpleTypedEdge::from_raw(1, 2, 2u8),
    ]);
    graph.remove(&SimpleTypedEdge::from_raw(2, 1, 2u8)).unwrap();
    assert_eq!(graph.edge_types().into_iter().collect::<Vec<_>>(), vec![1u8]);
    graph.remove_vertex(v(0)).unwrap();
    assert!(graph.edge_types().is_empty());
}

#[test]
fn synchronized_handles_share_one_graph_across_threads() {
    let shared = synchronized_graph(SparseGraph::<SimpleEdge>::new());
    let workers: Vec<_> = (0..4u64)
        .map(|worker| {
            let mut handle = shared.clone();
            thread::spawn(move || {
                for offset in 0..10u64 {
                    let base = worker * 100 + offset * 2;
                    handle.add(SimpleEdge::from_raw(base, base + 1)).unwrap();
                }
            })
        })
        .collect();
    for worker in workers {
        worker.join().unwrap();
    }

    assert_eq!(shared.size(), 40);
    let graph = shared.try_unwrap().unwrap();
    assert_eq!(graph.order(), 80);
}

#[test]
fn shuffle_runs_through_a_synchronized_handle() {
    let mut edges = Vec::new();
    for a in 0..12u64 {
        edges.push(SimpleDirectedEdge::from_raw(a, (a + 1) % 12));
        edges.push(SimpleDirectedEdge::from_raw(a, (a + 5) % 12));
    }
    let mut shared = synchronized_graph(SparseDirectedGraph::from_edges(edges));
    let before = degree_sequence(&*shared.lock());

    let mut rng = RngHandle::from_seed(44);
    shuffle_preserve_with_rng(&mut shared, 3, &mut rng).unwrap();

    assert_eq!(degree_sequence(&*shared.lock()), before);
}

#[test]
fn poisoned_lock_is_recovered() {
    let shared = synchronized_graph(SparseGraph::from_edges([SimpleEdge::from_raw(0, 1)]));
    let handle = shared.clone();
    let outcome = thread::spawn(move || {
        let _guard = handle.lock();
        panic!("worker failed while holding the lock");
    })
    .join();
    assert!(outcome.is_err());
    assert_eq!(shared.size(), 1);
}

#[test]
fn unmodifiable_view_reads_but_rejects_writes() {
    let graph = SparseGraph::from_edges([SimpleEdge::from_raw(0, 1), SimpleEdge::from_raw(2, 3)]);
    let mut view = unmodifiable(&graph);

    assert_eq!(view.order(), 4);
    assert!(view.connects(v(1), v(0)));

    let err = view.add(SimpleEdge::from_raw(1, 2)).unwrap_err();
    assert!(matches!(err, GraphError::Graph(_)));
    assert_eq!(err.info().code, "read-only");
    assert_eq!(err.info().context.get("operation").map(String::as_str), Some("add"));
    assert!(view.add_vertex(v(7)).is_err());
    assert!(view.remove_vertex(v(0)).is_err());
}

#[test]
fn shuffling_an_unmodifiable_view_fails_without_changes() {
    let graph = SparseGraph::from_edges([SimpleEdge::from_raw(0, 1), SimpleEdge::from_raw(2, 3)]);
    let err = shuffle_preserve(&mut unmodifiable(&graph), 1).unwrap_err();
    assert_eq!(err.info().code, "read-only");
    assert_eq!(err.info().context.get("operation").map(String::as_str), Some("remove"));
    assert!(graph.contains(&SimpleEdge::from_raw(0, 1)));
    assert!(graph.contains(&SimpleEdge::from_raw(2, 3)));
}
