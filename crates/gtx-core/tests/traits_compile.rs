use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use gtx_core::errors::{ErrorInfo, GraphError};
use gtx_core::rng::RngHandle;
use gtx_core::{DirectedGraph, Edge, Graph, Indexer, Multigraph, VertexId};
use rand::RngCore;

#[derive(Debug, Clone, Copy)]
struct Link {
    src: VertexId,
    dst: VertexId,
    directed: bool,
}

impl Link {
    fn new(src: u64, dst: u64, directed: bool) -> Self {
        Self {
            src: VertexId::from_raw(src),
            dst: VertexId::from_raw(dst),
            directed,
        }
    }

    fn key(&self) -> (bool, VertexId, VertexId) {
        if self.directed {
            (true, self.src, self.dst)
        } else {
            (false, self.src.min(self.dst), self.src.max(self.dst))
        }
    }
}

impl PartialEq for Link {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Link {}

impl PartialOrd for Link {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Link {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl Hash for Link {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl Edge for Link {
    fn src(&self) -> VertexId {
        self.src
    }

    fn dst(&self) -> VertexId {
        self.dst
    }

    fn is_directed(&self) -> bool {
        self.directed
    }

    fn with_endpoints(&self, src: VertexId, dst: VertexId) -> Self {
        Self {
            src,
            dst,
            directed: self.directed,
        }
    }
}

#[derive(Default)]
struct DummyGraph {
    vertices: BTreeSet<VertexId>,
    edges: BTreeSet<Link>,
}

impl Graph for DummyGraph {
    type Edge = Link;

    fn order(&self) -> usize {
        self.vertices.len()
    }

    fn size(&self) -> usize {
        self.edges.len()
    }

    fn vertices(&self) -> Box<dyn ExactSizeIterator<Item = VertexId> + '_> {
        Box::new(self.vertices.iter().copied())
    }

    fn edges(&self) -> Box<dyn ExactSizeIterator<Item = Link> + '_> {
        Box::new(self.edges.iter().copied())
    }

    fn adjacency_list(&self, vertex: VertexId) -> Result<Vec<Link>, GraphError> {
        if !self.vertices.contains(&vertex) {
            return Err(GraphError::graph("unknown-vertex", "vertex does not exist")
                .with_context("vertex", vertex.as_raw()));
        }
        Ok(self.edges.iter().filter(|e| e.touches(vertex)).copied().collect())
    }

    fn contains_vertex(&self, vertex: VertexId) -> bool {
        self.vertices.contains(&vertex)
    }

    fn contains(&self, edge: &Link) -> bool {
        self.edges.contains(edge)
    }

    fn connects(&self, src: VertexId, dst: VertexId) -> bool {
        self.edges
            .iter()
            .any(|e| (e.src == src && e.dst == dst) || (!e.directed && e.src == dst && e.dst == src))
    }

    fn add_vertex(&mut self, vertex: VertexId) -> Result<bool, GraphError> {
        Ok(self.vertices.insert(vertex))
    }

    fn add(&mut self, edge: Link) -> Result<bool, GraphError> {
        self.vertices.insert(edge.src);
        self.vertices.insert(edge.dst);
        Ok(self.edges.insert(edge))
    }

    fn remove(&mut self, edge: &Link) -> Result<bool, GraphError> {
        Ok(self.edges.remove(edge))
    }

    fn remove_vertex(&mut self, vertex: VertexId) -> Result<bool, GraphError> {
        self.edges.retain(|e| !e.touches(vertex));
        Ok(self.vertices.remove(&vertex))
    }
}

impl DirectedGraph for DummyGraph {
    fn in_edges(&self, vertex: VertexId) -> Result<Vec<Link>, GraphError> {
        Ok(self.adjacency_list(vertex)?.into_iter().filter(|e| e.dst == vertex).collect())
    }

    fn out_edges(&self, vertex: VertexId) -> Result<Vec<Link>, GraphError> {
        Ok(self.adjacency_list(vertex)?.into_iter().filter(|e| e.src == vertex).collect())
    }
}

impl Multigraph<bool> for DummyGraph {
    fn edge_types(&self) -> BTreeSet<bool> {
        self.edges.iter().map(|e| e.directed).collect()
    }

    fn edges_of_type(&self, edge_type: &bool) -> Vec<Link> {
        self.edges.iter().filter(|e| e.directed == *edge_type).copied().collect()
    }
}

#[derive(Default)]
struct VecIndexer(Vec<Link>);

impl Indexer<Link> for VecIndexer {
    fn index(&mut self, item: &Link) -> usize {
        match self.find(item) {
            Some(idx) => idx,
            None => {
                self.0.push(*item);
                self.0.len() - 1
            }
        }
    }

    fn find(&self, item: &Link) -> Option<usize> {
        self.0.iter().position(|known| known == item)
    }

    fn lookup(&self, index: usize) -> Option<&Link> {
        self.0.get(index)
    }

    fn len(&self) -> usize {
        self.0.len()
    }
}

fn accepts_trait_objects(graph: &mut dyn Graph<Edge = Link>, indexer: &mut dyn Indexer<Link>) {
    graph.add(Link::new(0, 1, false)).unwrap();
    let edges: Vec<_> = graph.edges().collect();
    for edge in &edges {
        let _ = indexer.index(edge);
    }
    assert_eq!(indexer.len(), graph.size());
}

fn order_through_reference<G: Graph>(mut graph: G) -> usize {
    graph.add_vertex(VertexId::from_raw(42)).unwrap();
    graph.order()
}

#[test]
fn trait_objects_are_object_safe() {
    let mut graph = DummyGraph::default();
    let mut indexer = VecIndexer::default();
    accepts_trait_objects(&mut graph, &mut indexer);
    assert!(!indexer.is_empty());
}

#[test]
fn mutable_references_are_graphs() {
    let mut graph = DummyGraph::default();
    graph.add(Link::new(3, 4, true)).unwrap();
    assert_eq!(order_through_reference(&mut graph), 3);
    let view = &mut graph;
    assert_eq!(view.out_degree(VertexId::from_raw(3)).unwrap(), 1);
    assert_eq!(view.in_degree(VertexId::from_raw(3)).unwrap(), 0);
    assert_eq!(view.edge_types().len(), 1);
}

#[test]
fn undirected_edges_ignore_orientation() {
    let forward = Link::new(1, 2, false);
    let backward = forward.flip();
    assert_eq!(backward.src(), VertexId::from_raw(2));
    assert_eq!(forward, backward);
    assert_eq!(backward.canonical().src(), VertexId::from_raw(1));

    let directed = Link::new(2, 1, true);
    assert_ne!(directed, directed.flip());
    assert_eq!(directed.canonical().src(), VertexId::from_raw(2));
    assert!(Link::new(5, 5, true).is_self_loop());
}

#[test]
fn rng_handle_compiles() {
    let mut rng = RngHandle::from_seed(42);
    let _ = rng.next_u64();
    let mut unseeded = RngHandle::from_entropy();
    let _ = unseeded.inner_mut().next_u32();
}

#[test]
fn error_info_formatting() {
    let info = ErrorInfo::new("E001", "problem").with_context("vertex", 1);
    let err = GraphError::Graph(info.clone());
    assert_eq!(err.info(), &info);
    assert_eq!(
        err.to_string(),
        "graph error: problem (code: E001) | context: [vertex=1]"
    );
}
