use gtx_core::rng::RngHandle;
use gtx_graph::{
    gen_random_graph, shuffle_preserve_type_with_rng, shuffle_preserve_with_rng, SimpleEdge,
    SimpleTypedEdge, SparseGraph, SparseMultigraph,
};
use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use rand::Rng;

fn shuffle_bench(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(42);
    let graph: SparseGraph<SimpleEdge> =
        gen_random_graph(2_000, 8_000, &mut rng, |src, dst, _: &mut RngHandle| {
            SimpleEdge::new(src, dst)
        })
        .unwrap();
    c.bench_function("shuffle_2k_vertices_8k_edges", |b| {
        b.iter_batched(
            || (graph.clone(), RngHandle::from_seed(7)),
            |(mut graph, mut rng)| {
                let swaps = shuffle_preserve_with_rng(&mut graph, 1, &mut rng).unwrap();
                black_box(swaps);
            },
            BatchSize::LargeInput,
        );
    });

    let typed: SparseMultigraph<SimpleTypedEdge<u8>> =
        gen_random_graph(2_000, 8_000, &mut rng, |src, dst, rng: &mut RngHandle| {
            SimpleTypedEdge::new(src, dst, rng.gen_range(0..4u8))
        })
        .unwrap();
    c.bench_function("shuffle_by_type_4_types", |b| {
        b.iter_batched(
            || (typed.clone(), RngHandle::from_seed(7)),
            |(mut graph, mut rng)| {
                let swaps =
                    shuffle_preserve_type_with_rng::<u8, _, _>(&mut graph, 1, &mut rng).unwrap();
                black_box(swaps);
            },
            BatchSize::LargeInput,
        );
    });
}

criterion_group!(benches, shuffle_bench);
criterion_main!(benches);
