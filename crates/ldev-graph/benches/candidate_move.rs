use criterion::{criterion_group, criterion_main, BatchSize, Criterion};
use ldev_core::RngHandle;
use ldev_graph::{ErPolicy, GraphState};

fn bench_candidate_revert(c: &mut Criterion) {
    let n = 128;
    let policy = ErPolicy::new(1.0, n);
    let mut rng = RngHandle::from_seed(0xC0FFEE);
    let mut graph = GraphState::new(n, false, false).unwrap();
    graph.generate_random(&policy, &mut rng);

    c.bench_function("candidate_then_revert_n128", |b| {
        b.iter_batched(
            || (graph.clone(), rng.clone()),
            |(mut graph, mut rng)| {
                let (vertex, undo) = graph.candidate(&policy, &mut rng);
                graph.revert(vertex, undo);
                graph
            },
            BatchSize::SmallInput,
        )
    });

    c.bench_function("largest_component_n128", |b| {
        b.iter_batched(
            || {
                let mut fresh = graph.clone();
                let mut rng = rng.clone();
                let _ = fresh.candidate(&policy, &mut rng);
                fresh
            },
            |mut fresh| fresh.largest_component_size(),
            BatchSize::SmallInput,
        )
    });
}

criterion_group!(benches, bench_candidate_revert);
criterion_main!(benches);
