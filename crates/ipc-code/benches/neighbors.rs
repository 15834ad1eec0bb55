use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ipc_code::{random_curve, Curve};
use ipc_core::RngHandle;

fn sample_curves() -> Vec<Curve> {
    (0..8)
        .map(|seed| {
            let mut rng = RngHandle::from_seed(seed);
            random_curve(6, &mut rng)
        })
        .collect()
}

fn bench_neighbors(c: &mut Criterion) {
    let curves = sample_curves();
    c.bench_function("neighbors_random_walk_6", |b| {
        b.iter(|| {
            for curve in &curves {
                black_box(curve.neighbors().count());
            }
        })
    });
    let kinked = Curve::canonical(12);
    c.bench_function("increasing_j_canonical_12", |b| {
        b.iter(|| black_box(kinked.increasing_j_neighbors().count()))
    });
}

criterion_group!(benches, bench_neighbors);
criterion_main!(benches);
