use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ipc_code::random_curve;
use ipc_core::RngHandle;

fn bench_identity(c: &mut Criterion) {
    let mut rng = RngHandle::from_seed(11);
    let curve = random_curve(8, &mut rng);
    let rotated = curve.rotated(curve.len() / 2);
    c.bench_function("equality_half_rotation", |b| {
        b.iter(|| black_box(curve == rotated))
    });
    c.bench_function("fingerprint", |b| b.iter(|| black_box(curve.fingerprint())));
    c.bench_function("whitney", |b| b.iter(|| black_box(curve.whitney())));
}

criterion_group!(benches, bench_identity);
criterion_main!(benches);
