//! Criterion benchmarks for ring and compound centroids.
//! Focus sizes: n in {4, 16, 64, 256, 1024} vertices per ring.
//! Results: by default under target/criterion.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use ringcentroid::api::{
    compound_centroid, draw_ring_radial, ring_centroid_and_area, RadialCfg, RingReplay,
    VertexCount,
};

fn ring(n: usize, index: u64) -> Vec<nalgebra::Vector2<f64>> {
    let cfg = RadialCfg {
        vertex_count: VertexCount::Fixed(n),
        ..RadialCfg::default()
    };
    draw_ring_radial(cfg, RingReplay { seed: 43, index })
}

fn bench_centroid(c: &mut Criterion) {
    let mut group = c.benchmark_group("centroid");
    for &n in &[4usize, 16, 64, 256, 1024] {
        let r = ring(n, 0);
        group.bench_with_input(BenchmarkId::new("ring", n), &r, |b, r| {
            b.iter(|| ring_centroid_and_area(criterion::black_box(r)).unwrap())
        });

        let parts: Vec<_> = (0..8).map(|i| ring(n, i)).collect();
        group.bench_with_input(BenchmarkId::new("compound8", n), &parts, |b, parts| {
            b.iter(|| compound_centroid(criterion::black_box(parts)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_centroid);
criterion_main!(benches);
