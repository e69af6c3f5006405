//! Benchmarks for kriging interpolation

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use terrakrige_algorithms::interpolation::{
    Sample, VariogramParams, empirical_semivariogram, predict_surface,
};

fn scatter_samples(count: usize, extent: f64) -> Vec<Sample> {
    let mut seed = 0xB5AD_4ECE_DA1C_E2A9_u64;
    let mut next = || {
        seed = seed
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        (seed >> 33) as f64 / (1u64 << 31) as f64
    };

    (0..count)
        .map(|_| {
            let x = next() * extent;
            let y = next() * extent;
            let z = (x / 11.0).sin() * 8.0 + (y / 13.0).cos() * 8.0 + 0.1 * x;
            Sample::new(x, y, z)
        })
        .collect()
}

fn bench_predict_surface(c: &mut Criterion) {
    let mut group = c.benchmark_group("predict_surface_64x64");
    let samples = scatter_samples(40, 64.0);
    let params = VariogramParams::new(0.5, 20.0, 32.0);

    for stride in [1usize, 2, 4].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(stride), stride, |b, &stride| {
            b.iter(|| {
                predict_surface(64, 64, black_box(&samples), &params, stride).unwrap()
            })
        });
    }

    group.finish();
}

fn bench_empirical_semivariogram(c: &mut Criterion) {
    let mut group = c.benchmark_group("empirical_semivariogram");

    for count in [50usize, 200, 400].iter() {
        let samples = scatter_samples(*count, 100.0);

        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, _| {
            b.iter(|| empirical_semivariogram(black_box(&samples), 5.0).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_predict_surface, bench_empirical_semivariogram);
criterion_main!(benches);
