//! Wall-clock comparison of the blocked transpose against the baseline.
//!
//! The strategies are tuned for simulated misses, not for a real CPU, so
//! this mostly guards against the blocked loops being pathologically slow.

use cachetrans::{Strategy, trans, transpose, transpose_with};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

const SHAPES: [(usize, usize); 4] = [(32, 32), (64, 64), (61, 67), (256, 256)];

fn bench_transpose(c: &mut Criterion) {
    let mut group = c.benchmark_group("transpose");

    for &(m, n) in &SHAPES {
        let a: Vec<i32> = (0..(n * m) as i32).collect();
        let mut b = vec![0; m * n];
        let label = format!("{}x{}", n, m);

        group.throughput(Throughput::Elements((m * n) as u64));

        group.bench_with_input(BenchmarkId::new("baseline", &label), &a, |bench, a| {
            bench.iter(|| trans(m, n, black_box(a), &mut b));
        });

        group.bench_with_input(BenchmarkId::new("blocked", &label), &a, |bench, a| {
            bench.iter(|| transpose(m, n, black_box(a), &mut b));
        });

        if Strategy::Square64.supports(m, n) {
            group.bench_with_input(BenchmarkId::new("quadrant", &label), &a, |bench, a| {
                bench.iter(|| transpose_with(Strategy::Square64, m, n, black_box(a), &mut b));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_transpose);
criterion_main!(benches);
