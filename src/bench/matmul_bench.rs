//! Criterion benchmarks: sequential baseline vs row-split threads.

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use parmul::matrix::init::fill_operands;
use parmul::{multiply, multiply_parallel};
use std::hint::black_box;

fn bench_square_sizes(crit: &mut Criterion) {
    let mut group = crit.benchmark_group("square_matmul");

    for &size in &[64usize, 128, 256] {
        let mut a = vec![0usize; size * size];
        let mut b = vec![0usize; size * size];
        fill_operands(&mut a, &mut b);

        // One multiply-add per k step, d^3 of them.
        group.throughput(Throughput::Elements((size * size * size) as u64));

        group.bench_with_input(BenchmarkId::new("sequential", size), &size, |bench, &d| {
            let mut c = vec![0usize; d * d];
            bench.iter(|| {
                multiply(&a, &b, &mut c, d);
                black_box(&c);
            });
        });

        for &threads in &[2usize, 4, 8] {
            group.bench_with_input(
                BenchmarkId::new(format!("rows_mt_{threads}"), size),
                &size,
                |bench, &d| {
                    let mut c = vec![0usize; d * d];
                    bench.iter(|| {
                        multiply_parallel(&a, &b, &mut c, d, threads);
                        black_box(&c);
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_square_sizes);
criterion_main!(benches);
