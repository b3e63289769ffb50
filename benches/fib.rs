//! Compare the fib() implementations at the standard timing argument
//!

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use fib_perf_tools::prelude::*;

pub fn criterion_benchmark(c: &mut Criterion) {
	let mut group = c.benchmark_group("fib_20");
	group.bench_function("fib_recursive 20", |b| {
		b.iter(|| fib_recursive(black_box(20)))
	});
	group.bench_function("fib_iterative 20", |b| {
		b.iter(|| fib_iterative(black_box(20)))
	});
	group.bench_function("fib_lookup 20", |b| b.iter(|| fib_lookup(black_box(20))));
	group.bench_function("fib_const 20", |b| b.iter(|| fib_const(black_box(20))));
	// no black_box, lets the compiler fold the lookup down to a constant
	group.bench_function("fib_const const 20", |b| b.iter(|| fib_const(20)));
	group.finish();
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
