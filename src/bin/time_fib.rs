//! Times the naive recursive fib() and reports the mean per-call duration
//!

use std::hint::black_box;
use std::time::Instant;

use fib_perf_tools::prelude::*;

/// Number of timed invocations, the reported duration is the mean across all of them
const REPETITIONS: u32 = 5000;

/// Argument passed to every timed invocation
const TIMED_ARG: u64 = 20;

/// Run the timing loop and print the mean per-call duration in microseconds
fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let start = Instant::now();
	for _ in 0..REPETITIONS {
		black_box(fib_recursive(black_box(TIMED_ARG)));
	}
	let elapsed = start.elapsed();

	let mean_micros = elapsed.as_secs_f64() / f64::from(REPETITIONS) * 1_000_000.0;
	println!("fib({}) took {:.1} microseconds", TIMED_ARG, mean_micros);
}
