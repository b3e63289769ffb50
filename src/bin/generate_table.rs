//! Prints each value of the sequence and writes it as an array-initialiser
//! row to the fixed table file, stopping once a value reaches 2^64
//!

use std::fs::File;
use std::io::BufWriter;

use fib_perf_tools::prelude::*;

/// Generate the table file and echo each value to stdout
fn main() {
	tracing_subscriber::fmt()
		.with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
		.with_writer(std::io::stderr)
		.init();

	let file = File::create(TABLE_FILE).expect("Failed creating table file");
	let mut writer = TableWriter::new(BufWriter::new(file));
	for entry in FibSequence::new() {
		println!("{}", entry);
		writer.write_row(&entry).expect("Failed writing table row");
	}
	writer.finish().expect("Failed finalising table file");
}
