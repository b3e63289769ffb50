//! Generate the full table into a buffer and check the produced bytes
//!

use fib_perf_tools::prelude::*;

/// Run the generation loop into a buffer the same way the `generate_table`
/// binary runs it into the table file
fn generate() -> Vec<u8> {
	let mut writer = TableWriter::new(Vec::new());
	for entry in FibSequence::new() {
		writer.write_row(&entry).unwrap();
	}
	writer.finish().unwrap()
}

#[test]
fn table_starts_with_the_first_computed_values() {
	let bytes = generate();
	let text = String::from_utf8(bytes).unwrap();
	assert!(text.starts_with("    2, // 2\n    3, // 3\n    5, // 4\n"));
}

#[test]
fn table_ends_with_the_overflowing_value_and_one_blank_line() {
	let bytes = generate();
	let text = String::from_utf8(bytes).unwrap();
	assert!(text.ends_with("    19740274219868223167, // 93\n\n"));
	assert!(!text.ends_with("\n\n\n"));
}

#[test]
fn table_holds_one_row_per_generated_value() {
	let bytes = generate();
	let text = String::from_utf8(bytes).unwrap();
	let rows: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
	assert_eq!(92, rows.len());
}

#[test]
fn rows_below_the_limit_match_the_lookup_table() {
	for entry in FibSequence::new() {
		if entry.value < U64_LIMIT {
			assert_eq!(u128::from(fib_lookup(u64::from(entry.index))), entry.value);
		}
	}
}

#[test]
fn generation_is_deterministic() {
	assert_eq!(generate(), generate());
}

#[test]
fn stdout_lines_render_index_and_value() {
	let lines: Vec<String> = FibSequence::new().take(3).map(|e| e.to_string()).collect();
	assert_eq!(
		vec!["fib(2) -> 2", "fib(3) -> 3", "fib(4) -> 5"],
		lines
	);
}
