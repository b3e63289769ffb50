//! Generates the sequence as array-initialiser rows for embedding in a source file.
//!
//! Walking the sequence from the seed pair `(1, 1)` produces every value up
//! to and including the first one to reach 2^64, which is why values are
//! carried as `u128` - the terminal entry does not fit in a `u64`. Rows are
//! written in the shape `    <value>, // <index>` so the produced file can
//! be pasted straight into an array declaration such as
//! [crate::fib::lookup::FIB_TABLE].
//!

use std::fmt;
use std::io::Write;

use tracing::debug;

/// First value that no longer fits in 64 bits, generation stops once a value reaches it
pub const U64_LIMIT: u128 = 1 << 64;

/// Fixed name of the file the table rows are written to
pub const TABLE_FILE: &str = "x.rs";

/// A generated value paired with its 1-based position in the sequence
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct TableEntry {
	/// 1-based position. The seed pair occupies positions 1 and earlier so the first computed entry has index 2
	pub index: u32,
	/// The value at `index`
	pub value: u128,
}

impl TableEntry {
	/// The array-initialiser row written to [TABLE_FILE], without a line terminator
	pub fn table_row(&self) -> String {
		format!("    {}, // {}", self.value, self.index)
	}
}

impl fmt::Display for TableEntry {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		write!(f, "fib({}) -> {}", self.index, self.value)
	}
}

/// Walks the sequence from the seed pair, yielding each computed value with
/// its position until the first value to reach [U64_LIMIT] has been yielded
#[derive(Debug, Clone)]
pub struct FibSequence {
	/// Most recently computed value
	current: u128,
	/// Value preceding `current`
	previous: u128,
	/// Position of `current` in the sequence
	count: u32,
}

impl FibSequence {
	/// Create a sequence positioned at the seed pair
	pub fn new() -> Self {
		FibSequence {
			current: 1,
			previous: 1,
			count: 1,
		}
	}
}

impl Default for FibSequence {
	fn default() -> Self {
		FibSequence::new()
	}
}

impl Iterator for FibSequence {
	type Item = TableEntry;
	fn next(&mut self) -> Option<TableEntry> {
		if self.current >= U64_LIMIT {
			return None;
		}
		let next = self.current + self.previous;
		self.previous = self.current;
		self.current = next;
		self.count += 1;
		Some(TableEntry {
			index: self.count,
			value: next,
		})
	}
}

/// Writes entries as the rows of an array-initialiser fragment
#[derive(Debug)]
pub struct TableWriter<W: Write> {
	/// Destination of the rows
	sink: W,
	/// Number of rows written so far
	rows: u32,
}

impl<W: Write> TableWriter<W> {
	/// Wrap a sink ready to receive rows
	pub fn new(sink: W) -> Self {
		TableWriter { sink, rows: 0 }
	}
	/// Append one row and its line break
	pub fn write_row(&mut self, entry: &TableEntry) -> std::io::Result<()> {
		writeln!(self.sink, "{}", entry.table_row())?;
		self.rows += 1;
		Ok(())
	}
	/// Terminate the fragment with a single blank line, flush and hand the sink back
	pub fn finish(mut self) -> std::io::Result<W> {
		writeln!(self.sink)?;
		self.sink.flush()?;
		debug!("Wrote {} table rows", self.rows);
		Ok(self.sink)
	}
}
