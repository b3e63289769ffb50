//! Implementations of a naive Fibonacci recurrence for timing experiments and a generator producing its values as a source-file lookup table
//!

pub mod fib;
pub mod table;

pub mod prelude;
