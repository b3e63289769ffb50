//! `use fib_perf_tools::prelude::*;` to import common structures and methods
//!

#[doc(hidden)]
pub use crate::fib::{iterative::*, lookup::*, recursive::*};

#[doc(hidden)]
pub use crate::table::*;
