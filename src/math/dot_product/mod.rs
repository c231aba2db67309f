//! # Dot Product
//!
//! The dot product computes the sum of products of corresponding elements in
//! two vectors:
//!
//! `dot(a, b) = Σ(a[i] * b[i])`
//!
//! ## Strategies
//!
//! - **elementwise**: explicit index loop, manual accumulator (the baseline)
//! - **aggregation**: one `zip`/`map`/`sum` fold over lazily produced products
//! - **vectorized**: row × column product delegated to `ndarray`
//!
//! All three truncate to the shorter input and return `0.0` for empty input.

pub mod bench;
pub mod code;
pub mod test;

pub use bench::{run_harness, run_on_pair, HarnessRun, StrategyOutcome};
pub use code::*;
