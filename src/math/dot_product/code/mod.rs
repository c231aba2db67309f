//! Dot product implementations.
//!
//! This module contains the three strategies the harness compares.

mod aggregation;
mod elementwise;
mod vectorized;

pub use aggregation::dot_aggregation;
pub use elementwise::dot_elementwise;
pub use vectorized::dot_vectorized;

use crate::utils::VariantInfo;

/// Explicit loop with a manual accumulator
pub const ELEMENTWISE: &str = "elementwise";
/// Single declarative fold over pairwise products
pub const AGGREGATION: &str = "aggregation";
/// Row × column product through a linear-algebra library
pub const VECTORIZED: &str = "vectorized";

/// Type alias for dot product function signature
pub type DotProductFn = fn(&[f64], &[f64]) -> f64;

/// All strategies, slowest-expected first. `elementwise` is the reference.
pub fn available_variants() -> Vec<VariantInfo<DotProductFn>> {
    vec![
        VariantInfo {
            name: ELEMENTWISE,
            description: "Explicit index loop with a manual accumulator",
            function: dot_elementwise,
        },
        VariantInfo {
            name: AGGREGATION,
            description: "zip/map/sum over lazily produced products",
            function: dot_aggregation,
        },
        VariantInfo {
            name: VECTORIZED,
            description: "ndarray row x column dot",
            function: dot_vectorized,
        },
    ]
}
