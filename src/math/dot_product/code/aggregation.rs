//! Built-in-aggregation strategy.

/// Compute the dot product as a single fold over lazily produced products.
///
/// Same truncation and summation order as [`super::dot_elementwise`], without
/// the accumulator bookkeeping.
pub fn dot_aggregation(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
