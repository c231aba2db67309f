//! Vectorized-library strategy.
//!
//! Hands the whole multiply-accumulate loop to `ndarray`. Conceptually the
//! first input is a `1×n` row and the second an `n×1` column, so the product
//! reduces to a single inner product. That is computed with the 1-D `dot`
//! (BLAS `ddot` when ndarray's `blas` feature is on), not the general matrix
//! multiply, which would pack both operands before multiplying.

use ndarray::ArrayView1;

/// Compute the dot product through `ndarray`'s inner-product routine.
///
/// Both inputs are truncated to their common length first. No data is copied;
/// the row and column are views over the input slices.
pub fn dot_vectorized(a: &[f64], b: &[f64]) -> f64 {
    let len = a.len().min(b.len());
    if len == 0 {
        return 0.0;
    }

    let row = ArrayView1::from(&a[..len]);
    let column = ArrayView1::from(&b[..len]);

    row.dot(&column)
}
