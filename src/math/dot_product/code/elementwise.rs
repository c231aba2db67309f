//! Elementwise-accumulation strategy.
//!
//! The naive baseline: one multiply and one accumulator update per element,
//! driven by an explicit index loop.

/// Compute the dot product with an explicit loop and a manual accumulator.
///
/// Elements are visited in index order. When the inputs differ in length the
/// loop stops at the shorter one.
///
/// # Example
/// ```
/// use dot_bench::math::dot_product::dot_elementwise;
///
/// let a = [1.0, 2.0, 3.0];
/// let b = [4.0, 5.0, 6.0];
/// assert_eq!(dot_elementwise(&a, &b), 32.0);
/// ```
#[allow(clippy::needless_range_loop)]
pub fn dot_elementwise(a: &[f64], b: &[f64]) -> f64 {
    let len = a.len().min(b.len());

    let mut acc = 0.0;
    for i in 0..len {
        acc += a[i] * b[i];
    }
    acc
}
