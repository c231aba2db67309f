//! Speedup ratios.
//!
//! A ratio is only computed when its denominator is strictly above the
//! configured epsilon. Anything else is `Speedup::Undefined`.

use std::fmt;
use std::time::Duration;

use crate::math::dot_product::{AGGREGATION, ELEMENTWISE, VECTORIZED};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Speedup {
    Defined(f64),
    Undefined,
}

impl Speedup {
    pub fn value(&self) -> Option<f64> {
        match self {
            Speedup::Defined(v) => Some(*v),
            Speedup::Undefined => None,
        }
    }
}

impl fmt::Display for Speedup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speedup::Defined(v) => write!(f, "{:.2}x", v),
            Speedup::Undefined => f.write_str("undefined"),
        }
    }
}

/// `slower / faster`, or `Undefined` when `faster <= epsilon`.
pub fn speedup(slower: Duration, faster: Duration, epsilon: Duration) -> Speedup {
    if faster <= epsilon || faster.is_zero() {
        return Speedup::Undefined;
    }
    Speedup::Defined(slower.as_secs_f64() / faster.as_secs_f64())
}

/// The two ratios the harness reports
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Speedups {
    /// `elementwise / aggregation`
    pub aggregation_over_elementwise: Speedup,
    /// `min(elementwise, aggregation) / vectorized`
    pub vectorized_over_best_scalar: Speedup,
}

impl Speedups {
    /// Compute both ratios from the representative duration of each
    /// strategy. A ratio with a missing input is `Undefined`.
    pub fn compute(
        elementwise: Option<Duration>,
        aggregation: Option<Duration>,
        vectorized: Option<Duration>,
        epsilon: Duration,
    ) -> Self {
        let aggregation_over_elementwise = match (elementwise, aggregation) {
            (Some(e), Some(a)) => speedup(e, a, epsilon),
            _ => Speedup::Undefined,
        };

        let best_scalar = match (elementwise, aggregation) {
            (Some(e), Some(a)) => Some(e.min(a)),
            (e, a) => e.or(a),
        };
        let vectorized_over_best_scalar = match (best_scalar, vectorized) {
            (Some(s), Some(v)) => speedup(s, v, epsilon),
            _ => Speedup::Undefined,
        };

        Self {
            aggregation_over_elementwise,
            vectorized_over_best_scalar,
        }
    }

    /// Labelled lines, ready to print
    pub fn lines(&self) -> [(String, Speedup); 2] {
        [
            (
                format!("{} over {}", AGGREGATION, ELEMENTWISE),
                self.aggregation_over_elementwise,
            ),
            (
                format!("{} over fastest of {}/{}", VECTORIZED, ELEMENTWISE, AGGREGATION),
                self.vectorized_over_best_scalar,
            ),
        ]
    }
}

/// Relative error of `actual` against `expected`, absolute near zero.
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    let diff = (actual - expected).abs();
    if expected.abs() > 1e-12 {
        diff / expected.abs()
    } else {
        diff
    }
}
