//! Wall-clock timing for the harness.
//!
//! - `TimingSample`: the `(start, end)` pair around one execution
//! - `measure!`: time an expression, keeping its value alive via `black_box`
//! - `SampleStats`: summary over the repetitions of one strategy

use std::time::{Duration, Instant};

/// Timestamps taken immediately before and after one computation.
#[derive(Clone, Copy, Debug)]
pub struct TimingSample {
    pub start: Instant,
    pub end: Instant,
}

impl TimingSample {
    /// Elapsed wall-clock time. Never negative: an `end` before `start`
    /// saturates to zero.
    pub fn elapsed(&self) -> Duration {
        self.end.saturating_duration_since(self.start)
    }
}

/// Time an expression, returning `(TimingSample, value)`.
///
/// ```
/// let (sample, value) = dot_bench::measure!(2 + 2);
/// assert_eq!(value, 4);
/// assert!(sample.end >= sample.start);
/// ```
#[macro_export]
macro_rules! measure {
    ($e:expr) => {{
        let start = ::std::time::Instant::now();
        let value = ::std::hint::black_box($e);
        let end = ::std::time::Instant::now();
        ($crate::utils::timer::TimingSample { start, end }, value)
    }};
}

/// Summary of the samples collected for one strategy
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleStats {
    /// Representative duration: the median sample
    pub median: Duration,
    pub mean: Duration,
    pub min: Duration,
    pub max: Duration,
    pub std_dev: Duration,
    pub samples: usize,
}

impl SampleStats {
    /// Summarize a set of durations. Returns `None` when there are none.
    pub fn from_durations(times: &[Duration]) -> Option<Self> {
        if times.is_empty() {
            return None;
        }

        let mut sorted = times.to_vec();
        sorted.sort();

        let nanos: Vec<f64> = times.iter().map(|t| t.as_nanos() as f64).collect();
        let mean_ns = nanos.iter().sum::<f64>() / nanos.len() as f64;
        let variance = if nanos.len() < 2 {
            0.0
        } else {
            nanos
                .iter()
                .map(|n| {
                    let diff = n - mean_ns;
                    diff * diff
                })
                .sum::<f64>()
                / (nanos.len() - 1) as f64
        };

        Some(Self {
            median: calculate_median(&sorted),
            mean: Duration::from_nanos(mean_ns as u64),
            min: sorted[0],
            max: sorted[sorted.len() - 1],
            std_dev: Duration::from_nanos(variance.sqrt() as u64),
            samples: times.len(),
        })
    }

    /// Coefficient of variation (std_dev / mean), 0 for a zero mean
    pub fn cv(&self) -> f64 {
        let mean = self.mean.as_nanos() as f64;
        if mean > 0.0 {
            self.std_dev.as_nanos() as f64 / mean
        } else {
            0.0
        }
    }
}

/// Median of an already sorted slice (upper median for even lengths).
fn calculate_median(sorted: &[Duration]) -> Duration {
    sorted.get(sorted.len() / 2).copied().unwrap_or(Duration::ZERO)
}

/// Format a duration as seconds with enough precision for short runs
pub fn format_seconds(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs >= 1.0 {
        format!("{:.3} s", secs)
    } else if secs >= 1e-3 {
        format!("{:.3} ms", secs * 1e3)
    } else if secs >= 1e-6 {
        format!("{:.3} µs", secs * 1e6)
    } else {
        format!("{} ns", d.as_nanos())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measure_returns_value() {
        let (sample, value) = crate::measure!((0..1000u64).sum::<u64>());
        assert_eq!(value, 499_500);
        assert!(sample.end >= sample.start);
    }

    #[test]
    fn test_elapsed_never_negative() {
        let earlier = Instant::now();
        let later = earlier + Duration::from_millis(5);
        let backwards = TimingSample {
            start: later,
            end: earlier,
        };
        assert_eq!(backwards.elapsed(), Duration::ZERO);

        let forwards = TimingSample {
            start: earlier,
            end: later,
        };
        assert_eq!(forwards.elapsed(), Duration::from_millis(5));
    }

    #[test]
    fn test_stats_empty() {
        assert_eq!(SampleStats::from_durations(&[]), None);
    }

    #[test]
    fn test_stats_single_sample() {
        let stats = SampleStats::from_durations(&[Duration::from_micros(10)]).unwrap();
        assert_eq!(stats.median, Duration::from_micros(10));
        assert_eq!(stats.min, stats.max);
        assert_eq!(stats.std_dev, Duration::ZERO);
        assert_eq!(stats.samples, 1);
    }

    #[test]
    fn test_stats_multiple_samples() {
        let times = [30, 10, 20, 50, 40].map(Duration::from_nanos);
        let stats = SampleStats::from_durations(&times).unwrap();
        assert_eq!(stats.median, Duration::from_nanos(30));
        assert_eq!(stats.mean, Duration::from_nanos(30));
        assert_eq!(stats.min, Duration::from_nanos(10));
        assert_eq!(stats.max, Duration::from_nanos(50));
        // sample variance = 1000 / 4 = 250, sqrt ≈ 15.8
        assert_eq!(stats.std_dev, Duration::from_nanos(15));
        assert!((stats.cv() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_format_seconds() {
        assert_eq!(format_seconds(Duration::from_millis(1500)), "1.500 s");
        assert_eq!(format_seconds(Duration::from_micros(2500)), "2.500 ms");
        assert_eq!(format_seconds(Duration::from_nanos(2500)), "2.500 µs");
        assert_eq!(format_seconds(Duration::from_nanos(12)), "12 ns");
    }
}
