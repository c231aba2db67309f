//! Harness configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{HarnessError, Result};

/// Vector length used by the classic demonstration (10^8 elements).
pub const DEFAULT_LEN: usize = 100_000_000;

/// Configuration for one harness run
#[derive(Clone, Debug)]
pub struct HarnessConfig {
    /// Length of each input vector
    pub len: usize,
    /// Timed executions per strategy (default: 1, a single measurement)
    pub repetitions: usize,
    /// Untimed executions per strategy before measuring (default: 0)
    pub warmup_iterations: usize,
    /// RNG seed; derived from the clock when unset
    pub seed: Option<u64>,
    /// Ratios whose denominator is at or below this are reported as undefined
    pub epsilon: Duration,
    /// Maximum relative error tolerated between strategies
    pub tolerance: f64,
    /// Randomize the (strategy, repetition) execution order
    pub shuffle: bool,
    /// Pin the measuring thread to its current core
    pub pin: bool,
    /// Restrict the run to these strategies (all when empty)
    pub only: Vec<String>,
    /// Write raw samples to this CSV file
    pub csv_path: Option<PathBuf>,
}

impl Default for HarnessConfig {
    fn default() -> Self {
        Self {
            len: DEFAULT_LEN,
            repetitions: 1,
            warmup_iterations: 0,
            seed: None,
            epsilon: Duration::from_nanos(1),
            tolerance: 1e-6,
            shuffle: false,
            pin: true,
            only: Vec::new(),
            csv_path: None,
        }
    }
}

impl HarnessConfig {
    /// Reject configurations the harness cannot run.
    pub fn validate(&self) -> Result<()> {
        if self.len == 0 {
            return Err(HarnessError::InvalidConfig("len must be > 0".into()));
        }
        if self.repetitions == 0 {
            return Err(HarnessError::InvalidConfig(
                "repetitions must be > 0".into(),
            ));
        }
        if !self.tolerance.is_finite() || self.tolerance < 0.0 {
            return Err(HarnessError::InvalidConfig(format!(
                "tolerance must be a finite non-negative number, got {}",
                self.tolerance
            )));
        }
        Ok(())
    }
}
