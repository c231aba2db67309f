//! Error type for the benchmark harness.

use std::collections::TryReserveError;

pub type Result<T> = std::result::Result<T, HarnessError>;

#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("cannot allocate a vector of {len} f64 values: {source}")]
    Allocation {
        len: usize,
        #[source]
        source: TryReserveError,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("unknown strategy '{0}'")]
    UnknownStrategy(String),

    #[error("strategy '{strategy}' failed verification: expected {expected}, got {actual}")]
    Verification {
        strategy: &'static str,
        expected: f64,
        actual: f64,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
