//! # dot-bench
//!
//! Times one dot product computed three ways (an explicit elementwise loop,
//! a built-in aggregation, and a vectorized library call) on the same pair
//! of random vectors, and reports how much faster each approach is.

pub mod config;
pub mod error;
pub mod math;
pub mod registry;
pub mod utils;

/// Re-export tui from utils
pub use utils::tui;

pub use config::HarnessConfig;
pub use error::{HarnessError, Result};

/// Re-export commonly used items
pub mod prelude {
    pub use crate::config::HarnessConfig;
    pub use crate::error::{HarnessError, Result};
    pub use crate::math::dot_product::{self, run_harness, HarnessRun};
    pub use crate::registry::{build_registry, Strategy, StrategyRegistry};
}
