//! Utility modules for generating inputs, timing and reporting.

pub mod cpu_affinity;
pub mod export;
pub mod report;
pub mod timer;
pub mod tui;
pub mod vectors;

// Re-export commonly used items
pub use cpu_affinity::CpuPinGuard;
pub use report::{speedup, Speedup, Speedups};
pub use timer::{SampleStats, TimingSample};
pub use vectors::{generate, generate_pair, VectorPair};

/// A named implementation variant, generic over its function signature.
pub struct VariantInfo<F> {
    /// Unique identifier for this variant (e.g., "elementwise")
    pub name: &'static str,
    /// Human-readable description
    pub description: &'static str,
    /// The specific implementation function
    pub function: F,
}

impl<F> std::fmt::Debug for VariantInfo<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VariantInfo")
            .field("name", &self.name)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
