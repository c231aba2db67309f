//! Strategy registry.
//!
//! Holds the dot product strategies by name so the harness and the CLI can
//! list, select and cross-check them without knowing the concrete functions.

use crate::error::{HarnessError, Result};
use crate::math::dot_product::{self, DotProductFn, ELEMENTWISE};
use crate::utils::report::relative_error;
use crate::utils::vectors::{generate_pair, seeded_rng};
use crate::utils::VariantInfo;

/// A named dot product implementation
pub type Strategy = VariantInfo<DotProductFn>;

/// Registry of all strategies, in registration order
pub struct StrategyRegistry {
    strategies: Vec<Strategy>,
}

impl StrategyRegistry {
    /// Create a new empty registry
    pub fn new() -> Self {
        Self {
            strategies: Vec::new(),
        }
    }

    pub fn register(&mut self, strategy: Strategy) {
        self.strategies.push(strategy);
    }

    pub fn all(&self) -> &[Strategy] {
        &self.strategies
    }

    /// Find strategy by name
    pub fn find(&self, name: &str) -> Option<&Strategy> {
        self.strategies.iter().find(|s| s.name == name)
    }

    pub fn list_names(&self) -> Vec<&'static str> {
        self.strategies.iter().map(|s| s.name).collect()
    }

    /// Resolve a name filter. An empty filter selects every strategy;
    /// selection keeps registration order regardless of filter order.
    pub fn select(&self, names: &[String]) -> Result<Vec<&Strategy>> {
        if names.is_empty() {
            return Ok(self.strategies.iter().collect());
        }
        if let Some(unknown) = names.iter().find(|n| self.find(n.as_str()).is_none()) {
            return Err(HarnessError::UnknownStrategy(unknown.clone()));
        }
        Ok(self
            .strategies
            .iter()
            .filter(|s| names.iter().any(|n| n == s.name))
            .collect())
    }

    /// Check every strategy against `elementwise` on a seeded random pair.
    pub fn verify(&self, len: usize, seed: u64, tolerance: f64) -> Result<()> {
        let reference = self
            .find(ELEMENTWISE)
            .ok_or_else(|| HarnessError::UnknownStrategy(ELEMENTWISE.to_string()))?;

        let pair = generate_pair(len, &mut seeded_rng(seed))?;
        let expected = (reference.function)(pair.a(), pair.b());

        for strategy in &self.strategies {
            let actual = (strategy.function)(pair.a(), pair.b());
            if relative_error(actual, expected) > tolerance {
                return Err(HarnessError::Verification {
                    strategy: strategy.name,
                    expected,
                    actual,
                });
            }
            tracing::debug!(strategy = strategy.name, actual, expected, "verified");
        }

        Ok(())
    }
}

impl Default for StrategyRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the default registry with all strategies
pub fn build_registry() -> StrategyRegistry {
    let mut registry = StrategyRegistry::new();
    for strategy in dot_product::available_variants() {
        registry.register(strategy);
    }
    registry
}
