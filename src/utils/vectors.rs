//! Random input vectors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::{HarnessError, Result};

/// The two read-only input vectors of a run.
///
/// Fields are private so the vectors cannot be mutated between strategies.
#[derive(Clone, Debug, PartialEq)]
pub struct VectorPair {
    a: Vec<f64>,
    b: Vec<f64>,
}

impl VectorPair {
    /// Wrap existing vectors. Lengths may differ; strategies truncate.
    pub fn from_vecs(a: Vec<f64>, b: Vec<f64>) -> Self {
        Self { a, b }
    }

    pub fn a(&self) -> &[f64] {
        &self.a
    }

    pub fn b(&self) -> &[f64] {
        &self.b
    }

    /// Number of element pairs every strategy will visit
    pub fn common_len(&self) -> usize {
        self.a.len().min(self.b.len())
    }

    /// Bytes held by both vectors
    pub fn footprint_bytes(&self) -> usize {
        (self.a.len() + self.b.len()) * std::mem::size_of::<f64>()
    }
}

/// Build the harness RNG from an explicit seed.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Get a seed from current time for randomization
pub fn time_seed() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x12345678)
}

/// Generate one vector of `len` uniform values in `[0, 1)`.
///
/// Storage is reserved before any value is drawn, so an impossible length
/// fails up front instead of leaving a partially filled vector.
pub fn uniform_vector<R: Rng>(len: usize, rng: &mut R) -> Result<Vec<f64>> {
    let mut values = Vec::new();
    values
        .try_reserve_exact(len)
        .map_err(|source| HarnessError::Allocation { len, source })?;
    values.extend((0..len).map(|_| rng.random::<f64>()));
    Ok(values)
}

/// Generate `count` independent vectors of `len` uniform values.
pub fn generate<R: Rng>(count: usize, len: usize, rng: &mut R) -> Result<Vec<Vec<f64>>> {
    (0..count).map(|_| uniform_vector(len, rng)).collect()
}

/// Generate the input pair for a run.
pub fn generate_pair<R: Rng>(len: usize, rng: &mut R) -> Result<VectorPair> {
    let a = uniform_vector(len, rng)?;
    let b = uniform_vector(len, rng)?;
    Ok(VectorPair { a, b })
}
